// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Confirmed device status.

use crate::types::{FanSpeed, OperationMode, PowerState, SwingMode, Temperature};

/// Last status reported by the unit.
///
/// Every field is required: a snapshot only exists once a full status reply
/// has been parsed, and it is replaced as a whole on the next one.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatusSnapshot {
    /// Indoor temperature (`IndoorTemp`).
    pub current_temperature: Temperature,
    /// Target temperature (`SetTemp`).
    pub target_temperature: Temperature,
    /// Operation mode (`BaseMode`).
    pub operation_mode: OperationMode,
    /// Fan speed (`WindSpeed`).
    pub fan_mode: FanSpeed,
    /// Swing, derived from `WindDirection_H` and `WindDirection_V`.
    pub swing_mode: SwingMode,
    /// Power (`TurnOn`).
    pub power_state: PowerState,
    /// User-assigned name of the unit (`DeviceName`).
    pub device_name: String,
}

impl StatusSnapshot {
    /// Returns `true` if the unit is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power_state.is_on()
    }
}
