// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired-state overlay and the changes merged into it.

use crate::state::StatusSnapshot;
use crate::types::{FanSpeed, OperationMode, PowerState, Temperature};

/// A single change to one controllable attribute.
///
/// # Examples
///
/// ```
/// use tfiac_lib::state::StateChange;
/// use tfiac_lib::types::{FanSpeed, PowerState};
///
/// let off = StateChange::Power(PowerState::Off);
/// let fan = StateChange::FanSpeed(FanSpeed::High);
/// assert_ne!(off, fan);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Switch the unit on or off.
    Power(PowerState),
    /// Change the operation mode. Implies [`PowerState::On`].
    Mode(OperationMode),
    /// Change the target temperature.
    TargetTemperature(Temperature),
    /// Change the fan speed.
    FanSpeed(FanSpeed),
}

/// Values sent with the next set command.
///
/// The overlay is cumulative: every change is merged into it and the whole
/// overlay is sent each time. A freshly read status replaces every field
/// ([`reset_from`](Self::reset_from)); without one, earlier values persist
/// and only unset fields are filled ([`seed_from`](Self::seed_from)).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesiredState {
    /// Pending `TurnOn` value.
    pub power: Option<PowerState>,
    /// Pending `BaseMode` value.
    pub mode: Option<OperationMode>,
    /// Pending `SetTemp` value.
    pub target_temperature: Option<Temperature>,
    /// Pending `WindSpeed` value.
    pub fan_speed: Option<FanSpeed>,
}

impl DesiredState {
    /// Merges a change into the overlay.
    pub fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::Power(power) => self.power = Some(power),
            StateChange::Mode(mode) => {
                self.mode = Some(mode);
                self.power = Some(PowerState::On);
            }
            StateChange::TargetTemperature(temperature) => {
                self.target_temperature = Some(temperature);
            }
            StateChange::FanSpeed(speed) => self.fan_speed = Some(speed),
        }
    }

    /// Replaces every field with the values of a confirmed snapshot.
    pub fn reset_from(&mut self, snapshot: &StatusSnapshot) {
        self.power = Some(snapshot.power_state);
        self.mode = Some(snapshot.operation_mode.clone());
        self.target_temperature = Some(snapshot.target_temperature);
        self.fan_speed = Some(snapshot.fan_mode.clone());
    }

    /// Fills every unset field from a confirmed snapshot.
    pub fn seed_from(&mut self, snapshot: &StatusSnapshot) {
        self.power.get_or_insert(snapshot.power_state);
        self.mode.get_or_insert_with(|| snapshot.operation_mode.clone());
        self.target_temperature.get_or_insert(snapshot.target_temperature);
        self.fan_speed.get_or_insert_with(|| snapshot.fan_mode.clone());
    }

    /// Returns `true` if every field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.power.is_some()
            && self.mode.is_some()
            && self.target_temperature.is_some()
            && self.fan_speed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SwingMode;

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            current_temperature: Temperature::new(70.0).unwrap(),
            target_temperature: Temperature::new(77.0).unwrap(),
            operation_mode: OperationMode::SelfFeel,
            fan_mode: FanSpeed::Low,
            swing_mode: SwingMode::Off,
            power_state: PowerState::Off,
            device_name: "Katie AC".to_string(),
        }
    }

    #[test]
    fn mode_change_forces_power_on() {
        let mut desired = DesiredState::default();
        desired.apply(StateChange::Mode(OperationMode::Cool));
        assert_eq!(desired.mode, Some(OperationMode::Cool));
        assert_eq!(desired.power, Some(PowerState::On));
    }

    #[test]
    fn mode_change_overrides_explicit_off() {
        let mut desired = DesiredState::default();
        desired.apply(StateChange::Power(PowerState::Off));
        desired.apply(StateChange::Mode(OperationMode::Heat));
        assert_eq!(desired.power, Some(PowerState::On));
    }

    #[test]
    fn other_changes_leave_power_alone() {
        let mut desired = DesiredState::default();
        desired.apply(StateChange::FanSpeed(FanSpeed::High));
        desired.apply(StateChange::TargetTemperature(Temperature::new(65.0).unwrap()));
        assert_eq!(desired.power, None);
        assert!(!desired.is_complete());
    }

    #[test]
    fn reset_overwrites_every_field() {
        let mut desired = DesiredState::default();
        desired.apply(StateChange::Mode(OperationMode::Cool));
        desired.apply(StateChange::FanSpeed(FanSpeed::High));
        desired.reset_from(&snapshot());

        assert_eq!(desired.power, Some(PowerState::Off));
        assert_eq!(desired.mode, Some(OperationMode::SelfFeel));
        assert_eq!(desired.fan_speed, Some(FanSpeed::Low));
        assert_eq!(
            desired.target_temperature,
            Some(Temperature::new(77.0).unwrap())
        );
    }

    #[test]
    fn seeding_fills_only_empty_fields() {
        let mut desired = DesiredState::default();
        desired.apply(StateChange::FanSpeed(FanSpeed::High));
        desired.seed_from(&snapshot());

        assert!(desired.is_complete());
        assert_eq!(desired.fan_speed, Some(FanSpeed::High));
        assert_eq!(desired.mode, Some(OperationMode::SelfFeel));
        assert_eq!(desired.power, Some(PowerState::Off));
        assert_eq!(
            desired.target_temperature,
            Some(Temperature::new(77.0).unwrap())
        );
    }
}
