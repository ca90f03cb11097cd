// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for TFIAC device control.
//!
//! This module provides type-safe representations of the values carried in
//! TFIAC messages.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off (`<TurnOn>`)
//! - [`OperationMode`] - heat, selfFeel, dehumi, fan, cool (`<BaseMode>`)
//! - [`FanSpeed`] - Auto, Low, Middle, High (`<WindSpeed>`)
//! - [`SwingMode`] - Off, Vertical, Horizontal, Both (`<WindDirection_H>` + `<WindDirection_V>`)
//! - [`Temperature`] - Two-decimal temperature (`<SetTemp>`, `<IndoorTemp>`)

mod mode;
mod power;
mod swing;
mod temperature;

pub use mode::{FanSpeed, OperationMode};
pub use power::PowerState;
pub use swing::SwingMode;
pub use temperature::Temperature;
