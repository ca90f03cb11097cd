// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set commands.
//!
//! A TFIAC unit has no per-field setters: every [`SetCommand`] carries the
//! complete set of power, mode, target temperature and fan speed. Swing is
//! the exception and is sent on its own with [`SetSwingCommand`].

use crate::command::{Message, escape};
use crate::error::Error;
use crate::state::DesiredState;
use crate::types::{FanSpeed, OperationMode, PowerState, SwingMode, Temperature};

const SWING_OFF: &str =
    "<WindDirection_H>off</WindDirection_H><WindDirection_V>off</WindDirection_V>";
const SWING_VERTICAL: &str =
    "<WindDirection_H>off</WindDirection_H><WindDirection_V>on</WindDirection_V>";
const SWING_HORIZONTAL: &str =
    "<WindDirection_H>on</WindDirection_H><WindDirection_V>off</WindDirection_V>";
const SWING_BOTH: &str =
    "<WindDirection_H>on</WindDirection_H><WindDirection_V>on</WindDirection_V>";

/// Full-state update of the unit.
///
/// # Examples
///
/// ```
/// use tfiac_lib::command::{Message, SetCommand};
/// use tfiac_lib::types::{FanSpeed, OperationMode, PowerState, Temperature};
///
/// let cmd = SetCommand {
///     power: PowerState::On,
///     mode: OperationMode::Cool,
///     target_temperature: Temperature::new(72.0).unwrap(),
///     fan_speed: FanSpeed::Auto,
/// };
/// assert_eq!(
///     cmd.body(),
///     "<TurnOn>on</TurnOn><BaseMode>cool</BaseMode><SetTemp>72</SetTemp><WindSpeed>Auto</WindSpeed>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetCommand {
    /// Value for `<TurnOn>`.
    pub power: PowerState,
    /// Value for `<BaseMode>`.
    pub mode: OperationMode,
    /// Value for `<SetTemp>`.
    pub target_temperature: Temperature,
    /// Value for `<WindSpeed>`.
    pub fan_speed: FanSpeed,
}

impl SetCommand {
    /// Builds the command from an accumulated desired state.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingField` naming the first wire field that has no
    /// value in `desired`.
    pub fn from_desired(desired: &DesiredState) -> Result<Self, Error> {
        Ok(Self {
            power: desired.power.ok_or(Error::MissingField("TurnOn"))?,
            mode: desired
                .mode
                .clone()
                .ok_or(Error::MissingField("BaseMode"))?,
            target_temperature: desired
                .target_temperature
                .ok_or(Error::MissingField("SetTemp"))?,
            fan_speed: desired
                .fan_speed
                .clone()
                .ok_or(Error::MissingField("WindSpeed"))?,
        })
    }
}

impl Message for SetCommand {
    fn msg_id(&self) -> &'static str {
        "SetMessage"
    }

    fn body(&self) -> String {
        format!(
            "<TurnOn>{}</TurnOn><BaseMode>{}</BaseMode><SetTemp>{}</SetTemp><WindSpeed>{}</WindSpeed>",
            self.power,
            escape(self.mode.as_str()),
            self.target_temperature,
            escape(self.fan_speed.as_str()),
        )
    }
}

/// Sets the swing direction without touching any other setting.
///
/// # Examples
///
/// ```
/// use tfiac_lib::command::{Message, SetSwingCommand};
/// use tfiac_lib::types::SwingMode;
///
/// let cmd = SetSwingCommand(SwingMode::Vertical);
/// assert_eq!(
///     cmd.body(),
///     "<WindDirection_H>off</WindDirection_H><WindDirection_V>on</WindDirection_V>"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSwingCommand(pub SwingMode);

impl Message for SetSwingCommand {
    fn msg_id(&self) -> &'static str {
        "SetMessage"
    }

    fn body(&self) -> String {
        match self.0 {
            SwingMode::Off => SWING_OFF,
            SwingMode::Vertical => SWING_VERTICAL,
            SwingMode::Horizontal => SWING_HORIZONTAL,
            SwingMode::Both => SWING_BOTH,
        }
        .to_string()
    }
}
