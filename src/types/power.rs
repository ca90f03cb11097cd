// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of the air conditioner.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of the unit, as carried in `<TurnOn>`.
///
/// # Examples
///
/// ```
/// use tfiac_lib::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "on");
/// assert_eq!("off".parse::<PowerState>().unwrap(), PowerState::Off);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Unit is off.
    #[default]
    Off,
    /// Unit is on.
    On,
}

impl PowerState {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` if the unit is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_as_str() {
        assert_eq!(PowerState::Off.as_str(), "off");
        assert_eq!(PowerState::On.as_str(), "on");
    }

    #[test]
    fn power_state_from_str() {
        assert_eq!("on".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("OFF".parse::<PowerState>().unwrap(), PowerState::Off);
    }

    #[test]
    fn power_state_from_str_invalid() {
        let result = "toggle".parse::<PowerState>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerState(_)
        ));
    }

    #[test]
    fn power_state_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert!(!PowerState::from(false).is_on());
    }
}
