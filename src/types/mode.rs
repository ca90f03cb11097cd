// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation mode and fan speed.
//!
//! The device does not validate either value against a fixed list, so both
//! types keep unrecognized strings verbatim in an `Other` variant instead of
//! rejecting them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating mode of the unit, as carried in `<BaseMode>`.
///
/// # Examples
///
/// ```
/// use tfiac_lib::types::OperationMode;
///
/// let mode: OperationMode = "selfFeel".parse().unwrap();
/// assert_eq!(mode, OperationMode::SelfFeel);
///
/// // Unknown modes are preserved rather than rejected
/// let odd: OperationMode = "turbo".parse().unwrap();
/// assert_eq!(odd.as_str(), "turbo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", from = "String")]
pub enum OperationMode {
    /// Heating.
    Heat,
    /// Automatic ("feel") mode.
    SelfFeel,
    /// Dehumidifying.
    Dehumidify,
    /// Fan only.
    Fan,
    /// Cooling.
    Cool,
    /// A mode string this library does not know about.
    Other(String),
}

impl OperationMode {
    /// Modes known to be supported by TFIAC units.
    pub const ALL: [Self; 5] = [
        Self::Heat,
        Self::SelfFeel,
        Self::Dehumidify,
        Self::Fan,
        Self::Cool,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heat => "heat",
            Self::SelfFeel => "selfFeel",
            Self::Dehumidify => "dehumi",
            Self::Fan => "fan",
            Self::Cool => "cool",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OperationMode {
    fn from(s: &str) -> Self {
        match s {
            "heat" => Self::Heat,
            "selfFeel" => Self::SelfFeel,
            "dehumi" => Self::Dehumidify,
            "fan" => Self::Fan,
            "cool" => Self::Cool,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for OperationMode {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<OperationMode> for String {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for OperationMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Fan speed, as carried in `<WindSpeed>`.
///
/// Which speeds are legal depends on the operation mode; that restriction is
/// enforced by the device, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FanSpeed {
    /// Automatic.
    Auto,
    /// Low.
    Low,
    /// Middle.
    Middle,
    /// High.
    High,
    /// A speed string this library does not know about.
    Other(String),
}

impl FanSpeed {
    /// Speeds known to be supported by TFIAC units.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Low, Self::Middle, Self::High];

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "Auto",
            Self::Low => "Low",
            Self::Middle => "Middle",
            Self::High => "High",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FanSpeed {
    fn from(s: &str) -> Self {
        match s {
            "Auto" => Self::Auto,
            "Low" => Self::Low,
            "Middle" => Self::Middle,
            "High" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FanSpeed {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FanSpeed> for String {
    fn from(speed: FanSpeed) -> Self {
        match speed {
            FanSpeed::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for FanSpeed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
