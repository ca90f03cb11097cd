// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature values.

use std::fmt;

use crate::error::ValueError;

/// A temperature, normalized to two decimal places.
///
/// TFIAC units work in the unit configured on the device (°F on the units
/// this library was written against). The value is rounded on construction
/// so that re-reading an unchanged device state yields identical numbers.
///
/// # Examples
///
/// ```
/// use tfiac_lib::types::Temperature;
///
/// let t = Temperature::new(77.004).unwrap();
/// assert_eq!(t.value(), 77.0);
/// assert_eq!(t, Temperature::new(77.0).unwrap());
///
/// assert!(Temperature::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    /// Lowest target temperature the units accept.
    pub const MIN: Self = Self(61.0);

    /// Highest target temperature the units accept.
    pub const MAX: Self = Self(88.0);

    /// Creates a temperature rounded to two decimal places.
    ///
    /// The [`MIN`](Self::MIN)/[`MAX`](Self::MAX) range is not enforced here;
    /// the device clamps out-of-range targets itself.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::InvalidTemperature(value));
        }
        Ok(Self((value * 100.0).round() / 100.0))
    }

    /// Returns the temperature value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(temperature: Temperature) -> Self {
        temperature.0
    }
}
