// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swing (louvre movement) direction.
//!
//! The device reports swing as two independent flags, `WindDirection_H` and
//! `WindDirection_V`. [`SwingMode`] packs them into two bits: bit 0 is the
//! horizontal flag and bit 1 the vertical flag.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Swing direction derived from the horizontal and vertical flags.
///
/// # Examples
///
/// ```
/// use tfiac_lib::types::SwingMode;
///
/// let mode = SwingMode::from_flags(true, false);
/// assert_eq!(mode, SwingMode::Horizontal);
/// assert_eq!(mode.flags(), (true, false));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum SwingMode {
    /// No swing.
    #[default]
    Off,
    /// Vertical swing only.
    Vertical,
    /// Horizontal swing only.
    Horizontal,
    /// Both directions.
    Both,
}

impl SwingMode {
    /// All swing modes.
    pub const ALL: [Self; 4] = [Self::Off, Self::Vertical, Self::Horizontal, Self::Both];

    /// Builds the swing mode from the two raw direction flags.
    #[must_use]
    pub fn from_flags(horizontal: bool, vertical: bool) -> Self {
        let bits = u8::from(horizontal) | (u8::from(vertical) << 1);
        Self::from_bits(bits)
    }

    /// Decodes the two-bit encoding. Bits above the lowest two are ignored.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Off,
            1 => Self::Horizontal,
            2 => Self::Vertical,
            _ => Self::Both,
        }
    }

    /// Returns the two-bit encoding.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Horizontal => 1,
            Self::Vertical => 2,
            Self::Both => 3,
        }
    }

    /// Returns the `(horizontal, vertical)` flags.
    #[must_use]
    pub const fn flags(&self) -> (bool, bool) {
        let bits = self.bits();
        (bits & 1 != 0, bits & 2 != 0)
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwingMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValueError::InvalidSwingMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_matches_bit_encoding() {
        assert_eq!(SwingMode::from_flags(false, false), SwingMode::Off);
        assert_eq!(SwingMode::from_flags(true, false), SwingMode::Horizontal);
        assert_eq!(SwingMode::from_flags(false, true), SwingMode::Vertical);
        assert_eq!(SwingMode::from_flags(true, true), SwingMode::Both);
    }

    #[test]
    fn flags_recover_mode() {
        for mode in SwingMode::ALL {
            let (h, v) = mode.flags();
            assert_eq!(SwingMode::from_flags(h, v), mode);
            assert_eq!(SwingMode::from_bits(mode.bits()), mode);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("both".parse::<SwingMode>().unwrap(), SwingMode::Both);
        assert_eq!("Vertical".parse::<SwingMode>().unwrap(), SwingMode::Vertical);
        assert!("3d".parse::<SwingMode>().is_err());
    }
}
