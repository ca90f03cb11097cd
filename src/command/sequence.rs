// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Message sequence ids.

use std::fmt;

/// Number of trailing digits of the millisecond clock kept in a sequence id.
const DIGITS: usize = 7;

/// Per-message sequence id: the last seven digits of the wall clock in
/// milliseconds.
///
/// Ids are not unique within a millisecond and wrap every 10^7 ms (about
/// 2.8 hours). Between wraps, a later id never compares lower than an
/// earlier one.
///
/// # Examples
///
/// ```
/// use tfiac_lib::command::SequenceId;
///
/// let seq = SequenceId::from_millis(1_700_000_123_456);
/// assert_eq!(seq.as_str(), "0123456");
///
/// // Short clocks are kept whole
/// assert_eq!(SequenceId::from_millis(987).as_str(), "987");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceId(String);

impl SequenceId {
    /// Derives a fresh id from the current wall clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from_millis(chrono::Utc::now().timestamp_millis())
    }

    /// Derives an id from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        let digits = millis.unsigned_abs().to_string();
        let start = digits.len().saturating_sub(DIGITS);
        Self(digits[start..].to_string())
    }

    /// Returns the id as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
