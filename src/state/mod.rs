// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! Two kinds of state are tracked per device:
//!
//! - [`StatusSnapshot`]: the last status confirmed by the device. It is only
//!   ever produced by parsing a complete `statusUpdateMsg` reply.
//! - [`DesiredState`]: the cumulative overlay of values sent with every set
//!   command. [`StateChange`]s are merged into it one at a time.
//!
//! # Examples
//!
//! ```
//! use tfiac_lib::state::{DesiredState, StateChange};
//! use tfiac_lib::types::{OperationMode, PowerState};
//!
//! let mut desired = DesiredState::default();
//! desired.apply(StateChange::Mode(OperationMode::Cool));
//!
//! // Selecting a mode also switches the unit on
//! assert_eq!(desired.power, Some(PowerState::On));
//! ```

mod desired_state;
mod snapshot;

pub use desired_state::{DesiredState, StateChange};
pub use snapshot::StatusSnapshot;
