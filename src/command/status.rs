// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query message.

use crate::command::Message;

/// Asks the unit to reply with a `statusUpdateMsg`.
///
/// # Examples
///
/// ```
/// use tfiac_lib::command::{Message, StatusQuery};
///
/// assert_eq!(StatusQuery.msg_id(), "SyncStatusReq");
/// assert!(StatusQuery.body().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusQuery;

impl Message for StatusQuery {
    fn msg_id(&self) -> &'static str {
        "SyncStatusReq"
    }

    fn body(&self) -> String {
        String::new()
    }
}
