// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TFIAC message definitions.
//!
//! Every message sent to a TFIAC unit shares the same envelope:
//!
//! ```text
//! <msg msgid="{id}" type="Control" seq="{seq}"><{id}>{body}</{id}></msg>
//! ```
//!
//! | Message | `msgid` | Body |
//! |---------|---------|------|
//! | [`StatusQuery`] | `SyncStatusReq` | empty |
//! | [`SetCommand`] | `SetMessage` | `TurnOn`, `BaseMode`, `SetTemp`, `WindSpeed` |
//! | [`SetSwingCommand`] | `SetMessage` | `WindDirection_H`, `WindDirection_V` |
//!
//! # Examples
//!
//! ```
//! use tfiac_lib::command::{Message, SequenceId, StatusQuery};
//!
//! let xml = StatusQuery.to_xml(&SequenceId::from_millis(1_700_000_123_456));
//! assert_eq!(
//!     xml,
//!     r#"<msg msgid="SyncStatusReq" type="Control" seq="0123456"><SyncStatusReq></SyncStatusReq></msg>"#
//! );
//! ```

mod sequence;
mod set;
mod status;

pub use sequence::SequenceId;
pub use set::{SetCommand, SetSwingCommand};
pub use status::StatusQuery;

/// A message that can be sent to a TFIAC unit.
pub trait Message {
    /// Returns the message id, used both as the `msgid` attribute and as the
    /// name of the element wrapping the body.
    fn msg_id(&self) -> &'static str;

    /// Returns the already-escaped inner XML of the body element.
    fn body(&self) -> String;

    /// Renders the full envelope with the given sequence id.
    fn to_xml(&self, seq: &SequenceId) -> String {
        let id = self.msg_id();
        format!(
            r#"<msg msgid="{id}" type="Control" seq="{seq}"><{id}>{body}</{id}></msg>"#,
            body = self.body()
        )
    }
}

/// Escapes text for use as XML element content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
