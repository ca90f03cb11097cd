// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for communicating with TFIAC units.
//!
//! TFIAC units speak XML over UDP on port 7777. Each exchange is one request
//! datagram followed by at most one reply datagram; there is no connection
//! to keep alive.
//!
//! - [`UdpClient`]: the UDP transport, configured through [`UdpConfig`]
//! - [`Protocol`]: the seam the device session talks to, so other transports
//!   (or test doubles) can be plugged in

mod udp;

pub use udp::{UdpClient, UdpConfig};

use crate::command::{Message, SequenceId};
use crate::error::ProtocolError;

/// Trait for transports that can exchange messages with a TFIAC unit.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Returns the host this transport talks to.
    fn host(&self) -> &str;

    /// Sends a message stamped with a fresh sequence id and returns the raw
    /// reply.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Timeout` if no reply arrives in time, or
    /// another `ProtocolError` if the exchange fails.
    async fn send_message<M: Message + Sync>(&self, message: &M) -> Result<Vec<u8>, ProtocolError> {
        let xml = message.to_xml(&SequenceId::now());
        self.send_raw(&xml).await
    }

    /// Sends an already-rendered message and returns the raw reply.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send_raw(&self, message: &str) -> Result<Vec<u8>, ProtocolError>;
}
