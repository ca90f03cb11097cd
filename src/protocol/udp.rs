// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UDP transport for TFIAC units.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;

use crate::error::ProtocolError;
use crate::protocol::Protocol;

/// Configuration for a TFIAC unit reached over UDP.
///
/// # Examples
///
/// ```
/// use tfiac_lib::protocol::UdpConfig;
/// use std::time::Duration;
///
/// // Defaults: port 7777, 5 second reply timeout
/// let config = UdpConfig::new("192.168.1.108");
/// assert_eq!(config.port(), 7777);
///
/// // With all options
/// let config = UdpConfig::new("192.168.1.108")
///     .with_port(17777)
///     .with_timeout(Duration::from_secs(2))
///     .with_refresh_interval(Duration::from_secs(5))
///     .with_recv_buffer_size(8192);
/// assert_eq!(config.timeout(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct UdpConfig {
    host: String,
    port: u16,
    timeout: Duration,
    refresh_interval: Duration,
    recv_buffer_size: usize,
}

impl UdpConfig {
    /// Port TFIAC units listen on.
    pub const DEFAULT_PORT: u16 = 7777;
    /// How long to wait for a reply datagram.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
    /// How long a refreshed status is considered current.
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2);
    /// Size of the reply buffer. Status replies are around 1 KiB.
    pub const DEFAULT_RECV_BUFFER_SIZE: usize = 4096;

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the unit
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
            refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            recv_buffer_size: Self::DEFAULT_RECV_BUFFER_SIZE,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the reply timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how long a refreshed status is considered current.
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Sets the reply buffer size. Longer replies are truncated.
    #[must_use]
    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the reply timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the refresh interval.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Returns the reply buffer size.
    #[must_use]
    pub fn recv_buffer_size(&self) -> usize {
        self.recv_buffer_size
    }

    /// Creates a `UdpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty or the
    /// buffer size is zero.
    pub fn into_client(self) -> Result<UdpClient, ProtocolError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress("empty host".to_string()));
        }
        if self.recv_buffer_size == 0 {
            return Err(ProtocolError::InvalidAddress(
                "receive buffer size must be positive".to_string(),
            ));
        }

        Ok(UdpClient {
            host: host.to_string(),
            port: self.port,
            timeout: self.timeout,
            recv_buffer_size: self.recv_buffer_size,
        })
    }
}

/// UDP client for a single TFIAC unit.
///
/// Every exchange binds a fresh ephemeral socket with broadcast enabled,
/// sends one datagram and waits for one reply from any source. The socket is
/// dropped when the exchange ends, whatever the outcome.
///
/// # Examples
///
/// ```no_run
/// use tfiac_lib::command::StatusQuery;
/// use tfiac_lib::protocol::{Protocol, UdpClient};
///
/// # async fn example() -> tfiac_lib::Result<()> {
/// let client = UdpClient::new("192.168.1.108")?;
/// let reply = client.send_message(&StatusQuery).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UdpClient {
    host: String,
    port: u16,
    timeout: Duration,
    recv_buffer_size: usize,
}

impl UdpClient {
    /// Creates a client with default settings for the specified host.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        UdpConfig::new(host).into_client()
    }

    /// Returns the destination port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the reply timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn resolve(&self) -> Result<SocketAddr, ProtocolError> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| ProtocolError::InvalidAddress(self.host.clone()))
    }

    fn timeout_millis(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    async fn exchange(&self, message: &str) -> Result<Vec<u8>, ProtocolError> {
        let target = self.resolve().await?;
        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local).await?;
        socket.set_broadcast(true)?;

        tracing::debug!(addr = %target, payload = %message, "Sending TFIAC message");
        socket.send_to(message.as_bytes(), target).await?;

        let mut buf = vec![0u8; self.recv_buffer_size];
        let (len, source) = socket.recv_from(&mut buf).await?;
        buf.truncate(len);
        tracing::debug!(source = %source, bytes = len, "Received TFIAC reply");
        Ok(buf)
    }
}

impl Protocol for UdpClient {
    fn host(&self) -> &str {
        &self.host
    }

    /// Sends one datagram and waits for one reply.
    ///
    /// The timeout covers the whole exchange, name resolution included.
    async fn send_raw(&self, message: &str) -> Result<Vec<u8>, ProtocolError> {
        tokio::time::timeout(self.timeout, self.exchange(message))
            .await
            .unwrap_or_else(|_| {
                tracing::warn!(
                    host = %self.host,
                    timeout_ms = self.timeout_millis(),
                    "No reply from TFIAC unit"
                );
                Err(ProtocolError::Timeout(self.timeout_millis()))
            })
    }
}
