// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UDP device builder.

use std::time::Duration;

use crate::device::Device;
use crate::error::Error;
use crate::protocol::{UdpClient, UdpConfig};
use crate::state::StatusSnapshot;

/// Builder for creating UDP-based devices.
///
/// This builder can be created in two ways:
/// - `Device::udp("host")` - Simple host string
/// - `Device::udp_config(UdpConfig::new("host").with_port(17777))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tfiac_lib::Device;
///
/// # async fn example() -> tfiac_lib::Result<()> {
/// // Reads the initial status
/// let (device, status) = Device::udp("192.168.1.108")
///     .build()
///     .await?;
///
/// // No network access until the first command
/// let device = Device::udp("192.168.1.108")
///     .with_timeout(Duration::from_secs(3))
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UdpDeviceBuilder {
    config: UdpConfig,
}

impl UdpDeviceBuilder {
    /// Creates a new builder with the specified UDP configuration.
    pub(crate) fn new(config: UdpConfig) -> Self {
        Self { config }
    }

    /// Sets a custom destination port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the reply timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets how long a refreshed status is considered current.
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.config = self.config.with_refresh_interval(interval);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &UdpConfig {
        &self.config
    }

    /// Builds the device and reads its initial status.
    ///
    /// The returned snapshot is `None` if the unit answered with a reply
    /// that could not be decoded.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - The unit does not answer (`Error::Unavailable`)
    pub async fn build(self) -> Result<(Device<UdpClient>, Option<StatusSnapshot>), Error> {
        let device = self.build_without_probe()?;
        device.refresh().await?;
        let status = device.status();
        Ok((device, status))
    }

    /// Builds the device without contacting it.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn build_without_probe(self) -> Result<Device<UdpClient>, Error> {
        let refresh_interval = self.config.refresh_interval();
        let client = self.config.into_client().map_err(Error::Protocol)?;
        Ok(Device::with_protocol(client, refresh_interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn builder_applies_options() {
        let builder = Device::udp("10.0.0.5")
            .with_port(17777)
            .with_timeout(Duration::from_secs(1))
            .with_refresh_interval(Duration::from_secs(10));

        assert_eq!(builder.config().port(), 17777);
        assert_eq!(builder.config().timeout(), Duration::from_secs(1));
        assert_eq!(builder.config().refresh_interval(), Duration::from_secs(10));
    }

    #[test]
    fn build_without_probe_keeps_host() {
        let device = Device::udp("10.0.0.5").build_without_probe().unwrap();
        assert_eq!(device.host(), "10.0.0.5");
        assert_eq!(device.protocol().port(), 7777);
        assert!(device.is_available());
        assert!(device.status().is_none());
        assert!(device.name().is_none());
    }

    #[test]
    fn build_without_probe_rejects_empty_host() {
        let result = Device::udp("").build_without_probe();
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InvalidAddress(_)))
        ));
    }
}
