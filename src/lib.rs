// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tfiac_lib` - A Rust library to control TFIAC air conditioners.
//!
//! TFIAC units are controlled over the local network by exchanging small
//! XML messages over UDP (port 7777). This library provides an async API
//! on top of that protocol.
//!
//! # Supported Features
//!
//! - **Status**: indoor and target temperature, mode, fan speed, swing, power, name
//! - **Power control**: turn the unit on/off
//! - **Climate control**: operation mode, target temperature, fan speed
//! - **Swing control**: off, vertical, horizontal, both
//! - **Reachability**: the device reports whether it answered the last exchange
//!
//! # Quick Start
//!
//! ```no_run
//! use tfiac_lib::Device;
//! use tfiac_lib::types::{FanSpeed, OperationMode, SwingMode, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> tfiac_lib::Result<()> {
//!     // Returns (device, initial_status) tuple
//!     let (device, _status) = Device::udp("192.168.1.108").build().await?;
//!
//!     // Selecting a mode also switches the unit on
//!     device.set_mode(OperationMode::Cool).await?;
//!     device.set_target_temperature(Temperature::new(72.0)?).await?;
//!     device.set_fan_speed(FanSpeed::Auto).await?;
//!     device.set_swing(SwingMode::Vertical).await?;
//!
//!     // Commands are not confirmed; read the status back
//!     device.refresh().await?;
//!     println!("{:?}", device.status());
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! - [`Error::Unavailable`]: the unit did not answer within the timeout.
//!   [`Device::is_available`] turns `false` until the next reply.
//! - Undecodable status replies do not fail [`Device::refresh`]; they are
//!   logged and reported as [`RefreshOutcome::DecodeFailed`].
//! - [`Error::MissingField`]: a set command could not be rendered because a
//!   field has never been known (no status has been read yet).

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::{Message, SequenceId, SetCommand, SetSwingCommand, StatusQuery};
pub use device::{Device, RefreshOutcome, UdpDeviceBuilder};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{Protocol, UdpClient, UdpConfig};
pub use response::StatusResponse;
pub use state::{DesiredState, StateChange, StatusSnapshot};
pub use types::{FanSpeed, OperationMode, PowerState, SwingMode, Temperature};
