// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level session with a single TFIAC air conditioner.
//!
//! A [`Device`] owns everything known about one unit: the last confirmed
//! [`StatusSnapshot`], the cumulative [`DesiredState`] sent with set
//! commands, and whether the unit answered the last exchange.
//!
//! ```no_run
//! use tfiac_lib::Device;
//! use tfiac_lib::types::{OperationMode, Temperature};
//!
//! # async fn example() -> tfiac_lib::Result<()> {
//! let (device, _initial) = Device::udp("192.168.1.108").build().await?;
//!
//! device.set_mode(OperationMode::Cool).await?;
//! device.set_target_temperature(Temperature::new(72.0)?).await?;
//!
//! device.refresh().await?;
//! if let Some(status) = device.status() {
//!     println!("{} is at {}", status.device_name, status.current_temperature);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Freshness
//!
//! A status refreshed less than the refresh interval ago (2 seconds by
//! default) is considered current and [`Device::refresh`] returns
//! [`RefreshOutcome::Skipped`] without touching the network. Every set
//! command marks the status stale again.
//!
//! # Concurrency
//!
//! Methods take `&self`, but calls against one device are not ordered with
//! respect to each other. Callers should keep one operation in flight per
//! device. Separate devices are fully independent.

mod udp_builder;

pub use udp_builder::UdpDeviceBuilder;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::command::{Message, SetCommand, SetSwingCommand, StatusQuery};
use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{Protocol, UdpClient, UdpConfig};
use crate::response::StatusResponse;
use crate::state::{DesiredState, StateChange, StatusSnapshot};
use crate::types::{FanSpeed, OperationMode, PowerState, SwingMode, Temperature};

/// Result of a [`Device::refresh`] call that did not fail at the transport
/// level.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The status was still current; nothing was sent.
    Skipped,
    /// A new snapshot was stored.
    Updated,
    /// The unit replied, but the reply could not be decoded. The previous
    /// snapshot is untouched.
    DecodeFailed {
        /// Why decoding failed.
        error: ParseError,
        /// The reply as received.
        raw: Vec<u8>,
    },
}

impl RefreshOutcome {
    /// Returns `true` if a new snapshot was stored.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

#[derive(Debug, Default)]
struct Session {
    snapshot: Option<StatusSnapshot>,
    desired: DesiredState,
    last_refresh: Option<Instant>,
    last_updated: Option<DateTime<Utc>>,
}

/// A TFIAC air conditioner.
///
/// The type parameter `P` is the transport; [`UdpClient`] for real units.
#[derive(Debug)]
pub struct Device<P: Protocol> {
    protocol: P,
    refresh_interval: Duration,
    session: Mutex<Session>,
    available: AtomicBool,
}

impl Device<UdpClient> {
    /// Starts building a device reached over UDP at `host`.
    #[must_use]
    pub fn udp(host: impl Into<String>) -> UdpDeviceBuilder {
        UdpDeviceBuilder::new(UdpConfig::new(host))
    }

    /// Starts building a device from a full UDP configuration.
    #[must_use]
    pub fn udp_config(config: UdpConfig) -> UdpDeviceBuilder {
        UdpDeviceBuilder::new(config)
    }
}

impl<P: Protocol> Device<P> {
    /// Creates a device on top of any transport.
    ///
    /// # Arguments
    ///
    /// * `protocol` - The transport used for every exchange
    /// * `refresh_interval` - How long a refreshed status stays current
    pub fn with_protocol(protocol: P, refresh_interval: Duration) -> Self {
        Self {
            protocol,
            refresh_interval,
            session: Mutex::new(Session::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Returns the host of the unit.
    #[must_use]
    pub fn host(&self) -> &str {
        self.protocol.host()
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the name the unit reported, once a status has been read.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.session
            .lock()
            .snapshot
            .as_ref()
            .map(|s| s.device_name.clone())
    }

    /// Returns whether the unit answered the last exchange.
    ///
    /// Starts out `true`; becomes `false` when an exchange times out and
    /// `true` again on the next reply.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Returns the last confirmed status, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusSnapshot> {
        self.session.lock().snapshot.clone()
    }

    /// Returns the overlay that will be sent with the next set command.
    #[must_use]
    pub fn desired_state(&self) -> DesiredState {
        self.session.lock().desired.clone()
    }

    /// Returns when the last status was stored.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.session.lock().last_updated
    }

    fn is_current(&self) -> bool {
        self.session
            .lock()
            .last_refresh
            .is_some_and(|at| at.elapsed() < self.refresh_interval)
    }

    fn mark_stale(&self) {
        self.session.lock().last_refresh = None;
    }

    async fn exchange<M: Message + Sync>(&self, message: &M) -> Result<Vec<u8>, Error> {
        match self.protocol.send_message(message).await {
            Ok(reply) => {
                self.available.store(true, Ordering::Release);
                Ok(reply)
            }
            Err(ProtocolError::Timeout(ms)) => {
                self.available.store(false, Ordering::Release);
                tracing::warn!(host = %self.host(), timeout_ms = ms, "Device unavailable");
                Err(Error::Unavailable)
            }
            Err(e) => Err(Error::Protocol(e)),
        }
    }

    // ========== Status ==========

    /// Reads the current status from the unit, unless the stored one is
    /// still current.
    ///
    /// A reply that cannot be decoded does not fail the call: it is logged
    /// and returned as [`RefreshOutcome::DecodeFailed`], and the previous
    /// snapshot is kept.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unavailable` if the unit does not answer, or
    /// `Error::Protocol` if the exchange fails otherwise.
    pub async fn refresh(&self) -> Result<RefreshOutcome, Error> {
        if self.is_current() {
            tracing::trace!(host = %self.host(), "Status still current, skipping refresh");
            return Ok(RefreshOutcome::Skipped);
        }

        let raw = self.exchange(&StatusQuery).await?;

        match StatusResponse::parse(&raw).and_then(|r| r.to_snapshot()) {
            Ok(snapshot) => {
                tracing::debug!(host = %self.host(), status = ?snapshot, "Status updated");
                let mut session = self.session.lock();
                session.snapshot = Some(snapshot);
                session.last_refresh = Some(Instant::now());
                session.last_updated = Some(Utc::now());
                Ok(RefreshOutcome::Updated)
            }
            Err(error) => {
                tracing::warn!(
                    host = %self.host(),
                    error = %error,
                    reply = %String::from_utf8_lossy(&raw),
                    "Failed to decode status reply"
                );
                Ok(RefreshOutcome::DecodeFailed { error, raw })
            }
        }
    }

    // ========== Control ==========

    /// Merges one change into the desired state and sends the whole of it.
    ///
    /// The status is refreshed first. When a new status is read, it replaces
    /// the whole desired state, so changes made on the unit itself (remote
    /// control, another client) are not undone. Otherwise the previous
    /// desired state is kept and only unset fields are filled from the last
    /// known status. Setting the operation mode also switches the unit on.
    /// The change is not confirmed; call [`refresh`](Self::refresh)
    /// afterwards to observe it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unavailable` if the unit does not answer, or
    /// `Error::MissingField` if the desired state is still incomplete (no
    /// status has ever been read and the field was never set).
    pub async fn set_field(&self, change: StateChange) -> Result<(), Error> {
        let refreshed = self.refresh().await?.is_updated();

        let command = {
            let mut guard = self.session.lock();
            let session = &mut *guard;
            if let Some(snapshot) = &session.snapshot {
                if refreshed {
                    session.desired.reset_from(snapshot);
                } else {
                    session.desired.seed_from(snapshot);
                }
            }
            session.desired.apply(change);
            SetCommand::from_desired(&session.desired)?
        };

        tracing::debug!(host = %self.host(), command = ?command, "Sending set command");
        self.exchange(&command).await?;
        self.mark_stale();
        Ok(())
    }

    /// Switches the unit on.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn power_on(&self) -> Result<(), Error> {
        self.set_power(PowerState::On).await
    }

    /// Switches the unit off.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn power_off(&self) -> Result<(), Error> {
        self.set_power(PowerState::Off).await
    }

    /// Sets the power state.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn set_power(&self, state: PowerState) -> Result<(), Error> {
        self.set_field(StateChange::Power(state)).await
    }

    /// Sets the operation mode, switching the unit on.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn set_mode(&self, mode: OperationMode) -> Result<(), Error> {
        self.set_field(StateChange::Mode(mode)).await
    }

    /// Sets the target temperature.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn set_target_temperature(&self, temperature: Temperature) -> Result<(), Error> {
        self.set_field(StateChange::TargetTemperature(temperature)).await
    }

    /// Sets the fan speed.
    ///
    /// # Errors
    ///
    /// See [`set_field`](Self::set_field).
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<(), Error> {
        self.set_field(StateChange::FanSpeed(speed)).await
    }

    /// Sets the swing direction.
    ///
    /// Unlike the other setters this neither refreshes first nor touches the
    /// desired state.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unavailable` if the unit does not answer.
    pub async fn set_swing(&self, mode: SwingMode) -> Result<(), Error> {
        tracing::debug!(host = %self.host(), swing = %mode, "Sending swing command");
        self.exchange(&SetSwingCommand(mode)).await?;
        self.mark_stale();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    const STATUS: &str = r#"<msg msgid="statusUpdateMsg" type="Control" seq="555"><statusUpdateMsg><BaseMode>selfFeel</BaseMode><TurnOn>off</TurnOn><Opt_ECO>off</Opt_ECO><SetTemp>77</SetTemp><WindSpeed>Low</WindSpeed><WindDirection_H>on</WindDirection_H><WindDirection_V>off</WindDirection_V><IndoorTemp>70.004</IndoorTemp><OutdoorTemp>0</OutdoorTemp><DeviceName>Katie AC</DeviceName></statusUpdateMsg></msg>"#;

    /// Transport that replays scripted replies and records what was sent.
    #[derive(Debug, Default)]
    struct ScriptedProtocol {
        replies: Mutex<VecDeque<Result<Vec<u8>, ProtocolError>>>,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedProtocol {
        fn reply(self, body: &str) -> Self {
            self.replies.lock().push_back(Ok(body.as_bytes().to_vec()));
            self
        }

        fn timeout(self) -> Self {
            self.replies.lock().push_back(Err(ProtocolError::Timeout(5000)));
            self
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().clone()
        }
    }

    impl Protocol for ScriptedProtocol {
        fn host(&self) -> &str {
            "scripted"
        }

        async fn send_raw(&self, message: &str) -> Result<Vec<u8>, ProtocolError> {
            self.sent.lock().push(message.to_string());
            self.replies
                .lock()
                .pop_front()
                .unwrap_or(Err(ProtocolError::Timeout(5000)))
        }
    }

    fn device(protocol: ScriptedProtocol) -> Device<ScriptedProtocol> {
        Device::with_protocol(protocol, UdpConfig::DEFAULT_REFRESH_INTERVAL)
    }

    fn set_body(xml: &str) -> &str {
        let start = xml.find("<SetMessage>").unwrap() + "<SetMessage>".len();
        let end = xml.find("</SetMessage>").unwrap();
        &xml[start..end]
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_stores_snapshot() {
        let device = device(ScriptedProtocol::default().reply(STATUS));

        let outcome = device.refresh().await.unwrap();
        assert!(outcome.is_updated());

        let status = device.status().unwrap();
        assert_eq!(device.name().as_deref(), Some("Katie AC"));
        assert_eq!(status.swing_mode, SwingMode::Horizontal);
        assert_eq!(status.current_temperature.value(), 70.0);
        assert!(device.last_updated().is_some());
        assert!(device.protocol().sent()[0].contains(r#"msgid="SyncStatusReq""#));
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_within_interval_is_coalesced() {
        let device = device(ScriptedProtocol::default().reply(STATUS).reply(STATUS));

        device.refresh().await.unwrap();
        tokio::time::advance(Duration::from_millis(1500)).await;
        let second = device.refresh().await.unwrap();

        assert!(matches!(second, RefreshOutcome::Skipped));
        assert_eq!(device.protocol().sent().len(), 1);

        tokio::time::advance(Duration::from_millis(600)).await;
        assert!(device.refresh().await.unwrap().is_updated());
        assert_eq!(device.protocol().sent().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn decode_failure_keeps_previous_snapshot() {
        let incomplete = STATUS.replace("<DeviceName>Katie AC</DeviceName>", "");
        let device = device(ScriptedProtocol::default().reply(STATUS).reply(&incomplete));

        device.refresh().await.unwrap();
        let before = device.status();
        tokio::time::advance(Duration::from_secs(3)).await;

        let outcome = device.refresh().await.unwrap();
        match outcome {
            RefreshOutcome::DecodeFailed { error, raw } => {
                assert!(matches!(error, ParseError::MissingField(ref f) if f == "DeviceName"));
                assert_eq!(raw, incomplete.as_bytes());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(device.status(), before);
        assert_eq!(device.name().as_deref(), Some("Katie AC"));
    }

    #[tokio::test(start_paused = true)]
    async fn decode_failure_does_not_mark_status_current() {
        let device = device(ScriptedProtocol::default().reply("garbage").reply(STATUS));

        let first = device.refresh().await.unwrap();
        assert!(matches!(first, RefreshOutcome::DecodeFailed { .. }));
        assert!(device.status().is_none());

        assert!(device.refresh().await.unwrap().is_updated());
        assert_eq!(device.protocol().sent().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_marks_unavailable_until_next_reply() {
        let device = device(ScriptedProtocol::default().timeout().reply(STATUS));
        assert!(device.is_available());

        let err = device.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Unavailable));
        assert!(!device.is_available());
        assert!(device.status().is_none());

        device.refresh().await.unwrap();
        assert!(device.is_available());
    }

    #[tokio::test(start_paused = true)]
    async fn set_mode_forces_power_on() {
        // Unit reports power off; selecting a mode must send TurnOn=on.
        let device = device(ScriptedProtocol::default().reply(STATUS).reply("<ack/>"));

        device.set_mode(OperationMode::Cool).await.unwrap();

        let sent = device.protocol().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            set_body(&sent[1]),
            "<TurnOn>on</TurnOn><BaseMode>cool</BaseMode><SetTemp>77</SetTemp><WindSpeed>Low</WindSpeed>"
        );
        assert_eq!(device.desired_state().power, Some(PowerState::On));
    }

    #[tokio::test(start_paused = true)]
    async fn overlay_persists_while_status_cannot_be_read() {
        let device = device(
            ScriptedProtocol::default()
                .reply(STATUS)
                .reply("<ack/>")
                .reply("not xml")
                .reply("<ack/>"),
        );

        device.set_fan_speed(FanSpeed::High).await.unwrap();
        device
            .set_target_temperature(Temperature::new(68.0).unwrap())
            .await
            .unwrap();

        let sent = device.protocol().sent();
        assert_eq!(sent.len(), 4);
        assert_eq!(
            set_body(&sent[3]),
            "<TurnOn>off</TurnOn><BaseMode>selfFeel</BaseMode><SetTemp>68</SetTemp><WindSpeed>High</WindSpeed>"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_status_replaces_overlay() {
        let cooling = STATUS
            .replace("<TurnOn>off</TurnOn>", "<TurnOn>on</TurnOn>")
            .replace("<BaseMode>selfFeel</BaseMode>", "<BaseMode>cool</BaseMode>");
        // Switched back on in heat mode from the remote between the two sets.
        let heating = STATUS
            .replace("<TurnOn>off</TurnOn>", "<TurnOn>on</TurnOn>")
            .replace("<BaseMode>selfFeel</BaseMode>", "<BaseMode>heat</BaseMode>");
        let device = device(
            ScriptedProtocol::default()
                .reply(&cooling)
                .reply("<ack/>")
                .reply(&heating)
                .reply("<ack/>"),
        );

        device.power_off().await.unwrap();
        device.set_fan_speed(FanSpeed::High).await.unwrap();

        let sent = device.protocol().sent();
        assert_eq!(sent.len(), 4);
        assert_eq!(
            set_body(&sent[1]),
            "<TurnOn>off</TurnOn><BaseMode>cool</BaseMode><SetTemp>77</SetTemp><WindSpeed>Low</WindSpeed>"
        );
        assert_eq!(
            set_body(&sent[3]),
            "<TurnOn>on</TurnOn><BaseMode>heat</BaseMode><SetTemp>77</SetTemp><WindSpeed>High</WindSpeed>"
        );
        assert_eq!(device.desired_state().power, Some(PowerState::On));
    }

    #[tokio::test(start_paused = true)]
    async fn set_without_any_status_fails_loudly() {
        let device = device(ScriptedProtocol::default().reply("not xml"));

        let err = device.set_power(PowerState::On).await.unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
        // Only the status query went out
        assert_eq!(device.protocol().sent().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn set_propagates_unavailable() {
        let device = device(ScriptedProtocol::default().timeout());

        let err = device.power_off().await.unwrap_err();
        assert!(matches!(err, Error::Unavailable));
        assert!(!device.is_available());
    }

    #[tokio::test(start_paused = true)]
    async fn set_swing_skips_refresh_and_overlay() {
        let device = device(ScriptedProtocol::default().reply("<ack/>"));

        device.set_swing(SwingMode::Both).await.unwrap();

        let sent = device.protocol().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            set_body(&sent[0]),
            "<WindDirection_H>on</WindDirection_H><WindDirection_V>on</WindDirection_V>"
        );
        assert_eq!(device.desired_state(), DesiredState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn set_marks_status_stale() {
        let device = device(
            ScriptedProtocol::default()
                .reply(STATUS)
                .reply("<ack/>")
                .reply(STATUS),
        );

        device.power_on().await.unwrap();
        // Within the refresh interval, but a set just happened
        assert!(device.refresh().await.unwrap().is_updated());
        assert_eq!(device.protocol().sent().len(), 3);
    }
}
