// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status reply parsing.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::state::StatusSnapshot;
use crate::types::{FanSpeed, OperationMode, PowerState, SwingMode, Temperature};

/// Fields read into a [`StatusSnapshot`]; all of them must be present.
const REQUIRED_FIELDS: [&str; 8] = [
    "DeviceName",
    "IndoorTemp",
    "SetTemp",
    "BaseMode",
    "WindSpeed",
    "TurnOn",
    "WindDirection_H",
    "WindDirection_V",
];

/// Raw fields of a `statusUpdateMsg` reply.
///
/// Units send many more fields than this library uses (eco mode, timers,
/// outdoor temperature, ...). All of them are kept here so callers can read
/// what [`StatusSnapshot`] does not expose.
///
/// # Examples
///
/// ```
/// use tfiac_lib::response::StatusResponse;
///
/// let xml = br#"<msg msgid="statusUpdateMsg" type="Control" seq="555">
///   <statusUpdateMsg>
///     <BaseMode>cool</BaseMode><TurnOn>on</TurnOn><SetTemp>72</SetTemp>
///     <WindSpeed>Auto</WindSpeed><WindDirection_H>on</WindDirection_H>
///     <WindDirection_V>on</WindDirection_V><IndoorTemp>75.5</IndoorTemp>
///     <OutdoorTemp>90</OutdoorTemp><DeviceName>Office</DeviceName>
///   </statusUpdateMsg>
/// </msg>"#;
///
/// let response = StatusResponse::parse(xml).unwrap();
/// assert_eq!(response.get("OutdoorTemp"), Some("90"));
///
/// let snapshot = response.to_snapshot().unwrap();
/// assert_eq!(snapshot.device_name, "Office");
/// assert_eq!(snapshot.swing_mode.as_str(), "Both");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResponse {
    fields: BTreeMap<String, String>,
}

impl StatusResponse {
    /// Parses a raw reply datagram.
    ///
    /// # Errors
    ///
    /// Returns error if the payload is not UTF-8, not well-formed XML, or not
    /// shaped as `<msg><statusUpdateMsg>...</statusUpdateMsg></msg>`.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(raw)?;
        let doc = roxmltree::Document::parse(text)?;

        let root = doc.root_element();
        if !root.has_tag_name("msg") {
            return Err(ParseError::UnexpectedFormat(format!(
                "root element is <{}>, expected <msg>",
                root.tag_name().name()
            )));
        }

        let status = root
            .children()
            .find(|n| n.has_tag_name("statusUpdateMsg"))
            .ok_or_else(|| ParseError::MissingField("statusUpdateMsg".to_string()))?;

        let mut fields = BTreeMap::new();
        for node in status.children().filter(roxmltree::Node::is_element) {
            fields
                .entry(node.tag_name().name().to_string())
                .or_insert_with(|| node.text().unwrap_or("").trim().to_string());
        }

        Ok(Self { fields })
    }

    /// Returns the text of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns all fields.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Converts the reply into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if any field the snapshot needs is
    /// absent, or `ParseError::InvalidValue` if a value cannot be decoded.
    pub fn to_snapshot(&self) -> Result<StatusSnapshot, ParseError> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !self.fields.contains_key(**f)) {
            return Err(ParseError::MissingField((*missing).to_string()));
        }

        let power_state = self
            .required("TurnOn")?
            .parse::<PowerState>()
            .map_err(|e| invalid("TurnOn", e))?;

        Ok(StatusSnapshot {
            current_temperature: self.temperature("IndoorTemp")?,
            target_temperature: self.temperature("SetTemp")?,
            operation_mode: OperationMode::from(self.required("BaseMode")?),
            fan_mode: FanSpeed::from(self.required("WindSpeed")?),
            swing_mode: SwingMode::from_flags(
                self.required("WindDirection_H")? == "on",
                self.required("WindDirection_V")? == "on",
            ),
            power_state,
            device_name: self.required("DeviceName")?.to_string(),
        })
    }

    fn required(&self, name: &str) -> Result<&str, ParseError> {
        self.get(name)
            .ok_or_else(|| ParseError::MissingField(name.to_string()))
    }

    fn temperature(&self, name: &str) -> Result<Temperature, ParseError> {
        let value = self
            .required(name)?
            .parse::<f64>()
            .map_err(|e| invalid(name, e))?;
        Temperature::new(value).map_err(|e| invalid(name, e))
    }
}

fn invalid(field: &str, err: impl std::fmt::Display) -> ParseError {
    ParseError::InvalidValue {
        field: field.to_string(),
        message: err.to_string(),
    }
}
