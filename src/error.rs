// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the TFIAC library.
//!
//! This module provides the error hierarchy for the library: value
//! validation, UDP transport failures, XML reply decoding, and command
//! rendering.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when talking
/// to a TFIAC air conditioner.
#[derive(Debug, Error)]
pub enum Error {
    /// The device did not answer within the reply timeout.
    ///
    /// The device session marks itself unavailable when this happens.
    #[error("device is unavailable")]
    Unavailable,

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during UDP communication.
    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    /// Error occurred while parsing a device reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A set command referenced a field that was never populated.
    #[error("cannot render set command: field {0} has no value")]
    MissingField(&'static str),
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Timeout(_) => Self::Unavailable,
            other => Self::Protocol(other),
        }
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid swing mode string was provided.
    #[error("invalid swing mode: {0}")]
    InvalidSwingMode(String),

    /// A temperature was not a finite number.
    #[error("invalid temperature: {0}")]
    InvalidTemperature(f64),
}

/// Errors related to the UDP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No reply arrived before the timeout elapsed.
    #[error("no reply after {0} ms")]
    Timeout(u64),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding device replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The reply was not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The reply was not valid UTF-8.
    #[error("reply is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Expected field is missing from the reply.
    #[error("missing field in reply: {0}")]
    MissingField(String),

    /// Unexpected reply format.
    #[error("unexpected reply format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
