// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `knx_light` library.
//!
//! Errors are grouped by concern: value conversion, parsing of addresses,
//! telegrams and configuration, and transport communication. Conditions the
//! light recovers from locally (unsupported features, unknown actions) are
//! logged and never show up here.

use thiserror::Error;

use crate::types::GroupAddress;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be converted to or from its bus encoding.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// An address or telegram could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The transport failed to deliver a telegram.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors raised while converting between values and payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The payload does not have the shape expected by the datapoint type.
    #[error("payload {payload} is not valid for {dpt}")]
    InvalidPayload {
        /// Datapoint type name.
        dpt: &'static str,
        /// Rendered payload.
        payload: String,
    },
}

/// Errors related to parsing addresses, telegrams and configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Configuration JSON could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A group address string is malformed or out of range.
    #[error("could not parse address: {0}")]
    CouldNotParseAddress(String),

    /// A telegram addressed to a slot carries a payload it cannot decode.
    #[error("could not parse telegram for {device_name} ({feature_name}) at {group_address}: {description}")]
    CouldNotParseTelegram {
        /// Name of the device owning the slot.
        device_name: String,
        /// Feature the slot represents.
        feature_name: &'static str,
        /// Destination address of the telegram.
        group_address: GroupAddress,
        /// Description of the failure.
        description: String,
    },
}

/// Errors related to telegram transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The outgoing telegram channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
