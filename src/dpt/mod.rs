// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Datapoint type codecs.
//!
//! A datapoint type (DPT) defines how a value is encoded in a telegram
//! payload. Each codec here implements [`Dpt`] for one of the value kinds a
//! light uses:
//!
//! - [`Switch`] - DPT 1.001, on/off
//! - [`Scaling`] - DPT 5.001, one byte over the full 0-255 range
//! - [`ColorRgb`] - DPT 232.600, three color bytes
//! - [`ColorRgbw`] - DPT 251.600, four color bytes plus a validity mask
//! - [`TwoByteUnsigned`] - DPT 7, big-endian `u16` (e.g. Kelvin)

mod color;
mod scaling;
mod switch;
mod unsigned;

pub use color::{ColorRgb, ColorRgbw};
pub use scaling::Scaling;
pub use switch::Switch;
pub use unsigned::TwoByteUnsigned;

use std::fmt;

use crate::error::ConversionError;
use crate::telegram::Payload;

/// Trait for value encodings carried by group telegrams.
pub trait Dpt {
    /// Decoded value type.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Human readable datapoint type name, used in diagnostics.
    const NAME: &'static str;

    /// Encodes a value into a payload.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if the value cannot be represented.
    fn to_knx(&self, value: &Self::Value) -> Result<Payload, ConversionError>;

    /// Decodes a payload.
    ///
    /// `previous` is the last decoded value, for encodings that may carry
    /// partial updates.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidPayload` if the payload does not have
    /// the expected shape.
    fn from_knx(
        &self,
        payload: &Payload,
        previous: Option<&Self::Value>,
    ) -> Result<Self::Value, ConversionError>;
}

pub(crate) fn invalid_payload(dpt: &'static str, payload: &Payload) -> ConversionError {
    ConversionError::InvalidPayload {
        dpt,
        payload: payload.to_string(),
    }
}
