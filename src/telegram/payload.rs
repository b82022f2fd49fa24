// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Telegram payloads.

use std::fmt;

/// Data carried by a group telegram.
///
/// Short datapoint types (1-6 bits, e.g. switches) are packed into the APCI
/// octet and represented as [`Payload::Binary`]. Everything else travels as
/// additional octets in [`Payload::Array`].
///
/// # Examples
///
/// ```
/// use knx_light::telegram::Payload;
///
/// let on = Payload::Binary(1);
/// assert_eq!(on.to_string(), "<DPTBinary value=\"1\" />");
///
/// let level = Payload::Array(vec![0x80]);
/// assert_eq!(level.to_string(), "<DPTArray value=\"[0x80]\" />");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// Short value packed into the APCI octet (0-63).
    Binary(u8),
    /// Value transmitted as additional octets.
    Array(Vec<u8>),
}

impl Payload {
    /// Returns the bytes of an array payload, or `None` for binary payloads.
    #[must_use]
    pub fn as_array(&self) -> Option<&[u8]> {
        match self {
            Self::Array(bytes) => Some(bytes),
            Self::Binary(_) => None,
        }
    }

    /// Returns the value of a binary payload, or `None` for array payloads.
    #[must_use]
    pub const fn as_binary(&self) -> Option<u8> {
        match self {
            Self::Binary(value) => Some(*value),
            Self::Array(_) => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(value) => write!(f, "<DPTBinary value=\"{value}\" />"),
            Self::Array(bytes) => {
                let hex: Vec<String> = bytes.iter().map(|b| format!("0x{b:02x}")).collect();
                write!(f, "<DPTArray value=\"[{}]\" />", hex.join(","))
            }
        }
    }
}
