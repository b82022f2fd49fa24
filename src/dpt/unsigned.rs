// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dpt::{Dpt, invalid_payload};
use crate::error::ConversionError;
use crate::telegram::Payload;

/// DPT 7 codec: unsigned 16-bit value, big-endian.
///
/// Used for absolute color temperature in Kelvin (DPT 7.600).
///
/// # Examples
///
/// ```
/// use knx_light::dpt::{Dpt, TwoByteUnsigned};
/// use knx_light::telegram::Payload;
///
/// assert_eq!(
///     TwoByteUnsigned.to_knx(&4000).unwrap(),
///     Payload::Array(vec![0x0F, 0xA0])
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwoByteUnsigned;

impl Dpt for TwoByteUnsigned {
    type Value = u16;

    const NAME: &'static str = "DPT 7";

    fn to_knx(&self, value: &u16) -> Result<Payload, ConversionError> {
        Ok(Payload::Array(value.to_be_bytes().to_vec()))
    }

    fn from_knx(&self, payload: &Payload, _previous: Option<&u16>) -> Result<u16, ConversionError> {
        match payload.as_array() {
            Some(&[high, low]) => Ok(u16::from_be_bytes([high, low])),
            _ => Err(invalid_payload(Self::NAME, payload)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_big_endian() {
        let kelvin = TwoByteUnsigned
            .from_knx(&Payload::Array(vec![0x0A, 0x8C]), None)
            .unwrap();
        assert_eq!(kelvin, 2700);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(
            TwoByteUnsigned
                .from_knx(&Payload::Array(vec![0x0A]), None)
                .is_err()
        );
    }
}
