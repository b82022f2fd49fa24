// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dpt::{Dpt, invalid_payload};
use crate::error::ConversionError;
use crate::telegram::Payload;
use crate::types::{RgbColor, RgbwColor};

/// Validity mask with all four RGBW channels set.
const RGBW_ALL_VALID: u8 = 0x0F;

/// DPT 232.600 RGB codec: three bytes, red first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorRgb;

impl Dpt for ColorRgb {
    type Value = RgbColor;

    const NAME: &'static str = "DPT 232.600";

    fn to_knx(&self, value: &RgbColor) -> Result<Payload, ConversionError> {
        Ok(Payload::Array(value.to_array().to_vec()))
    }

    fn from_knx(
        &self,
        payload: &Payload,
        _previous: Option<&RgbColor>,
    ) -> Result<RgbColor, ConversionError> {
        match payload.as_array() {
            Some(&[red, green, blue]) => Ok(RgbColor::new(red, green, blue)),
            _ => Err(invalid_payload(Self::NAME, payload)),
        }
    }
}

/// DPT 251.600 RGBW codec.
///
/// Six bytes: red, green, blue, white, a reserved byte, and a mask whose
/// bits 3..0 flag red, green, blue and white as valid. Channels not flagged
/// keep their previous value (0 if none was known).
///
/// # Examples
///
/// ```
/// use knx_light::dpt::{ColorRgbw, Dpt};
/// use knx_light::telegram::Payload;
/// use knx_light::types::RgbwColor;
///
/// let codec = ColorRgbw;
/// let payload = codec.to_knx(&RgbwColor::new(1, 2, 3, 4)).unwrap();
/// assert_eq!(payload, Payload::Array(vec![1, 2, 3, 4, 0x00, 0x0F]));
///
/// // Only white is flagged valid: other channels keep the previous value
/// let previous = RgbwColor::new(9, 9, 9, 9);
/// let partial = Payload::Array(vec![0, 0, 0, 200, 0x00, 0x01]);
/// assert_eq!(
///     codec.from_knx(&partial, Some(&previous)).unwrap(),
///     RgbwColor::new(9, 9, 9, 200)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorRgbw;

impl Dpt for ColorRgbw {
    type Value = RgbwColor;

    const NAME: &'static str = "DPT 251.600";

    fn to_knx(&self, value: &RgbwColor) -> Result<Payload, ConversionError> {
        let [red, green, blue, white] = value.to_array();
        Ok(Payload::Array(vec![
            red,
            green,
            blue,
            white,
            0x00,
            RGBW_ALL_VALID,
        ]))
    }

    fn from_knx(
        &self,
        payload: &Payload,
        previous: Option<&RgbwColor>,
    ) -> Result<RgbwColor, ConversionError> {
        let Some(&[red, green, blue, white, _reserved, mask]) = payload.as_array() else {
            return Err(invalid_payload(Self::NAME, payload));
        };
        let received = [red, green, blue, white];
        let mut channels = previous.map_or([0; 4], RgbwColor::to_array);
        for (pos, channel) in channels.iter_mut().enumerate() {
            if mask & (0x08 >> pos) != 0 {
                *channel = received[pos];
            }
        }
        Ok(RgbwColor::from(channels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_decode() {
        let color = ColorRgb
            .from_knx(&Payload::Array(vec![255, 0, 128]), None)
            .unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 128));
    }

    #[test]
    fn rgb_rejects_wrong_length() {
        assert!(ColorRgb.from_knx(&Payload::Array(vec![1, 2]), None).is_err());
        assert!(ColorRgb.from_knx(&Payload::Binary(1), None).is_err());
    }

    #[test]
    fn rgbw_full_mask() {
        let payload = Payload::Array(vec![10, 20, 30, 40, 0x00, 0x0F]);
        assert_eq!(
            ColorRgbw.from_knx(&payload, None).unwrap(),
            RgbwColor::new(10, 20, 30, 40)
        );
    }

    #[test]
    fn rgbw_partial_mask_without_previous_uses_zero() {
        // Red and blue valid
        let payload = Payload::Array(vec![10, 20, 30, 40, 0x00, 0x0A]);
        assert_eq!(
            ColorRgbw.from_knx(&payload, None).unwrap(),
            RgbwColor::new(10, 0, 30, 0)
        );
    }

    #[test]
    fn rgbw_rejects_wrong_length() {
        assert!(
            ColorRgbw
                .from_knx(&Payload::Array(vec![1, 2, 3, 4]), None)
                .is_err()
        );
    }
}
