// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dpt::{Dpt, invalid_payload};
use crate::error::ConversionError;
use crate::telegram::Payload;

/// DPT 5.001 scaling codec over the full byte range (0-255).
///
/// # Examples
///
/// ```
/// use knx_light::dpt::{Dpt, Scaling};
/// use knx_light::telegram::Payload;
///
/// assert_eq!(Scaling.to_knx(&128).unwrap(), Payload::Array(vec![128]));
/// assert_eq!(Scaling.from_knx(&Payload::Array(vec![255]), None).unwrap(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scaling;

impl Dpt for Scaling {
    type Value = u8;

    const NAME: &'static str = "DPT 5.001";

    fn to_knx(&self, value: &u8) -> Result<Payload, ConversionError> {
        Ok(Payload::Array(vec![*value]))
    }

    fn from_knx(&self, payload: &Payload, _previous: Option<&u8>) -> Result<u8, ConversionError> {
        match payload.as_array() {
            Some(&[raw]) => Ok(raw),
            _ => Err(invalid_payload(Self::NAME, payload)),
        }
    }
}
