// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dpt::{Dpt, invalid_payload};
use crate::error::ConversionError;
use crate::telegram::Payload;

/// DPT 1.001 switch codec.
///
/// # Examples
///
/// ```
/// use knx_light::dpt::{Dpt, Switch};
/// use knx_light::telegram::Payload;
///
/// assert_eq!(Switch.to_knx(&true).unwrap(), Payload::Binary(1));
/// assert_eq!(Switch.from_knx(&Payload::Binary(0), None).unwrap(), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Switch;

impl Dpt for Switch {
    type Value = bool;

    const NAME: &'static str = "DPT 1.001";

    fn to_knx(&self, value: &bool) -> Result<Payload, ConversionError> {
        Ok(Payload::Binary(u8::from(*value)))
    }

    fn from_knx(&self, payload: &Payload, _previous: Option<&bool>) -> Result<bool, ConversionError> {
        match payload {
            Payload::Binary(0) => Ok(false),
            Payload::Binary(1) => Ok(true),
            _ => Err(invalid_payload(Self::NAME, payload)),
        }
    }
}
