// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! KNX group address type.
//!
//! Group addresses are 16-bit values. They are usually written in
//! three-level notation (`main/middle/sub`, 5/3/8 bits), but the two-level
//! (`main/sub`, 5/11 bits) and free (`0..=65535`) notations are accepted too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

const MAX_MAIN: u16 = 31;
const MAX_MIDDLE: u16 = 7;
const MAX_SUB_3LEVEL: u16 = 255;
const MAX_SUB_2LEVEL: u16 = 2047;

/// A KNX group address.
///
/// # Examples
///
/// ```
/// use knx_light::types::GroupAddress;
///
/// let ga: GroupAddress = "1/2/3".parse().unwrap();
/// assert_eq!(ga.main(), 1);
/// assert_eq!(ga.middle(), 2);
/// assert_eq!(ga.sub(), 3);
/// assert_eq!(ga.to_string(), "1/2/3");
///
/// // Two-level and free notation describe the same raw value
/// let two_level: GroupAddress = "1/515".parse().unwrap();
/// let free: GroupAddress = "2563".parse().unwrap();
/// assert_eq!(two_level, ga);
/// assert_eq!(free, ga);
///
/// assert!("32/0/0".parse::<GroupAddress>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupAddress(u16);

impl GroupAddress {
    /// Creates a group address from its three-level components.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::CouldNotParseAddress` if `main` exceeds 31 or
    /// `middle` exceeds 7.
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self, ParseError> {
        let (main, middle) = (u16::from(main), u16::from(middle));
        if main > MAX_MAIN || middle > MAX_MIDDLE {
            return Err(ParseError::CouldNotParseAddress(format!(
                "{main}/{middle}/{sub}"
            )));
        }
        Ok(Self((main << 11) | (middle << 8) | u16::from(sub)))
    }

    /// Creates a group address from its raw 16-bit value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw 16-bit value.
    #[must_use]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns the main group (0-31).
    #[must_use]
    pub const fn main(&self) -> u16 {
        self.0 >> 11
    }

    /// Returns the middle group (0-7).
    #[must_use]
    pub const fn middle(&self) -> u16 {
        (self.0 >> 8) & MAX_MIDDLE
    }

    /// Returns the sub group in three-level notation (0-255).
    #[must_use]
    pub const fn sub(&self) -> u16 {
        self.0 & MAX_SUB_3LEVEL
    }
}

fn parse_part(part: &str, max: u16, input: &str) -> Result<u16, ParseError> {
    part.trim()
        .parse::<u16>()
        .ok()
        .filter(|value| *value <= max)
        .ok_or_else(|| ParseError::CouldNotParseAddress(input.to_string()))
}

impl FromStr for GroupAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [main, middle, sub] => {
                let main = parse_part(main, MAX_MAIN, s)?;
                let middle = parse_part(middle, MAX_MIDDLE, s)?;
                let sub = parse_part(sub, MAX_SUB_3LEVEL, s)?;
                Ok(Self((main << 11) | (middle << 8) | sub))
            }
            [main, sub] => {
                let main = parse_part(main, MAX_MAIN, s)?;
                let sub = parse_part(sub, MAX_SUB_2LEVEL, s)?;
                Ok(Self((main << 11) | sub))
            }
            [free] => Ok(Self(parse_part(free, u16::MAX, s)?)),
            _ => Err(ParseError::CouldNotParseAddress(s.to_string())),
        }
    }
}

impl TryFrom<&str> for GroupAddress {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl fmt::Debug for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupAddress(\"{self}\")")
    }
}

impl Serialize for GroupAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GroupAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_level() {
        let ga: GroupAddress = "31/7/255".parse().unwrap();
        assert_eq!(ga.raw(), u16::MAX);
        assert_eq!(ga.to_string(), "31/7/255");
    }

    #[test]
    fn parse_two_level() {
        let ga: GroupAddress = "2/1000".parse().unwrap();
        assert_eq!(ga.raw(), (2 << 11) | 1000);
    }

    #[test]
    fn parse_free() {
        let ga: GroupAddress = "0".parse().unwrap();
        assert_eq!(ga.raw(), 0);
        assert_eq!(ga.to_string(), "0/0/0");
    }

    #[test]
    fn parse_rejects_out_of_range_parts() {
        assert!("32/0/0".parse::<GroupAddress>().is_err());
        assert!("1/8/0".parse::<GroupAddress>().is_err());
        assert!("1/2/256".parse::<GroupAddress>().is_err());
        assert!("1/2048".parse::<GroupAddress>().is_err());
        assert!("65536".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<GroupAddress>().is_err());
        assert!("a/b/c".parse::<GroupAddress>().is_err());
        assert!("1/2/3/4".parse::<GroupAddress>().is_err());
        assert!("-1/0/0".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn new_validates_components() {
        assert_eq!(
            GroupAddress::new(1, 2, 3).unwrap(),
            "1/2/3".parse().unwrap()
        );
        assert!(GroupAddress::new(32, 0, 0).is_err());
        assert!(GroupAddress::new(0, 8, 0).is_err());
    }

    #[test]
    fn debug_format() {
        let ga: GroupAddress = "1/2/3".parse().unwrap();
        assert_eq!(format!("{ga:?}"), "GroupAddress(\"1/2/3\")");
    }

    #[test]
    fn serde_as_string() {
        let ga: GroupAddress = "4/0/12".parse().unwrap();
        let json = serde_json::to_string(&ga).unwrap();
        assert_eq!(json, "\"4/0/12\"");

        let back: GroupAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ga);

        assert!(serde_json::from_str::<GroupAddress>("\"40/0/0\"").is_err());
    }
}
