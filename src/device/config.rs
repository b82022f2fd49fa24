// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::types::GroupAddress;

/// Configuration for a [`Light`](super::Light).
///
/// Each feature takes an optional write address and an optional state
/// address. A feature with neither is unsupported by the light.
///
/// # Examples
///
/// ```
/// use knx_light::device::LightConfig;
///
/// // Builder style
/// let config = LightConfig::new()
///     .with_switch(Some("1/0/1".parse().unwrap()), Some("1/0/2".parse().unwrap()))
///     .with_brightness(Some("1/0/3".parse().unwrap()), None)
///     .with_kelvin_range(2000, 6500);
/// assert_eq!(config.min_kelvin, 2000);
///
/// // From JSON, with default kelvin bounds
/// let config = LightConfig::from_json(r#"{
///     "group_address_switch": "1/0/1",
///     "group_address_brightness_state": "1/0/4"
/// }"#).unwrap();
/// assert_eq!(config.min_kelvin, 2700);
/// assert_eq!(config.max_kelvin, 6000);
/// assert!(config.group_address_color.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Switch write address.
    pub group_address_switch: Option<GroupAddress>,
    /// Switch state address.
    pub group_address_switch_state: Option<GroupAddress>,
    /// Brightness write address.
    pub group_address_brightness: Option<GroupAddress>,
    /// Brightness state address.
    pub group_address_brightness_state: Option<GroupAddress>,
    /// RGB color write address.
    pub group_address_color: Option<GroupAddress>,
    /// RGB color state address.
    pub group_address_color_state: Option<GroupAddress>,
    /// RGBW color write address.
    pub group_address_rgbw: Option<GroupAddress>,
    /// RGBW color state address.
    pub group_address_rgbw_state: Option<GroupAddress>,
    /// Tunable white write address.
    pub group_address_tunable_white: Option<GroupAddress>,
    /// Tunable white state address.
    pub group_address_tunable_white_state: Option<GroupAddress>,
    /// Absolute color temperature write address.
    pub group_address_color_temperature: Option<GroupAddress>,
    /// Absolute color temperature state address.
    pub group_address_color_temperature_state: Option<GroupAddress>,
    /// Warmest supported color temperature in Kelvin.
    pub min_kelvin: u16,
    /// Coldest supported color temperature in Kelvin.
    pub max_kelvin: u16,
}

impl LightConfig {
    /// Default warmest color temperature (370 mireds).
    pub const DEFAULT_MIN_KELVIN: u16 = 2700;

    /// Default coldest color temperature (166 mireds).
    pub const DEFAULT_MAX_KELVIN: u16 = 6000;

    /// Creates an empty configuration with default kelvin bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// Missing fields are treated as not configured; kelvin bounds fall back
    /// to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the JSON is malformed or an address is
    /// invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ParseError::from)?)
    }

    /// Sets the switch addresses.
    #[must_use]
    pub fn with_switch(mut self, address: Option<GroupAddress>, state: Option<GroupAddress>) -> Self {
        self.group_address_switch = address;
        self.group_address_switch_state = state;
        self
    }

    /// Sets the brightness addresses.
    #[must_use]
    pub fn with_brightness(
        mut self,
        address: Option<GroupAddress>,
        state: Option<GroupAddress>,
    ) -> Self {
        self.group_address_brightness = address;
        self.group_address_brightness_state = state;
        self
    }

    /// Sets the RGB color addresses.
    #[must_use]
    pub fn with_color(mut self, address: Option<GroupAddress>, state: Option<GroupAddress>) -> Self {
        self.group_address_color = address;
        self.group_address_color_state = state;
        self
    }

    /// Sets the RGBW color addresses.
    #[must_use]
    pub fn with_rgbw(mut self, address: Option<GroupAddress>, state: Option<GroupAddress>) -> Self {
        self.group_address_rgbw = address;
        self.group_address_rgbw_state = state;
        self
    }

    /// Sets the tunable white addresses.
    #[must_use]
    pub fn with_tunable_white(
        mut self,
        address: Option<GroupAddress>,
        state: Option<GroupAddress>,
    ) -> Self {
        self.group_address_tunable_white = address;
        self.group_address_tunable_white_state = state;
        self
    }

    /// Sets the absolute color temperature addresses.
    #[must_use]
    pub fn with_color_temperature(
        mut self,
        address: Option<GroupAddress>,
        state: Option<GroupAddress>,
    ) -> Self {
        self.group_address_color_temperature = address;
        self.group_address_color_temperature_state = state;
        self
    }

    /// Sets the supported color temperature range in Kelvin.
    #[must_use]
    pub fn with_kelvin_range(mut self, min_kelvin: u16, max_kelvin: u16) -> Self {
        self.min_kelvin = min_kelvin;
        self.max_kelvin = max_kelvin;
        self
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            group_address_switch: None,
            group_address_switch_state: None,
            group_address_brightness: None,
            group_address_brightness_state: None,
            group_address_color: None,
            group_address_color_state: None,
            group_address_rgbw: None,
            group_address_rgbw_state: None,
            group_address_tunable_white: None,
            group_address_tunable_white_state: None,
            group_address_color_temperature: None,
            group_address_color_temperature_state: None,
            min_kelvin: Self::DEFAULT_MIN_KELVIN,
            max_kelvin: Self::DEFAULT_MAX_KELVIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_kelvin_bounds() {
        let config = LightConfig::default();
        assert_eq!(config.min_kelvin, 2700);
        assert_eq!(config.max_kelvin, 6000);
        assert!(config.group_address_switch.is_none());
    }

    #[test]
    fn from_json_all_fields() {
        let config = LightConfig::from_json(
            r#"{
                "group_address_switch": "1/1/1",
                "group_address_switch_state": "1/1/2",
                "group_address_brightness": "1/1/3",
                "group_address_brightness_state": "1/1/4",
                "group_address_color": "1/1/5",
                "group_address_color_state": "1/1/6",
                "group_address_rgbw": "1/1/7",
                "group_address_rgbw_state": "1/1/8",
                "group_address_tunable_white": "1/1/9",
                "group_address_tunable_white_state": "1/1/10",
                "group_address_color_temperature": "1/1/11",
                "group_address_color_temperature_state": "1/1/12",
                "min_kelvin": 2200,
                "max_kelvin": 6500
            }"#,
        )
        .unwrap();

        assert_eq!(config.group_address_rgbw_state, Some("1/1/8".parse().unwrap()));
        assert_eq!(
            config.group_address_color_temperature_state,
            Some("1/1/12".parse().unwrap())
        );
        assert_eq!(config.min_kelvin, 2200);
        assert_eq!(config.max_kelvin, 6500);
    }

    #[test]
    fn from_json_null_address() {
        let config = LightConfig::from_json(r#"{"group_address_color": null}"#).unwrap();
        assert!(config.group_address_color.is_none());
    }

    #[test]
    fn from_json_invalid_address() {
        let result = LightConfig::from_json(r#"{"group_address_switch": "99/0/0"}"#);
        assert!(matches!(result, Err(Error::Parse(ParseError::Json(_)))));
    }

    #[test]
    fn builder_overrides_pairs() {
        let ga: GroupAddress = "3/0/0".parse().unwrap();
        let config = LightConfig::new()
            .with_tunable_white(None, Some(ga))
            .with_kelvin_range(1800, 5000);

        assert!(config.group_address_tunable_white.is_none());
        assert_eq!(config.group_address_tunable_white_state, Some(ga));
        assert_eq!((config.min_kelvin, config.max_kelvin), (1800, 5000));
    }
}
