// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light capabilities.
//!
//! A light supports a feature if at least one group address was configured
//! for it. Capabilities are never stored on the light: [`LightCapabilities`]
//! is a snapshot computed from the configured remote values each time
//! [`Light::capabilities`](crate::device::Light::capabilities) is called.
//! Switching is always available and therefore not listed.

use std::fmt;

/// Snapshot of the optional features a light supports.
///
/// # Examples
///
/// ```
/// use knx_light::LightCapabilities;
///
/// let caps = LightCapabilities {
///     brightness: true,
///     color: true,
///     ..LightCapabilities::default()
/// };
/// assert!(caps.is_dimmable());
/// assert!(caps.has_color());
/// assert!(!caps.has_white_control());
/// assert_eq!(caps.to_string(), "brightness, color");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
// Each flag is an independent feature that can be configured on its own.
#[allow(clippy::struct_excessive_bools)]
pub struct LightCapabilities {
    /// Supports brightness (dimming).
    pub brightness: bool,

    /// Supports RGB color.
    pub color: bool,

    /// Supports RGBW color.
    pub rgbw: bool,

    /// Supports relative color temperature (tunable white).
    pub tunable_white: bool,

    /// Supports absolute color temperature in Kelvin.
    pub color_temperature: bool,
}

impl LightCapabilities {
    /// Capabilities of a plain on/off light.
    #[must_use]
    pub const fn switch_only() -> Self {
        Self {
            brightness: false,
            color: false,
            rgbw: false,
            tunable_white: false,
            color_temperature: false,
        }
    }

    /// Returns whether brightness can be controlled.
    #[must_use]
    pub const fn is_dimmable(&self) -> bool {
        self.brightness
    }

    /// Returns whether any color feature (RGB or RGBW) is available.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.color || self.rgbw
    }

    /// Returns whether any white temperature feature is available.
    #[must_use]
    pub const fn has_white_control(&self) -> bool {
        self.tunable_white || self.color_temperature
    }

    fn names(&self) -> Vec<&'static str> {
        [
            (self.brightness, "brightness"),
            (self.color, "color"),
            (self.rgbw, "rgbw"),
            (self.tunable_white, "tunable white"),
            (self.color_temperature, "color temperature"),
        ]
        .into_iter()
        .filter_map(|(supported, name)| supported.then_some(name))
        .collect()
    }
}

impl fmt::Display for LightCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            f.write_str("switch only")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}
