// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB and RGBW color types with 8-bit channels.

use std::fmt;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use knx_light::types::RgbColor;
///
/// let orange = RgbColor::new(255, 128, 0);
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.to_array(), [255, 128, 0]);
/// assert_eq!(orange.to_string(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the components as `[red, green, blue]`.
    #[must_use]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Extends this color with a white channel.
    #[must_use]
    pub const fn with_white(self, white: u8) -> RgbwColor {
        RgbwColor::new(self.red, self.green, self.blue, white)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// RGBW color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use knx_light::types::{RgbColor, RgbwColor};
///
/// let color = RgbColor::new(10, 20, 30).with_white(40);
/// assert_eq!(color, RgbwColor::new(10, 20, 30, 40));
/// assert_eq!(color.rgb(), RgbColor::new(10, 20, 30));
/// assert_eq!(color.white(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwColor {
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
}

impl RgbwColor {
    /// Creates a new RGBW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Returns the RGB part of the color.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        RgbColor::new(self.red, self.green, self.blue)
    }

    /// Returns the white component.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Returns the components as `[red, green, blue, white]`.
    #[must_use]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.white]
    }
}

impl From<[u8; 4]> for RgbwColor {
    fn from([red, green, blue, white]: [u8; 4]) -> Self {
        Self::new(red, green, blue, white)
    }
}

impl fmt::Display for RgbwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W{}", self.rgb(), self.white)
    }
}
