// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Textual light actions.
//!
//! Actions have the form `<verb>[:<argument>]`:
//!
//! | Action                    | Operation                 |
//! |---------------------------|---------------------------|
//! | `on`                      | switch on                 |
//! | `off`                     | switch off                |
//! | `brightness:<0-255>`      | set brightness            |
//! | `tunable_white:<0-255>`   | set relative temperature  |
//! | `color_temperature:<K>`   | set absolute temperature  |
//!
//! The verb must match exactly. The argument is a decimal integer with an
//! optional `+` sign and may be surrounded by whitespace. Anything else,
//! including a prefix with a malformed or out of range argument, parses to
//! [`LightAction::Unrecognized`].

use std::fmt;

const BRIGHTNESS_PREFIX: &str = "brightness:";
const TUNABLE_WHITE_PREFIX: &str = "tunable_white:";
const COLOR_TEMPERATURE_PREFIX: &str = "color_temperature:";

/// A parsed light action.
///
/// # Examples
///
/// ```
/// use knx_light::device::LightAction;
///
/// assert_eq!(LightAction::parse("on"), LightAction::On);
/// assert_eq!(LightAction::parse("brightness:128"), LightAction::SetBrightness(128));
/// assert_eq!(
///     LightAction::parse("color_temperature:4000"),
///     LightAction::SetColorTemperature(4000)
/// );
/// assert_eq!(
///     LightAction::parse("brightness:abc"),
///     LightAction::Unrecognized("brightness:abc".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LightAction {
    /// Switch the light on.
    On,
    /// Switch the light off.
    Off,
    /// Set brightness (0-255).
    SetBrightness(u8),
    /// Set relative color temperature (0-255).
    SetTunableWhite(u8),
    /// Set absolute color temperature in Kelvin.
    SetColorTemperature(u16),
    /// The action string could not be understood.
    Unrecognized(String),
}

impl LightAction {
    /// Parses an action string. Never fails; unknown input yields
    /// [`LightAction::Unrecognized`].
    #[must_use]
    pub fn parse(action: &str) -> Self {
        let unrecognized = || Self::Unrecognized(action.to_string());
        match action {
            "on" => Self::On,
            "off" => Self::Off,
            _ => {
                if let Some(arg) = action.strip_prefix(BRIGHTNESS_PREFIX) {
                    arg.trim().parse().map_or_else(|_| unrecognized(), Self::SetBrightness)
                } else if let Some(arg) = action.strip_prefix(TUNABLE_WHITE_PREFIX) {
                    arg.trim().parse().map_or_else(|_| unrecognized(), Self::SetTunableWhite)
                } else if let Some(arg) = action.strip_prefix(COLOR_TEMPERATURE_PREFIX) {
                    arg.trim()
                        .parse()
                        .map_or_else(|_| unrecognized(), Self::SetColorTemperature)
                } else {
                    unrecognized()
                }
            }
        }
    }

    /// Returns `true` unless the action is [`LightAction::Unrecognized`].
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for LightAction {
    fn from(action: &str) -> Self {
        Self::parse(action)
    }
}

impl fmt::Display for LightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::SetBrightness(value) => write!(f, "{BRIGHTNESS_PREFIX}{value}"),
            Self::SetTunableWhite(value) => write!(f, "{TUNABLE_WHITE_PREFIX}{value}"),
            Self::SetColorTemperature(kelvin) => write!(f, "{COLOR_TEMPERATURE_PREFIX}{kelvin}"),
            Self::Unrecognized(action) => f.write_str(action),
        }
    }
}
