// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `knx_light` - A Rust library modelling KNX light actuators.
//!
//! A [`Light`] groups up to six remote values, each bound to a write and a
//! state group address: switch, brightness, RGB color, RGBW color, tunable
//! white and absolute color temperature. The addresses present in its
//! [`LightConfig`] decide which features the light supports.
//!
//! The library does not talk to a bus itself. Outgoing telegrams go through a
//! [`Transport`] (the bundled [`TelegramQueue`] forwards them into a tokio
//! channel), and inbound telegrams are handed to [`Device::process`].
//!
//! # Supported Features
//!
//! - **Switch**: on/off, always attempted
//! - **Brightness**: 0-255
//! - **Color**: RGB, or RGBW with a separate white channel
//! - **White temperature**: relative (tunable white) or absolute in Kelvin
//! - **Actions**: textual commands like `"on"` or `"brightness:128"`
//! - **Callbacks**: notification whenever a value changes
//!
//! # Quick Start
//!
//! ```no_run
//! use knx_light::{Device, Light, LightConfig, TelegramQueue};
//!
//! #[tokio::main]
//! async fn main() -> knx_light::Result<()> {
//!     let (queue, mut outgoing) = TelegramQueue::channel(64);
//!
//!     // Hand outgoing telegrams to a bus connection
//!     tokio::spawn(async move {
//!         while let Some(telegram) = outgoing.recv().await {
//!             println!("-> {telegram}");
//!         }
//!     });
//!
//!     let config = LightConfig::from_json(r#"{
//!         "group_address_switch": "1/0/1",
//!         "group_address_switch_state": "1/0/2",
//!         "group_address_brightness": "1/0/3",
//!         "group_address_brightness_state": "1/0/4"
//!     }"#)?;
//!     let mut light = Light::from_config(queue, "Living room", &config);
//!
//!     light.register_device_updated_cb(|light: &Light| {
//!         println!("{light}");
//!     });
//!
//!     light.set_on().await?;
//!     if light.supports_brightness() {
//!         light.set_brightness(128).await?;
//!     }
//!     light.do_action("off").await?;
//!
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod device;
pub mod dpt;
pub mod error;
pub mod protocol;
pub mod remote_value;
pub mod subscription;
pub mod telegram;
pub mod types;

pub use capabilities::LightCapabilities;
pub use device::{Device, Light, LightAction, LightConfig};
pub use error::{ConversionError, Error, ParseError, ProtocolError, Result};
pub use protocol::{TelegramQueue, Transport};
pub use remote_value::{RemoteValue, RemoteValueProbe};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use telegram::{Payload, Telegram, TelegramDirection, TelegramType};
pub use types::{GroupAddress, RgbColor, RgbwColor};
