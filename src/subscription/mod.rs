// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for device update notifications.
//!
//! Devices keep a [`CallbackRegistry`] and dispatch it whenever one of their
//! remote values changes, either from an inbound telegram or from a local
//! write.
//!
//! ```
//! use knx_light::device::{Device, Light, LightConfig};
//! use knx_light::protocol::TelegramQueue;
//!
//! let (queue, _rx) = TelegramQueue::channel(16);
//! let config = LightConfig::new().with_switch(Some("1/0/1".parse().unwrap()), None);
//! let light = Light::from_config(queue, "Hallway", &config);
//!
//! let sub_id = light.register_device_updated_cb(|light: &Light| {
//!     println!("{} is now {}", light.name(), light.state());
//! });
//!
//! assert!(light.unregister_device_updated_cb(sub_id));
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
