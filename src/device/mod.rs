// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Devices composed of remote values.
//!
//! A device owns a fixed set of [`RemoteValue`](crate::remote_value::RemoteValue)s,
//! routes inbound telegrams to them and notifies registered callbacks when
//! any of their values change.
//!
//! # Concurrency
//!
//! Every operation that mutates a device takes `&mut self`, so operations on
//! one device never interleave. Share a device between tasks by wrapping it
//! in a `tokio::sync::Mutex`. Update callbacks run synchronously inside the
//! call that detected the change.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use knx_light::device::{Device, Light, LightConfig};
//! use knx_light::protocol::TelegramQueue;
//! use tokio::sync::Mutex;
//!
//! # async fn example(mut incoming: tokio::sync::mpsc::Receiver<knx_light::telegram::Telegram>)
//! #     -> knx_light::Result<()> {
//! let (queue, _outgoing) = TelegramQueue::channel(64);
//! let config = LightConfig::from_json(r#"{
//!     "group_address_switch": "1/0/1",
//!     "group_address_switch_state": "1/0/2"
//! }"#)?;
//! let light = Arc::new(Mutex::new(Light::from_config(queue, "Living room", &config)));
//!
//! // Telegram loop: one telegram fully processed before the next
//! let bus_light = Arc::clone(&light);
//! tokio::spawn(async move {
//!     while let Some(telegram) = incoming.recv().await {
//!         bus_light.lock().await.process(&telegram);
//!     }
//! });
//!
//! light.lock().await.set_on().await?;
//! # Ok(())
//! # }
//! ```

mod action;
mod config;
mod light;

pub use action::LightAction;
pub use config::LightConfig;
pub use light::Light;

use crate::error::Result;
use crate::subscription::SubscriptionId;
use crate::telegram::{Telegram, TelegramType};
use crate::types::GroupAddress;

/// Trait for bus devices.
///
/// Implementors provide group write handling, address lookup, state sync and
/// callback registration. Telegram type dispatch is provided.
#[allow(async_fn_in_trait)]
pub trait Device {
    /// Returns the device name.
    fn name(&self) -> &str;

    /// Returns `true` if any remote value of the device uses `address`.
    fn has_group_address(&self, address: GroupAddress) -> bool;

    /// Handles a group write telegram.
    ///
    /// Returns `true` if any value of the device changed.
    fn process_group_write(&mut self, telegram: &Telegram) -> bool;

    /// Handles a group response telegram. Treated like a group write.
    fn process_group_response(&mut self, telegram: &Telegram) -> bool {
        self.process_group_write(telegram)
    }

    /// Handles a group read telegram. Ignored by default.
    fn process_group_read(&mut self, _telegram: &Telegram) -> bool {
        false
    }

    /// Handles a telegram of any type.
    ///
    /// Returns `true` if any value of the device changed.
    fn process(&mut self, telegram: &Telegram) -> bool {
        match telegram.telegram_type {
            TelegramType::GroupWrite => self.process_group_write(telegram),
            TelegramType::GroupResponse => self.process_group_response(telegram),
            TelegramType::GroupRead => self.process_group_read(telegram),
        }
    }

    /// Requests the current state of every configured value from the bus.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects a read request.
    async fn sync(&self) -> Result<()>;

    /// Registers a callback invoked with the device whenever one of its
    /// values changes.
    fn register_device_updated_cb<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Self) + Send + Sync + 'static,
        Self: Sized;

    /// Unregisters a callback.
    ///
    /// Returns `true` if the callback was found and removed.
    fn unregister_device_updated_cb(&self, id: SubscriptionId) -> bool;
}
