// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for device update notifications.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry storing and dispatching callbacks

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Unique identifier for a subscription.
///
/// Returned when registering a callback, used to unregister it later. IDs
/// are unique within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Callback invoked with the device whose state changed.
type DeviceUpdatedCallback<D> = Arc<dyn Fn(&D) + Send + Sync>;

/// Registry of device-updated callbacks.
///
/// Callbacks are invoked synchronously, in registration order. Uses
/// `parking_lot::RwLock` so registration works through a shared reference.
pub struct CallbackRegistry<D> {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(SubscriptionId, DeviceUpdatedCallback<D>)>>,
}

impl<D> CallbackRegistry<D> {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            callbacks: RwLock::new(Vec::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback.
    pub fn register<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&D) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.callbacks.write().push((id, Arc::new(callback)));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unregister(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.write();
        let before = callbacks.len();
        callbacks.retain(|(sub_id, _)| *sub_id != id);
        callbacks.len() != before
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.callbacks.write().clear();
    }

    /// Invokes every callback with `device`.
    ///
    /// The callback list is snapshotted first, so callbacks may register or
    /// unregister without deadlocking.
    pub fn dispatch(&self, device: &D) {
        let callbacks: Vec<DeviceUpdatedCallback<D>> = self
            .callbacks
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(device);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl<D> Default for CallbackRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for CallbackRegistry<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish_non_exhaustive()
    }
}
