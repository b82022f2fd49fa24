// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport seam between devices and the bus.
//!
//! Devices never talk to a bus connection directly. Every outgoing telegram
//! is handed to a [`Transport`], which owns delivery, retries and
//! acknowledgements.
//!
//! # Transports
//!
//! - [`TelegramQueue`]: hands telegrams to a tokio channel consumed by a
//!   bus connection task (or by a test)

mod queue;

pub use queue::TelegramQueue;

use crate::error::ProtocolError;
use crate::telegram::Telegram;

/// Trait for transports that deliver telegrams to the bus.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a telegram to the bus.
    ///
    /// Resolves once the telegram has been accepted by the transport, not
    /// when the bus acknowledged it.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport can no longer accept
    /// telegrams.
    async fn send_telegram(&self, telegram: Telegram) -> Result<(), ProtocolError>;
}
