// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel-backed transport.

use tokio::sync::mpsc;

use crate::error::ProtocolError;
use crate::protocol::Transport;
use crate::telegram::Telegram;

/// Transport that forwards outgoing telegrams into a tokio channel.
///
/// The receiving half is typically owned by the task driving the bus
/// connection. Cloning the queue is cheap; all clones feed the same channel.
///
/// # Examples
///
/// ```
/// use knx_light::protocol::{TelegramQueue, Transport};
/// use knx_light::telegram::{Payload, Telegram};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (queue, mut rx) = TelegramQueue::channel(8);
/// let ga = "1/0/1".parse().unwrap();
///
/// queue
///     .send_telegram(Telegram::group_write(ga, Payload::Binary(1)).outgoing())
///     .await
///     .unwrap();
///
/// let sent = rx.recv().await.unwrap();
/// assert_eq!(sent.payload, Some(Payload::Binary(1)));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TelegramQueue {
    sender: mpsc::Sender<Telegram>,
}

impl TelegramQueue {
    /// Creates a queue and the receiver consuming it.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Telegram>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Wraps an existing channel sender.
    #[must_use]
    pub fn from_sender(sender: mpsc::Sender<Telegram>) -> Self {
        Self { sender }
    }

    /// Returns `true` if the receiving half has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl Transport for TelegramQueue {
    async fn send_telegram(&self, telegram: Telegram) -> Result<(), ProtocolError> {
        tracing::debug!(telegram = %telegram, "Queueing telegram");
        self.sender
            .send(telegram)
            .await
            .map_err(|e| ProtocolError::ChannelClosed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::Payload;

    #[tokio::test]
    async fn forwards_to_receiver() {
        let (queue, mut rx) = TelegramQueue::channel(4);
        let ga = "2/0/0".parse().unwrap();

        queue
            .send_telegram(Telegram::group_write(ga, Payload::Binary(0)))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.group_address, ga);
    }

    #[tokio::test]
    async fn closed_receiver_is_an_error() {
        let (queue, rx) = TelegramQueue::channel(1);
        drop(rx);
        assert!(queue.is_closed());

        let result = queue
            .send_telegram(Telegram::group_read("2/0/0".parse().unwrap()))
            .await;
        assert!(matches!(result, Err(ProtocolError::ChannelClosed(_))));
    }
}
