// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group telegrams exchanged with the bus.
//!
//! A [`Telegram`] is the unit of communication: a destination
//! [`GroupAddress`], a [`Payload`], the kind of group service and the
//! direction it travelled in.

mod payload;

pub use payload::Payload;

use std::fmt;

use crate::types::GroupAddress;

/// Group service carried by a telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TelegramType {
    /// A new value is written to the group.
    #[default]
    GroupWrite,
    /// A member of the group is asked to report its value.
    GroupRead,
    /// Answer to a previous read request.
    GroupResponse,
}

/// Direction of a telegram relative to this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TelegramDirection {
    /// Received from the bus.
    #[default]
    Incoming,
    /// Sent to the bus.
    Outgoing,
}

/// A group telegram.
///
/// # Examples
///
/// ```
/// use knx_light::telegram::{Payload, Telegram, TelegramType};
///
/// let ga = "1/2/3".parse().unwrap();
/// let telegram = Telegram::group_write(ga, Payload::Array(vec![0x80]));
/// assert_eq!(telegram.telegram_type, TelegramType::GroupWrite);
/// assert_eq!(telegram.group_address.to_string(), "1/2/3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    /// Destination group address.
    pub group_address: GroupAddress,
    /// Data carried by the telegram.
    pub payload: Option<Payload>,
    /// Group service.
    pub telegram_type: TelegramType,
    /// Direction relative to this process.
    pub direction: TelegramDirection,
}

impl Telegram {
    /// Creates an incoming group write telegram.
    #[must_use]
    pub fn group_write(group_address: GroupAddress, payload: Payload) -> Self {
        Self {
            group_address,
            payload: Some(payload),
            telegram_type: TelegramType::GroupWrite,
            direction: TelegramDirection::Incoming,
        }
    }

    /// Creates an incoming group response telegram.
    #[must_use]
    pub fn group_response(group_address: GroupAddress, payload: Payload) -> Self {
        Self {
            telegram_type: TelegramType::GroupResponse,
            ..Self::group_write(group_address, payload)
        }
    }

    /// Creates an incoming group read request.
    #[must_use]
    pub fn group_read(group_address: GroupAddress) -> Self {
        Self {
            group_address,
            payload: None,
            telegram_type: TelegramType::GroupRead,
            direction: TelegramDirection::Incoming,
        }
    }

    /// Marks the telegram as outgoing.
    #[must_use]
    pub fn outgoing(mut self) -> Self {
        self.direction = TelegramDirection::Outgoing;
        self
    }
}

impl fmt::Display for Telegram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Telegram group_address=\"{}\" type=\"{:?}\" direction=\"{:?}\" payload=\"",
            self.group_address, self.telegram_type, self.direction
        )?;
        match &self.payload {
            Some(payload) => write!(f, "{payload}")?,
            None => f.write_str("None")?,
        }
        f.write_str("\" />")
    }
}
