// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote values: one feature bound to bus group addresses.
//!
//! A [`RemoteValue`] couples a [`Dpt`] codec with an optional write address
//! and an optional state address. It caches the last value seen on the bus,
//! decodes matching telegrams and emits group writes through a
//! [`Transport`].
//!
//! Remote values never notify anyone themselves. [`RemoteValue::process`]
//! and [`RemoteValue::set`] report whether the cached value changed, and the
//! owning device decides whom to tell.

use std::fmt;
use std::sync::Arc;

use crate::dpt::{ColorRgb, ColorRgbw, Dpt, Scaling, Switch, TwoByteUnsigned};
use crate::error::{ParseError, Result};
use crate::protocol::Transport;
use crate::telegram::{Payload, Telegram};
use crate::types::GroupAddress;

/// On/off remote value.
pub type RemoteValueSwitch<T> = RemoteValue<Switch, T>;
/// One-byte scaled remote value.
pub type RemoteValueScaling<T> = RemoteValue<Scaling, T>;
/// RGB color remote value.
pub type RemoteValueColorRgb<T> = RemoteValue<ColorRgb, T>;
/// RGBW color remote value.
pub type RemoteValueColorRgbw<T> = RemoteValue<ColorRgbw, T>;
/// Two-byte unsigned remote value.
pub type RemoteValueTwoByteUnsigned<T> = RemoteValue<TwoByteUnsigned, T>;

/// A feature value bound to group addresses.
///
/// The value is *initialized* when at least one address was configured. An
/// uninitialized remote value never matches a telegram and never holds a
/// value.
pub struct RemoteValue<C: Dpt, T> {
    transport: Arc<T>,
    codec: C,
    group_address: Option<GroupAddress>,
    group_address_state: Option<GroupAddress>,
    device_name: String,
    feature_name: &'static str,
    payload: Option<Payload>,
    value: Option<C::Value>,
}

impl<C: Dpt, T: Transport> RemoteValue<C, T> {
    /// Creates a remote value.
    ///
    /// # Arguments
    ///
    /// * `transport` - Transport used for outgoing telegrams
    /// * `codec` - Encoding of the value
    /// * `group_address` - Address written to by [`set`](Self::set)
    /// * `group_address_state` - Address the actuator reports its state on
    /// * `device_name` - Owning device, used in diagnostics
    /// * `feature_name` - Feature this value represents, used in diagnostics
    #[must_use]
    pub fn new(
        transport: Arc<T>,
        codec: C,
        group_address: Option<GroupAddress>,
        group_address_state: Option<GroupAddress>,
        device_name: impl Into<String>,
        feature_name: &'static str,
    ) -> Self {
        Self {
            transport,
            codec,
            group_address,
            group_address_state,
            device_name: device_name.into(),
            feature_name,
            payload: None,
            value: None,
        }
    }

    /// Returns `true` if at least one group address was configured.
    #[must_use]
    pub fn initialized(&self) -> bool {
        self.group_address.is_some() || self.group_address_state.is_some()
    }

    /// Returns the write address.
    #[must_use]
    pub fn group_address(&self) -> Option<GroupAddress> {
        self.group_address
    }

    /// Returns the state address.
    #[must_use]
    pub fn group_address_state(&self) -> Option<GroupAddress> {
        self.group_address_state
    }

    /// Returns `true` if `address` is the write or the state address.
    #[must_use]
    pub fn has_group_address(&self, address: GroupAddress) -> bool {
        self.group_address == Some(address) || self.group_address_state == Some(address)
    }

    /// Returns the feature name.
    #[must_use]
    pub fn feature_name(&self) -> &'static str {
        self.feature_name
    }

    /// Returns the codec.
    #[must_use]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the last known value, or `None` if none was received or set.
    #[must_use]
    pub fn value(&self) -> Option<&C::Value> {
        self.value.as_ref()
    }

    /// Returns the payload the cached value was decoded from.
    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Processes a telegram.
    ///
    /// Telegrams for other addresses are ignored. A matching telegram is
    /// decoded and cached. Returns `true` if the cached value changed.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::CouldNotParseTelegram` if the telegram matches but
    /// its payload cannot be decoded. The cached value is left untouched.
    pub fn process(&mut self, telegram: &Telegram) -> Result<bool> {
        if !self.has_group_address(telegram.group_address) {
            return Ok(false);
        }
        let Some(payload) = telegram.payload.as_ref() else {
            return Err(self.parse_error(telegram, "missing payload".to_string()));
        };
        let value = self
            .codec
            .from_knx(payload, self.value.as_ref())
            .map_err(|e| self.parse_error(telegram, e.to_string()))?;

        self.payload = Some(payload.clone());
        if self.value.as_ref() == Some(&value) {
            return Ok(false);
        }
        tracing::debug!(
            device = %self.device_name,
            feature = self.feature_name,
            group_address = %telegram.group_address,
            value = ?value,
            "Remote value updated from bus"
        );
        self.value = Some(value);
        Ok(true)
    }

    /// Sets a new value and writes it to the bus.
    ///
    /// The value is cached once the telegram was handed to the transport.
    /// Returns `true` if the cached value changed. An uninitialized remote
    /// value ignores the call.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if the value cannot be encoded, or
    /// `ProtocolError` if the transport rejects the telegram. The cached
    /// value is left untouched in both cases.
    pub async fn set(&mut self, value: C::Value) -> Result<bool> {
        if !self.initialized() {
            tracing::info!(
                device = %self.device_name,
                feature = self.feature_name,
                value = ?value,
                "Setting value of uninitialized device"
            );
            return Ok(false);
        }
        let payload = self.codec.to_knx(&value)?;
        let decoded = self.codec.from_knx(&payload, self.value.as_ref())?;
        self.send(payload.clone()).await?;
        let updated = self.value.as_ref() != Some(&decoded);
        self.payload = Some(payload);
        self.value = Some(decoded);
        Ok(updated)
    }

    /// Requests the current state from the bus.
    ///
    /// Sends a group read to the state address, or to the write address if
    /// no state address is configured. Does not wait for the response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn read_state(&self) -> Result<()> {
        let Some(address) = self.group_address_state.or(self.group_address) else {
            return Ok(());
        };
        tracing::debug!(
            device = %self.device_name,
            feature = self.feature_name,
            group_address = %address,
            "Requesting state"
        );
        self.transport
            .send_telegram(Telegram::group_read(address).outgoing())
            .await?;
        Ok(())
    }

    /// Returns a summary of addresses, payload and value for diagnostics.
    ///
    /// Format: `<write>/<state>/<payload>/<value>`, with `None` for absent
    /// parts.
    #[must_use]
    pub fn group_addr_str(&self) -> String {
        fn or_none<V: fmt::Debug>(value: Option<V>) -> String {
            value.map_or_else(|| "None".to_string(), |v| format!("{v:?}"))
        }
        format!(
            "{}/{}/{}/{}",
            or_none(self.group_address),
            or_none(self.group_address_state),
            self.payload
                .as_ref()
                .map_or_else(|| "None".to_string(), ToString::to_string),
            or_none(self.value.as_ref())
        )
    }

    async fn send(&self, payload: Payload) -> Result<()> {
        let Some(address) = self.group_address else {
            tracing::warn!(
                device = %self.device_name,
                feature = self.feature_name,
                "No write address configured, value cached but not sent"
            );
            return Ok(());
        };
        self.transport
            .send_telegram(Telegram::group_write(address, payload).outgoing())
            .await?;
        Ok(())
    }

    fn parse_error(&self, telegram: &Telegram, description: String) -> crate::error::Error {
        ParseError::CouldNotParseTelegram {
            device_name: self.device_name.clone(),
            feature_name: self.feature_name,
            group_address: telegram.group_address,
            description,
        }
        .into()
    }
}

impl<T: Transport> RemoteValue<Switch, T> {
    /// Switches on.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn on(&mut self) -> Result<bool> {
        self.set(true).await
    }

    /// Switches off.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn off(&mut self) -> Result<bool> {
        self.set(false).await
    }
}

/// Encoding-independent view of a remote value.
///
/// Lets a device walk its remote values in a fixed order even though each
/// one has a different codec.
pub trait RemoteValueProbe {
    /// Returns `true` if at least one group address was configured.
    fn initialized(&self) -> bool;

    /// Returns `true` if `address` is the write or the state address.
    fn has_group_address(&self, address: GroupAddress) -> bool;

    /// Returns the feature name.
    fn feature_name(&self) -> &'static str;

    /// Processes a telegram, returning `true` if the cached value changed.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::CouldNotParseTelegram` if the telegram matches but
    /// cannot be decoded.
    fn process(&mut self, telegram: &Telegram) -> Result<bool>;
}

impl<C: Dpt, T: Transport> RemoteValueProbe for RemoteValue<C, T> {
    fn initialized(&self) -> bool {
        RemoteValue::initialized(self)
    }

    fn has_group_address(&self, address: GroupAddress) -> bool {
        RemoteValue::has_group_address(self, address)
    }

    fn feature_name(&self) -> &'static str {
        RemoteValue::feature_name(self)
    }

    fn process(&mut self, telegram: &Telegram) -> Result<bool> {
        RemoteValue::process(self, telegram)
    }
}

impl<C: Dpt + fmt::Debug, T> fmt::Debug for RemoteValue<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteValue")
            .field("feature_name", &self.feature_name)
            .field("codec", &self.codec)
            .field("group_address", &self.group_address)
            .field("group_address_state", &self.group_address_state)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
