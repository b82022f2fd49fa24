// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light actuator.

use std::fmt;
use std::sync::Arc;

use crate::capabilities::LightCapabilities;
use crate::device::{Device, LightAction, LightConfig};
use crate::dpt::{ColorRgb, ColorRgbw, Scaling, Switch, TwoByteUnsigned};
use crate::error::Result;
use crate::protocol::{TelegramQueue, Transport};
use crate::remote_value::{
    RemoteValue, RemoteValueColorRgb, RemoteValueColorRgbw, RemoteValueProbe, RemoteValueScaling,
    RemoteValueSwitch, RemoteValueTwoByteUnsigned,
};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::telegram::Telegram;
use crate::types::{GroupAddress, RgbColor};

/// A light with switch, brightness, color and white temperature features.
///
/// Which features are available depends on the addresses in the
/// [`LightConfig`] it was created from. Switching is always attempted.
/// Setting an unsupported feature logs a warning and does nothing; reading
/// one returns `None`.
///
/// # Examples
///
/// ```
/// use knx_light::device::{Device, Light, LightConfig};
/// use knx_light::protocol::TelegramQueue;
/// use knx_light::telegram::{Payload, Telegram};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> knx_light::Result<()> {
/// let (queue, mut outgoing) = TelegramQueue::channel(16);
/// let config = LightConfig::new()
///     .with_switch(Some("1/0/1".parse()?), None)
///     .with_brightness(Some("1/0/3".parse()?), Some("1/0/4".parse()?));
/// let mut light = Light::from_config(queue, "Kitchen", &config);
///
/// assert!(light.supports_brightness());
/// assert!(!light.supports_color());
///
/// light.set_brightness(128).await?;
/// let sent = outgoing.recv().await.unwrap();
/// assert_eq!(sent.payload, Some(Payload::Array(vec![128])));
///
/// // State reported by the actuator
/// let report = Telegram::group_write("1/0/4".parse()?, Payload::Array(vec![64]));
/// assert!(light.process(&report));
/// assert_eq!(light.current_brightness(), Some(64));
/// # Ok(())
/// # }
/// ```
pub struct Light<T = TelegramQueue> {
    name: String,
    switch: RemoteValueSwitch<T>,
    brightness: RemoteValueScaling<T>,
    color: RemoteValueColorRgb<T>,
    rgbw: RemoteValueColorRgbw<T>,
    tunable_white: RemoteValueScaling<T>,
    color_temperature: RemoteValueTwoByteUnsigned<T>,
    min_kelvin: u16,
    max_kelvin: u16,
    callbacks: CallbackRegistry<Self>,
}

impl<T: Transport> Light<T> {
    /// Creates a light from its configuration.
    #[must_use]
    pub fn from_config(transport: T, name: impl Into<String>, config: &LightConfig) -> Self {
        Self::with_shared_transport(Arc::new(transport), name, config)
    }

    /// Creates a light sharing a transport with other devices.
    #[must_use]
    pub fn with_shared_transport(
        transport: Arc<T>,
        name: impl Into<String>,
        config: &LightConfig,
    ) -> Self {
        let name = name.into();
        Self {
            switch: RemoteValue::new(
                Arc::clone(&transport),
                Switch,
                config.group_address_switch,
                config.group_address_switch_state,
                name.clone(),
                "State",
            ),
            brightness: RemoteValue::new(
                Arc::clone(&transport),
                Scaling,
                config.group_address_brightness,
                config.group_address_brightness_state,
                name.clone(),
                "Brightness",
            ),
            color: RemoteValue::new(
                Arc::clone(&transport),
                ColorRgb,
                config.group_address_color,
                config.group_address_color_state,
                name.clone(),
                "Color",
            ),
            rgbw: RemoteValue::new(
                Arc::clone(&transport),
                ColorRgbw,
                config.group_address_rgbw,
                config.group_address_rgbw_state,
                name.clone(),
                "RGBW",
            ),
            tunable_white: RemoteValue::new(
                Arc::clone(&transport),
                Scaling,
                config.group_address_tunable_white,
                config.group_address_tunable_white_state,
                name.clone(),
                "Tunable white",
            ),
            color_temperature: RemoteValue::new(
                transport,
                TwoByteUnsigned,
                config.group_address_color_temperature,
                config.group_address_color_temperature_state,
                name.clone(),
                "Color temperature",
            ),
            name,
            min_kelvin: config.min_kelvin,
            max_kelvin: config.max_kelvin,
            callbacks: CallbackRegistry::new(),
        }
    }

    // ========== Capabilities ==========

    /// Returns whether brightness is supported.
    #[must_use]
    pub fn supports_brightness(&self) -> bool {
        self.brightness.initialized()
    }

    /// Returns whether RGB color is supported.
    #[must_use]
    pub fn supports_color(&self) -> bool {
        self.color.initialized()
    }

    /// Returns whether RGBW color is supported.
    #[must_use]
    pub fn supports_rgbw(&self) -> bool {
        self.rgbw.initialized()
    }

    /// Returns whether relative color temperature is supported.
    #[must_use]
    pub fn supports_tunable_white(&self) -> bool {
        self.tunable_white.initialized()
    }

    /// Returns whether absolute color temperature is supported.
    #[must_use]
    pub fn supports_color_temperature(&self) -> bool {
        self.color_temperature.initialized()
    }

    /// Returns a snapshot of the supported features.
    #[must_use]
    pub fn capabilities(&self) -> LightCapabilities {
        LightCapabilities {
            brightness: self.supports_brightness(),
            color: self.supports_color(),
            rgbw: self.supports_rgbw(),
            tunable_white: self.supports_tunable_white(),
            color_temperature: self.supports_color_temperature(),
        }
    }

    /// Returns the warmest supported color temperature in Kelvin.
    #[must_use]
    pub fn min_kelvin(&self) -> u16 {
        self.min_kelvin
    }

    /// Returns the coldest supported color temperature in Kelvin.
    #[must_use]
    pub fn max_kelvin(&self) -> u16 {
        self.max_kelvin
    }

    // ========== Remote values ==========

    /// Returns the switch remote value.
    #[must_use]
    pub fn switch(&self) -> &RemoteValueSwitch<T> {
        &self.switch
    }

    /// Returns the brightness remote value.
    #[must_use]
    pub fn brightness(&self) -> &RemoteValueScaling<T> {
        &self.brightness
    }

    /// Returns the RGB color remote value.
    #[must_use]
    pub fn color(&self) -> &RemoteValueColorRgb<T> {
        &self.color
    }

    /// Returns the RGBW color remote value.
    #[must_use]
    pub fn rgbw(&self) -> &RemoteValueColorRgbw<T> {
        &self.rgbw
    }

    /// Returns the tunable white remote value.
    #[must_use]
    pub fn tunable_white(&self) -> &RemoteValueScaling<T> {
        &self.tunable_white
    }

    /// Returns the absolute color temperature remote value.
    #[must_use]
    pub fn color_temperature(&self) -> &RemoteValueTwoByteUnsigned<T> {
        &self.color_temperature
    }

    // ========== Switch ==========

    /// Returns the switch state. Unknown counts as off.
    #[must_use]
    pub fn state(&self) -> bool {
        self.switch.value().copied().unwrap_or(false)
    }

    /// Switches the light on.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_on(&mut self) -> Result<()> {
        let updated = self.switch.on().await?;
        self.notify_if(updated);
        Ok(())
    }

    /// Switches the light off.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_off(&mut self) -> Result<()> {
        let updated = self.switch.off().await?;
        self.notify_if(updated);
        Ok(())
    }

    // ========== Brightness ==========

    /// Returns the current brightness (0-255).
    #[must_use]
    pub fn current_brightness(&self) -> Option<u8> {
        if !self.supports_brightness() {
            return None;
        }
        self.brightness.value().copied()
    }

    /// Sets the brightness (0-255).
    ///
    /// Logs a warning and does nothing if brightness is not supported.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        if !self.supports_brightness() {
            self.warn_unsupported("brightness");
            return Ok(());
        }
        let updated = self.brightness.set(brightness).await?;
        self.notify_if(updated);
        Ok(())
    }

    // ========== Color ==========

    /// Returns the current color and white level.
    ///
    /// RGBW takes precedence when supported: the result is then the RGB part
    /// and the white channel of the RGBW value. Otherwise the RGB value is
    /// returned with no white level.
    #[must_use]
    pub fn current_color(&self) -> (Option<RgbColor>, Option<u8>) {
        if self.supports_rgbw() {
            return self
                .rgbw
                .value()
                .map_or((None, None), |rgbw| (Some(rgbw.rgb()), Some(rgbw.white())));
        }
        if !self.supports_color() {
            return (None, None);
        }
        (self.color.value().copied(), None)
    }

    /// Sets the color.
    ///
    /// With a `white` level the RGBW value is written, which requires RGBW
    /// support. There is no fallback to plain RGB. Without a white level the
    /// RGB value is written, which requires color support. An unsupported
    /// request logs a warning and does nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_color(&mut self, color: RgbColor, white: Option<u8>) -> Result<()> {
        let updated = match white {
            Some(white) => {
                if !self.supports_rgbw() {
                    self.warn_unsupported("rgbw");
                    return Ok(());
                }
                self.rgbw.set(color.with_white(white)).await?
            }
            None => {
                if !self.supports_color() {
                    self.warn_unsupported("color");
                    return Ok(());
                }
                self.color.set(color).await?
            }
        };
        self.notify_if(updated);
        Ok(())
    }

    // ========== Tunable white ==========

    /// Returns the current relative color temperature (0-255).
    #[must_use]
    pub fn current_tunable_white(&self) -> Option<u8> {
        if !self.supports_tunable_white() {
            return None;
        }
        self.tunable_white.value().copied()
    }

    /// Sets the relative color temperature (0-255).
    ///
    /// Logs a warning and does nothing if tunable white is not supported.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_tunable_white(&mut self, tunable_white: u8) -> Result<()> {
        if !self.supports_tunable_white() {
            self.warn_unsupported("tunable white");
            return Ok(());
        }
        let updated = self.tunable_white.set(tunable_white).await?;
        self.notify_if(updated);
        Ok(())
    }

    // ========== Color temperature ==========

    /// Returns the current absolute color temperature in Kelvin.
    #[must_use]
    pub fn current_color_temperature(&self) -> Option<u16> {
        if !self.supports_color_temperature() {
            return None;
        }
        self.color_temperature.value().copied()
    }

    /// Sets the absolute color temperature in Kelvin.
    ///
    /// The value is not checked against the kelvin bounds. Logs a warning and
    /// does nothing if absolute color temperature is not supported.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn set_color_temperature(&mut self, kelvin: u16) -> Result<()> {
        if !self.supports_color_temperature() {
            self.warn_unsupported("color temperature");
            return Ok(());
        }
        let updated = self.color_temperature.set(kelvin).await?;
        self.notify_if(updated);
        Ok(())
    }

    // ========== Actions ==========

    /// Parses and executes a textual action such as `"on"` or
    /// `"brightness:128"`.
    ///
    /// Unrecognized actions are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn do_action(&mut self, action: &str) -> Result<()> {
        self.execute(LightAction::parse(action)).await
    }

    /// Executes a parsed action.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport rejects the telegram.
    pub async fn execute(&mut self, action: LightAction) -> Result<()> {
        match action {
            LightAction::On => self.set_on().await,
            LightAction::Off => self.set_off().await,
            LightAction::SetBrightness(brightness) => self.set_brightness(brightness).await,
            LightAction::SetTunableWhite(value) => self.set_tunable_white(value).await,
            LightAction::SetColorTemperature(kelvin) => self.set_color_temperature(kelvin).await,
            LightAction::Unrecognized(action) => {
                tracing::warn!(device = %self.name, action = %action, "Could not understand action");
                Ok(())
            }
        }
    }

    fn warn_unsupported(&self, feature: &'static str) {
        tracing::warn!(device = %self.name, feature = %feature, "Feature not supported by device");
    }

    fn notify_if(&self, updated: bool) {
        if updated {
            self.callbacks.dispatch(self);
        }
    }
}

impl<T: Transport> Device for Light<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_group_address(&self, address: GroupAddress) -> bool {
        let remote_values: [&dyn RemoteValueProbe; 6] = [
            &self.switch,
            &self.brightness,
            &self.color,
            &self.rgbw,
            &self.tunable_white,
            &self.color_temperature,
        ];
        remote_values
            .iter()
            .any(|remote_value| remote_value.has_group_address(address))
    }

    fn process_group_write(&mut self, telegram: &Telegram) -> bool {
        let mut updates = 0usize;
        // Every remote value sees the telegram, in declaration order.
        let remote_values: [&mut dyn RemoteValueProbe; 6] = [
            &mut self.switch,
            &mut self.brightness,
            &mut self.color,
            &mut self.rgbw,
            &mut self.tunable_white,
            &mut self.color_temperature,
        ];
        for remote_value in remote_values {
            match remote_value.process(telegram) {
                Ok(true) => updates += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(
                    device = %self.name,
                    feature = remote_value.feature_name(),
                    error = %e,
                    "Ignoring undecodable telegram"
                ),
            }
        }
        for _ in 0..updates {
            self.callbacks.dispatch(self);
        }
        updates > 0
    }

    async fn sync(&self) -> Result<()> {
        tracing::debug!(device = %self.name, "Syncing state");
        self.switch.read_state().await?;
        self.brightness.read_state().await?;
        self.color.read_state().await?;
        self.rgbw.read_state().await?;
        self.tunable_white.read_state().await?;
        self.color_temperature.read_state().await?;
        Ok(())
    }

    fn register_device_updated_cb<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Self) + Send + Sync + 'static,
    {
        self.callbacks.register(callback)
    }

    fn unregister_device_updated_cb(&self, id: SubscriptionId) -> bool {
        self.callbacks.unregister(id)
    }
}

impl<T: Transport> fmt::Display for Light<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Light name=\"{}\" switch=\"{}\"",
            self.name,
            self.switch.group_addr_str()
        )?;
        let optional: [(bool, &str, String); 5] = [
            (self.supports_brightness(), "brightness", self.brightness.group_addr_str()),
            (self.supports_color(), "color", self.color.group_addr_str()),
            (self.supports_rgbw(), "rgbw", self.rgbw.group_addr_str()),
            (
                self.supports_tunable_white(),
                "tunable white",
                self.tunable_white.group_addr_str(),
            ),
            (
                self.supports_color_temperature(),
                "color temperature",
                self.color_temperature.group_addr_str(),
            ),
        ];
        for (supported, label, addresses) in optional {
            if supported {
                write!(f, " {label}=\"{addresses}\"")?;
            }
        }
        f.write_str(" />")
    }
}

impl<T> fmt::Debug for Light<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Light")
            .field("name", &self.name)
            .field("switch", &self.switch)
            .field("brightness", &self.brightness)
            .field("color", &self.color)
            .field("rgbw", &self.rgbw)
            .field("tunable_white", &self.tunable_white)
            .field("color_temperature", &self.color_temperature)
            .field("min_kelvin", &self.min_kelvin)
            .field("max_kelvin", &self.max_kelvin)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use tokio::sync::mpsc::Receiver;
    use tracing_test::traced_test;

    use super::*;
    use crate::telegram::{Payload, TelegramType};
    use crate::types::RgbwColor;

    fn ga(s: &str) -> GroupAddress {
        s.parse().unwrap()
    }

    fn full_config() -> LightConfig {
        LightConfig::new()
            .with_switch(Some(ga("1/0/1")), Some(ga("1/0/2")))
            .with_brightness(Some(ga("1/0/3")), Some(ga("1/0/4")))
            .with_color(Some(ga("1/0/5")), Some(ga("1/0/6")))
            .with_rgbw(Some(ga("1/0/7")), Some(ga("1/0/8")))
            .with_tunable_white(Some(ga("1/0/9")), Some(ga("1/0/10")))
            .with_color_temperature(Some(ga("1/0/11")), Some(ga("1/0/12")))
    }

    fn new_light(config: &LightConfig) -> (Light, Receiver<Telegram>) {
        let (queue, rx) = TelegramQueue::channel(32);
        (Light::from_config(queue, "Kitchen", config), rx)
    }

    fn counter(light: &Light) -> Arc<AtomicU32> {
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        light.register_device_updated_cb(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn capabilities_follow_configured_addresses() {
        let (light, _rx) = new_light(&LightConfig::new());
        assert_eq!(light.capabilities(), LightCapabilities::switch_only());

        let (light, _rx) = new_light(&full_config());
        let caps = light.capabilities();
        assert!(caps.brightness && caps.color && caps.rgbw);
        assert!(caps.tunable_white && caps.color_temperature);
    }

    #[test]
    fn state_address_alone_enables_feature() {
        let config = LightConfig::new().with_tunable_white(None, Some(ga("2/0/0")));
        let (light, _rx) = new_light(&config);
        assert!(light.supports_tunable_white());
        assert!(!light.supports_color_temperature());
    }

    #[test]
    fn kelvin_bounds_are_stored() {
        let (light, _rx) = new_light(&LightConfig::new().with_kelvin_range(2000, 6500));
        assert_eq!((light.min_kelvin(), light.max_kelvin()), (2000, 6500));

        let (light, _rx) = new_light(&LightConfig::new());
        assert_eq!((light.min_kelvin(), light.max_kelvin()), (2700, 6000));
    }

    #[tokio::test]
    #[traced_test]
    async fn unsupported_write_warns_and_does_nothing() {
        let config = LightConfig::new().with_switch(Some(ga("1/0/1")), None);
        let (mut light, mut rx) = new_light(&config);
        let count = counter(&light);

        light.set_brightness(10).await.unwrap();
        light.set_color(RgbColor::new(255, 0, 0), None).await.unwrap();
        light.set_color(RgbColor::new(255, 0, 0), Some(10)).await.unwrap();
        light.set_tunable_white(10).await.unwrap();
        light.set_color_temperature(3000).await.unwrap();

        assert!(rx.try_recv().is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(light.brightness().value().is_none());
        assert!(logs_contain("Feature not supported by device"));
        assert!(logs_contain("Kitchen"));
        assert!(logs_contain("color temperature"));
    }

    #[tokio::test]
    #[traced_test]
    async fn unsupported_read_is_silent() {
        let (light, _rx) = new_light(&LightConfig::new());

        assert_eq!(light.current_brightness(), None);
        assert_eq!(light.current_color(), (None, None));
        assert_eq!(light.current_tunable_white(), None);
        assert_eq!(light.current_color_temperature(), None);
        assert!(!logs_contain("not supported"));
    }

    #[tokio::test]
    async fn switch_is_always_forwarded() {
        let config = LightConfig::new().with_switch(Some(ga("1/0/1")), Some(ga("1/0/2")));
        let (mut light, mut rx) = new_light(&config);
        let count = counter(&light);

        light.set_on().await.unwrap();
        assert!(light.state());
        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.group_address, ga("1/0/1"));
        assert_eq!(sent.payload, Some(Payload::Binary(1)));

        light.set_off().await.unwrap();
        assert!(!light.state());
        assert_eq!(rx.recv().await.unwrap().payload, Some(Payload::Binary(0)));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn set_color_with_white_writes_rgbw() {
        let (mut light, mut rx) = new_light(&full_config());

        light
            .set_color(RgbColor::new(10, 20, 30), Some(40))
            .await
            .unwrap();

        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.group_address, ga("1/0/7"));
        assert_eq!(
            sent.payload,
            Some(Payload::Array(vec![10, 20, 30, 40, 0x00, 0x0F]))
        );
        assert_eq!(light.rgbw().value(), Some(&RgbwColor::new(10, 20, 30, 40)));
        assert!(light.color().value().is_none());
        assert_eq!(
            light.current_color(),
            (Some(RgbColor::new(10, 20, 30)), Some(40))
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn set_color_with_white_does_not_fall_back_to_rgb() {
        let config = LightConfig::new().with_color(Some(ga("1/0/5")), None);
        let (mut light, mut rx) = new_light(&config);

        light
            .set_color(RgbColor::new(255, 0, 0), Some(100))
            .await
            .unwrap();

        assert!(rx.try_recv().is_err());
        assert!(light.color().value().is_none());
        assert!(logs_contain("rgbw"));
    }

    #[tokio::test]
    async fn set_color_without_white_writes_rgb() {
        let (mut light, mut rx) = new_light(&full_config());

        light.set_color(RgbColor::new(1, 2, 3), None).await.unwrap();

        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.group_address, ga("1/0/5"));
        assert_eq!(sent.payload, Some(Payload::Array(vec![1, 2, 3])));
    }

    #[tokio::test]
    async fn current_color_without_rgbw() {
        let config = LightConfig::new().with_color(Some(ga("1/0/5")), None);
        let (mut light, _rx) = new_light(&config);

        assert_eq!(light.current_color(), (None, None));
        light.set_color(RgbColor::new(9, 8, 7), None).await.unwrap();
        assert_eq!(light.current_color(), (Some(RgbColor::new(9, 8, 7)), None));
    }

    #[tokio::test]
    async fn tunable_white_and_color_temperature() {
        let (mut light, mut rx) = new_light(&full_config());

        light.set_tunable_white(77).await.unwrap();
        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.group_address, ga("1/0/9"));
        assert_eq!(light.current_tunable_white(), Some(77));

        light.set_color_temperature(4000).await.unwrap();
        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.group_address, ga("1/0/11"));
        assert_eq!(sent.payload, Some(Payload::Array(vec![0x0F, 0xA0])));
        assert_eq!(light.current_color_temperature(), Some(4000));
    }

    #[tokio::test]
    async fn repeated_set_notifies_once() {
        let (mut light, mut rx) = new_light(&full_config());
        let count = counter(&light);

        light.set_brightness(50).await.unwrap();
        light.set_brightness(50).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn do_action_dispatches_typed_setters() {
        let (mut light, mut rx) = new_light(&full_config());

        light.do_action("brightness:128").await.unwrap();
        assert_eq!(light.current_brightness(), Some(128));
        assert_eq!(rx.recv().await.unwrap().group_address, ga("1/0/3"));

        light.do_action("on").await.unwrap();
        assert!(light.state());

        light.do_action("tunable_white:5").await.unwrap();
        assert_eq!(light.current_tunable_white(), Some(5));

        light.do_action("color_temperature:3500").await.unwrap();
        assert_eq!(light.current_color_temperature(), Some(3500));

        light.do_action("off").await.unwrap();
        assert!(!light.state());
    }

    #[tokio::test]
    #[traced_test]
    async fn do_action_unrecognized_warns() {
        let (mut light, mut rx) = new_light(&full_config());
        let count = counter(&light);

        light.do_action("bogus").await.unwrap();
        light.do_action("brightness:abc").await.unwrap();

        assert!(rx.try_recv().is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(logs_contain("Could not understand action"));
        assert!(logs_contain("bogus"));
        assert!(logs_contain("brightness:abc"));
    }

    #[test]
    fn process_routes_to_matching_remote_value_only() {
        let (mut light, _rx) = new_light(&full_config());
        let count = counter(&light);

        let telegram = Telegram::group_write(ga("1/0/4"), Payload::Array(vec![128]));
        assert!(light.process(&telegram));

        assert_eq!(light.current_brightness(), Some(128));
        assert!(light.switch().value().is_none());
        assert!(light.color().value().is_none());
        assert!(light.rgbw().value().is_none());
        assert!(light.tunable_white().value().is_none());
        assert!(light.color_temperature().value().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn process_unknown_address_changes_nothing() {
        let (mut light, _rx) = new_light(&full_config());
        let count = counter(&light);

        let telegram = Telegram::group_write(ga("7/7/7"), Payload::Array(vec![1]));
        assert!(!light.process(&telegram));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!light.state());
        assert_eq!(light.current_brightness(), None);
    }

    #[test]
    fn process_same_telegram_twice_notifies_once() {
        let (mut light, _rx) = new_light(&full_config());
        let count = counter(&light);

        let telegram = Telegram::group_write(ga("1/0/2"), Payload::Binary(1));
        assert!(light.process(&telegram));
        assert!(!light.process(&telegram));

        assert!(light.state());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn process_overlapping_addresses_fires_each_remote_value() {
        let shared = ga("3/3/3");
        let config = LightConfig::new()
            .with_brightness(None, Some(shared))
            .with_tunable_white(None, Some(shared));
        let (mut light, _rx) = new_light(&config);
        let count = counter(&light);

        light.process(&Telegram::group_write(shared, Payload::Array(vec![9])));

        assert_eq!(light.current_brightness(), Some(9));
        assert_eq!(light.current_tunable_white(), Some(9));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    #[traced_test]
    fn process_undecodable_payload_is_skipped() {
        let (mut light, _rx) = new_light(&full_config());
        let count = counter(&light);

        let telegram = Telegram::group_write(ga("1/0/6"), Payload::Array(vec![1, 2]));
        assert!(!light.process(&telegram));

        assert!(light.color().value().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(logs_contain("Ignoring undecodable telegram"));
    }

    #[test]
    fn process_response_like_write_and_ignore_read() {
        let (mut light, _rx) = new_light(&full_config());

        let read = Telegram::group_read(ga("1/0/2"));
        assert!(!light.process(&read));
        assert!(light.switch().value().is_none());

        let response = Telegram::group_response(ga("1/0/2"), Payload::Binary(1));
        assert_eq!(response.telegram_type, TelegramType::GroupResponse);
        assert!(light.process(&response));
        assert!(light.state());
    }

    #[test]
    fn callback_sees_updated_state() {
        let (mut light, _rx) = new_light(&full_config());
        let seen = Arc::new(AtomicU32::new(0));
        let s = Arc::clone(&seen);
        light.register_device_updated_cb(move |light: &Light| {
            s.store(u32::from(light.current_brightness().unwrap_or(0)), Ordering::SeqCst);
        });

        light.process(&Telegram::group_write(ga("1/0/4"), Payload::Array(vec![200])));
        assert_eq!(seen.load(Ordering::SeqCst), 200);
    }

    #[test]
    fn unregistered_callback_is_not_called() {
        let (mut light, _rx) = new_light(&full_config());
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        let id = light.register_device_updated_cb(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(light.unregister_device_updated_cb(id));

        light.process(&Telegram::group_write(ga("1/0/2"), Payload::Binary(1)));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn has_group_address_checks_all_remote_values() {
        let (light, _rx) = new_light(&full_config());
        assert!(light.has_group_address(ga("1/0/1")));
        assert!(light.has_group_address(ga("1/0/12")));
        assert!(!light.has_group_address(ga("1/0/13")));
    }

    #[tokio::test]
    async fn sync_reads_configured_remote_values() {
        let config = LightConfig::new()
            .with_switch(Some(ga("1/0/1")), Some(ga("1/0/2")))
            .with_brightness(Some(ga("1/0/3")), None);
        let (light, mut rx) = new_light(&config);

        light.sync().await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.telegram_type, TelegramType::GroupRead);
        assert_eq!(first.group_address, ga("1/0/2"));
        assert_eq!(rx.recv().await.unwrap().group_address, ga("1/0/3"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn display_lists_supported_features_only() {
        let config = LightConfig::new()
            .with_switch(Some(ga("1/0/1")), None)
            .with_brightness(Some(ga("1/0/3")), Some(ga("1/0/4")));
        let (light, _rx) = new_light(&config);

        assert_eq!(
            light.to_string(),
            "<Light name=\"Kitchen\" switch=\"GroupAddress(\"1/0/1\")/None/None/None\" \
             brightness=\"GroupAddress(\"1/0/3\")/GroupAddress(\"1/0/4\")/None/None\" />"
        );
    }

    #[test]
    fn display_without_any_address() {
        let (light, _rx) = new_light(&LightConfig::new());
        assert_eq!(
            light.to_string(),
            "<Light name=\"Kitchen\" switch=\"None/None/None/None\" />"
        );
    }
}
