//! # nightlamp-adapter-gpio-rppal
//!
//! Relay pin driver for Raspberry Pi GPIO, built on
//! [rppal](https://docs.rs/rppal).
//!
//! The relay module is wired active-high on a single BCM pin. Construction
//! configures the pin as an output and drives it low; `turn_on`/`turn_off`
//! are plain level writes and therefore idempotent. `release` drives the
//! pin low again before the process exits.
//!
//! ## Dependency rule
//! Depends on `nightlamp-app` (port trait) and `nightlamp-domain` only,
//! plus the `rppal` hardware crate.

use std::future::Future;
use std::sync::Mutex;

use rppal::gpio::{Gpio, OutputPin};

use nightlamp_app::ports::LightDriver;
use nightlamp_domain::error::{DeviceError, NightlampError};
use nightlamp_domain::light::LightState;

/// [`LightDriver`] over a single BCM GPIO pin.
pub struct RppalLightDriver {
    pin: Mutex<OutputPin>,
    bcm_pin: u8,
}

impl RppalLightDriver {
    /// Claim `bcm_pin`, configure it as an output and drive it low.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] when the GPIO peripheral is unavailable or
    /// the pin is already claimed.
    pub fn new(bcm_pin: u8) -> Result<Self, DeviceError> {
        let gpio = Gpio::new().map_err(|err| DeviceError::new(err.to_string()))?;
        let mut pin = gpio
            .get(bcm_pin)
            .map_err(|err| DeviceError::new(format!("pin {bcm_pin}: {err}")))?
            .into_output();
        pin.set_low();
        tracing::info!(bcm_pin, "relay pin configured");
        Ok(Self {
            pin: Mutex::new(pin),
            bcm_pin,
        })
    }

    /// The configured BCM pin number.
    #[must_use]
    pub fn bcm_pin(&self) -> u8 {
        self.bcm_pin
    }

    fn lock_pin(&self) -> std::sync::MutexGuard<'_, OutputPin> {
        self.pin
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LightDriver for RppalLightDriver {
    fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        self.lock_pin().set_high();
        async { Ok(()) }
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        self.lock_pin().set_low();
        async { Ok(()) }
    }

    fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send {
        let state = if self.lock_pin().is_set_high() {
            LightState::On
        } else {
            LightState::Off
        };
        async move { Ok(state) }
    }

    fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        let mut pin = self.lock_pin();
        pin.set_low();
        tracing::info!(bcm_pin = self.bcm_pin, "relay pin released");
        async { Ok(()) }
    }
}
