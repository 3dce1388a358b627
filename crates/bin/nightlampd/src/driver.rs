//! Runtime selection between the real GPIO driver and the virtual light.
//!
//! The two drivers are distinct types and the port trait is not
//! dyn-compatible, so the choice is expressed as an enum that delegates to
//! whichever variant configuration picked.

use std::future::Future;

use nightlamp_adapter_gpio_rppal::RppalLightDriver;
use nightlamp_adapter_virtual::VirtualLight;
use nightlamp_app::ports::device::LightDriver;
use nightlamp_domain::error::NightlampError;
use nightlamp_domain::light::LightState;

/// The concrete light output chosen at startup.
pub enum SelectedDriver {
    /// Real relay pin on the board.
    Gpio(RppalLightDriver),
    /// In-memory stand-in for development machines.
    Virtual(VirtualLight),
}

impl LightDriver for SelectedDriver {
    fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        async move {
            match self {
                Self::Gpio(driver) => driver.turn_on().await,
                Self::Virtual(driver) => driver.turn_on().await,
            }
        }
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        async move {
            match self {
                Self::Gpio(driver) => driver.turn_off().await,
                Self::Virtual(driver) => driver.turn_off().await,
            }
        }
    }

    fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send {
        async move {
            match self {
                Self::Gpio(driver) => driver.read_state().await,
                Self::Virtual(driver) => driver.read_state().await,
            }
        }
    }

    fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        async move {
            match self {
                Self::Gpio(driver) => driver.release().await,
                Self::Virtual(driver) => driver.release().await,
            }
        }
    }
}
