//! Light service — read-only view of the relay pin.

use nightlamp_domain::error::NightlampError;
use nightlamp_domain::light::LightState;

use crate::ports::LightDriver;

/// Read-only access to the current light state for the web surface.
///
/// The poller owns all pin writes; this service never mutates the device.
pub struct LightService<D> {
    driver: D,
}

impl<D: LightDriver> LightService<D> {
    /// Create a new service backed by the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The level written most recently.
    ///
    /// # Errors
    ///
    /// Returns a device error propagated from the driver.
    pub async fn state(&self) -> Result<LightState, NightlampError> {
        self.driver.read_state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    struct FixedDriver {
        state: Mutex<LightState>,
    }

    impl LightDriver for FixedDriver {
        fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
            *self.state.lock().unwrap() = LightState::On;
            async { Ok(()) }
        }
        fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
            *self.state.lock().unwrap() = LightState::Off;
            async { Ok(()) }
        }
        fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send {
            let state = *self.state.lock().unwrap();
            async move { Ok(state) }
        }
        fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
            async { Ok(()) }
        }
    }

    #[tokio::test]
    async fn should_report_driver_state() {
        let driver = FixedDriver {
            state: Mutex::new(LightState::On),
        };
        let service = LightService::new(driver);
        assert_eq!(service.state().await.unwrap(), LightState::On);
    }
}
