//! # nightlamp-adapter-virtual
//!
//! Simulated light for testing, demonstration, and machines without GPIO.
//! Same idempotent on/off semantics as the real relay driver, state held in
//! memory.
//!
//! ## Dependency rule
//! Depends on `nightlamp-app` (port trait) and `nightlamp-domain` only.

use std::future::Future;
use std::sync::Mutex;

use nightlamp_app::ports::LightDriver;
use nightlamp_domain::error::NightlampError;
use nightlamp_domain::light::LightState;

/// A simulated light that can be turned on and off.
#[derive(Default)]
pub struct VirtualLight {
    state: Mutex<LightState>,
}

impl VirtualLight {
    fn lock_state(&self) -> std::sync::MutexGuard<'_, LightState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LightDriver for VirtualLight {
    fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        *self.lock_state() = LightState::On;
        async { Ok(()) }
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        *self.lock_state() = LightState::Off;
        async { Ok(()) }
    }

    fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send {
        let state = *self.lock_state();
        async move { Ok(state) }
    }

    fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        *self.lock_state() = LightState::Off;
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_default_to_off() {
        let light = VirtualLight::default();
        assert_eq!(light.read_state().await.unwrap(), LightState::Off);
    }

    #[tokio::test]
    async fn should_reflect_most_recent_write() {
        let light = VirtualLight::default();
        light.turn_on().await.unwrap();
        assert_eq!(light.read_state().await.unwrap(), LightState::On);
        light.turn_off().await.unwrap();
        assert_eq!(light.read_state().await.unwrap(), LightState::Off);
    }

    #[tokio::test]
    async fn should_be_idempotent_on_repeated_turn_on() {
        let light = VirtualLight::default();
        light.turn_on().await.unwrap();
        light.turn_on().await.unwrap();
        assert_eq!(light.read_state().await.unwrap(), LightState::On);
    }

    #[tokio::test]
    async fn should_be_idempotent_on_repeated_turn_off() {
        let light = VirtualLight::default();
        light.turn_off().await.unwrap();
        light.turn_off().await.unwrap();
        assert_eq!(light.read_state().await.unwrap(), LightState::Off);
    }

    #[tokio::test]
    async fn should_drive_low_on_release() {
        let light = VirtualLight::default();
        light.turn_on().await.unwrap();
        light.release().await.unwrap();
        assert_eq!(light.read_state().await.unwrap(), LightState::Off);
    }
}
