//! Device port — the relay output driver.

use std::future::Future;
use std::sync::Arc;

use nightlamp_domain::error::NightlampError;
use nightlamp_domain::light::LightState;

/// The relay-driven light output.
///
/// Pin configuration happens when the adapter is constructed. `turn_on` and
/// `turn_off` are **idempotent** — calling "on" while already on is a no-op
/// pin write — so the poller applies them unconditionally every cycle and a
/// missed write self-heals on the next one. `read_state` reflects the most
/// recent write.
///
/// The poller is the only caller of `turn_on`/`turn_off`/`release`; the web
/// layer only ever calls `read_state`.
pub trait LightDriver: Send + Sync {
    /// Drive the pin high.
    fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send;

    /// Drive the pin low.
    fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send;

    /// The level written most recently.
    fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send;

    /// Release the pin on shutdown (drives it low).
    fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send;
}

impl<T: LightDriver> LightDriver for Arc<T> {
    fn turn_on(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        (**self).turn_on()
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        (**self).turn_off()
    }

    fn read_state(&self) -> impl Future<Output = Result<LightState, NightlampError>> + Send {
        (**self).read_state()
    }

    fn release(&self) -> impl Future<Output = Result<(), NightlampError>> + Send {
        (**self).release()
    }
}
