//! Poller — the repeating background task that drives the light.
//!
//! Once per fixed period the poller reloads the schedule from the store,
//! asks the window evaluator what the output should do, and applies the
//! answer to the driver. It is the only component that sleeps, and the only
//! component that ever writes the pin.

use std::time::Duration;

use tokio::sync::watch;

use nightlamp_domain::schedule::{Actuation, Schedule};
use nightlamp_domain::time::TimeOfDay;

use crate::ports::{LightDriver, ScheduleRepository};

/// Fixed period between evaluations. Not user-facing.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Background task evaluating and applying the schedule.
///
/// The poller communicates with the web layer only through the schedule
/// store: it always observes the most recently **durably saved** schedule,
/// so a write landing between two loads takes effect on the following
/// cycle, not instantaneously.
pub struct Poller<R, D> {
    repo: R,
    driver: D,
    buffer: Duration,
}

impl<R, D> Poller<R, D>
where
    R: ScheduleRepository,
    D: LightDriver,
{
    /// Create a poller over the given store and driver.
    ///
    /// `buffer` widens the on-window at both edges before comparison.
    pub fn new(repo: R, driver: D, buffer: Duration) -> Self {
        Self {
            repo,
            driver,
            buffer,
        }
    }

    /// Run until `shutdown` fires, then release the driver.
    ///
    /// The first evaluation happens immediately; subsequent ones every
    /// [`POLL_INTERVAL`]. No error from inside the loop ever terminates it.
    pub async fn run(self, mut shutdown: watch::Receiver<()>) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick_at(TimeOfDay::now_local()).await;
                }
                _ = shutdown.changed() => {
                    tracing::info!("poller shutting down");
                    break;
                }
            }
        }

        if let Err(err) = self.driver.release().await {
            tracing::error!(error = %err, "failed to release light driver");
        }
    }

    /// One poll cycle at the given wall-clock time.
    ///
    /// Schedule-read failures degrade to the unset schedule (no automatic
    /// control this cycle); driver failures are logged and abandon this
    /// iteration only — the idempotent on/off writes self-heal next cycle.
    pub async fn tick_at(&self, now: TimeOfDay) {
        let schedule = match self.repo.load().await {
            Ok(schedule) => schedule,
            Err(err) => {
                tracing::warn!(error = %err, "schedule load failed, skipping this cycle");
                Schedule::default()
            }
        };

        let result = match schedule.evaluate(now, self.buffer) {
            Actuation::TurnOn => {
                tracing::debug!(%now, "turning the light on");
                self.driver.turn_on().await
            }
            Actuation::TurnOff => {
                tracing::debug!(%now, "turning the light off");
                self.driver.turn_off().await
            }
            Actuation::NoOp => Ok(()),
        };

        if let Err(err) = result {
            tracing::error!(error = %err, "light actuation failed, retrying next cycle");
        }
    }
}
