//! Storage port — the durable single-record schedule store.

use std::future::Future;
use std::sync::Arc;

use nightlamp_domain::error::NightlampError;
use nightlamp_domain::schedule::Schedule;

/// Durable store holding the single latest [`Schedule`].
///
/// There is exactly one record, ever: no delete, no history. The store is
/// the only state shared between the web layer and the poller, so
/// implementations must be internally synchronized — a concurrent `load`
/// never observes a torn record, and two concurrent `save`s never corrupt
/// it (last-write-wins, no further ordering guarantee).
pub trait ScheduleRepository: Send + Sync {
    /// Read the persisted record.
    ///
    /// A **missing or malformed** record is a recoverable, silent-default
    /// condition: implementations return [`Schedule::default`] (both fields
    /// unset), not an error. Only genuine IO failures surface as errors,
    /// and even those are degraded to "unset" by the poller.
    fn load(&self) -> impl Future<Output = Result<Schedule, NightlampError>> + Send;

    /// Overwrite the persisted record.
    ///
    /// The schedule is not considered committed until this returns `Ok`.
    fn save(&self, schedule: Schedule)
    -> impl Future<Output = Result<(), NightlampError>> + Send;
}

impl<T: ScheduleRepository> ScheduleRepository for Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Schedule, NightlampError>> + Send {
        (**self).load()
    }

    fn save(
        &self,
        schedule: Schedule,
    ) -> impl Future<Output = Result<(), NightlampError>> + Send {
        (**self).save(schedule)
    }
}
