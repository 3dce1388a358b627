//! Schedule service — read the schedule, admin-only write.

use nightlamp_domain::error::{ForbiddenError, NightlampError};
use nightlamp_domain::schedule::Schedule;
use nightlamp_domain::user::User;

use crate::ports::ScheduleRepository;

/// Use-cases around the persisted schedule.
///
/// The single write path consumes the caller's capability: only admins get
/// through. There is deliberately no in-memory copy here — every read goes
/// to the repository, so the web layer and the poller always agree on the
/// durably-stored value.
pub struct ScheduleService<R> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The currently persisted schedule.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository. Missing or
    /// malformed records are not errors — the repository defaults them.
    pub async fn current(&self) -> Result<Schedule, NightlampError> {
        self.repo.load().await
    }

    /// Replace the schedule. Admin-only.
    ///
    /// The new value is not committed until the repository write succeeds;
    /// on failure the durable record keeps its previous content.
    ///
    /// # Errors
    ///
    /// Returns [`NightlampError::Forbidden`] when `caller` is not an admin,
    /// or a storage error when the write fails.
    #[tracing::instrument(skip(self, caller), fields(username = %caller.username))]
    pub async fn set_times(
        &self,
        caller: &User,
        schedule: Schedule,
    ) -> Result<(), NightlampError> {
        if !caller.is_admin() {
            return Err(ForbiddenError.into());
        }
        self.repo.save(schedule).await?;
        tracing::info!(
            time_on = ?schedule.time_on.map(|t| t.to_string()),
            time_off = ?schedule.time_off.map(|t| t.to_string()),
            "schedule updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightlamp_domain::user::Role;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryScheduleRepo {
        record: Mutex<Schedule>,
        fail_saves: bool,
    }

    impl InMemoryScheduleRepo {
        fn new() -> Self {
            Self {
                record: Mutex::new(Schedule::default()),
                fail_saves: false,
            }
        }

        fn failing() -> Self {
            Self {
                record: Mutex::new(Schedule::default()),
                fail_saves: true,
            }
        }
    }

    impl ScheduleRepository for InMemoryScheduleRepo {
        fn load(&self) -> impl Future<Output = Result<Schedule, NightlampError>> + Send {
            let record = *self.record.lock().unwrap();
            async move { Ok(record) }
        }

        fn save(
            &self,
            schedule: Schedule,
        ) -> impl Future<Output = Result<(), NightlampError>> + Send {
            let result = if self.fail_saves {
                Err(nightlamp_domain::error::StorageError::Io(
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                )
                .into())
            } else {
                *self.record.lock().unwrap() = schedule;
                Ok(())
            };
            async move { result }
        }
    }

    fn admin() -> User {
        User::new("admin", Role::Admin)
    }

    fn viewer() -> User {
        User::new("viewer", Role::User)
    }

    fn sample() -> Schedule {
        Schedule::new(Some("08:00".parse().unwrap()), Some("18:00".parse().unwrap()))
    }

    #[tokio::test]
    async fn should_persist_schedule_for_admin_caller() {
        let service = ScheduleService::new(InMemoryScheduleRepo::new());
        service.set_times(&admin(), sample()).await.unwrap();
        assert_eq!(service.current().await.unwrap(), sample());
    }

    #[tokio::test]
    async fn should_reject_write_from_non_admin() {
        let service = ScheduleService::new(InMemoryScheduleRepo::new());
        let err = service.set_times(&viewer(), sample()).await.unwrap_err();
        assert!(matches!(err, NightlampError::Forbidden(_)));
        // The record is untouched.
        assert_eq!(service.current().await.unwrap(), Schedule::default());
    }

    #[tokio::test]
    async fn should_surface_storage_write_failure() {
        let service = ScheduleService::new(InMemoryScheduleRepo::failing());
        let err = service.set_times(&admin(), sample()).await.unwrap_err();
        assert!(matches!(err, NightlampError::Storage(_)));
    }
}
