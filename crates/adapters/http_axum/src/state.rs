//! Shared application state for axum handlers.

use std::sync::Arc;

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};
use nightlamp_app::services::{LightService, ScheduleService};

use crate::session::SessionStore;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, driver, and authenticator types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, LD, AU> {
    /// Schedule read/write service.
    pub schedule_service: Arc<ScheduleService<SR>>,
    /// Read-only light state service.
    pub light_service: Arc<LightService<LD>>,
    /// External credential collaborator.
    pub authenticator: Arc<AU>,
    /// In-process session tokens.
    pub sessions: Arc<SessionStore>,
}

impl<SR, LD, AU> Clone for AppState<SR, LD, AU> {
    fn clone(&self) -> Self {
        Self {
            schedule_service: Arc::clone(&self.schedule_service),
            light_service: Arc::clone(&self.light_service),
            authenticator: Arc::clone(&self.authenticator),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<SR, LD, AU> AppState<SR, LD, AU>
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        schedule_service: ScheduleService<SR>,
        light_service: LightService<LD>,
        authenticator: AU,
    ) -> Self {
        Self {
            schedule_service: Arc::new(schedule_service),
            light_service: Arc::new(light_service),
            authenticator: Arc::new(authenticator),
            sessions: Arc::new(SessionStore::default()),
        }
    }
}
