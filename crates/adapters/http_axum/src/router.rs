//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, LD, AU>(state: AppState<SR, LD, AU>) -> Router
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::pages::index))
        .route(
            "/login",
            get(crate::pages::login_form).post(crate::pages::login_submit),
        )
        .route("/logout", get(crate::pages::logout))
        .route(
            "/set_times",
            get(crate::pages::set_times_form).post(crate::pages::set_times_submit),
        )
        .route("/show_times", get(crate::pages::show_times))
        .route("/get_light_state", get(crate::api::get_light_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
