//! Read-only schedule and light-state view.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};
use nightlamp_domain::light::LightState;

use super::{layout, schedule_fragment};
use crate::state::AppState;

/// `GET /show_times` — authenticated only.
///
/// Auto-reloads every 30 seconds so the displayed light state tracks the
/// poller without any client-side code.
pub async fn show_times<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    if state.sessions.user_from_headers(&headers).is_none() {
        return Redirect::to("/login").into_response();
    }

    let schedule = state
        .schedule_service
        .current()
        .await
        .unwrap_or_default();
    let light = state
        .light_service
        .state()
        .await
        .unwrap_or(LightState::Off);

    let body = format!(
        "{schedule}\n\
         <p>The light is currently <strong>{light}</strong>.</p>\n\
         <p><a href=\"/logout\">Log out</a></p>",
        schedule = schedule_fragment(&schedule),
    );
    Html(layout("Current times", Some(30), &body)).into_response()
}
