//! JSON endpoints for programmatic access.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of the `/get_light_state` response.
#[derive(Serialize)]
pub struct LightStateBody {
    /// Current pin level: `1` for on, `0` for off.
    pub light_state: u8,
}

/// Possible responses from the light-state endpoint.
pub enum LightStateResponse {
    Ok(Json<LightStateBody>),
    LoginRedirect(Redirect),
}

impl IntoResponse for LightStateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::LoginRedirect(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /get_light_state` — authenticated only.
pub async fn get_light_state<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
) -> Result<LightStateResponse, ApiError>
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    if state.sessions.user_from_headers(&headers).is_none() {
        return Ok(LightStateResponse::LoginRedirect(Redirect::to("/login")));
    }

    let light_state = state.light_service.state().await?;
    Ok(LightStateResponse::Ok(Json(LightStateBody {
        light_state: light_state.level(),
    })))
}
