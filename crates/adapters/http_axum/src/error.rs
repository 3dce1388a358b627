//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nightlamp_domain::error::NightlampError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`NightlampError`] to an HTTP response with appropriate status code.
pub struct ApiError(NightlampError);

impl From<NightlampError> for ApiError {
    fn from(err: NightlampError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            NightlampError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            NightlampError::Forbidden(err) => (StatusCode::FORBIDDEN, err.to_string()),
            NightlampError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            NightlampError::Device(err) => {
                tracing::error!(error = %err, "device error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
