use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use aeropole_core::{ProviderError, ValidationError};

/// API failure modes. Exactly one `{ "error": ... }` object ever leaves a
/// handler; success payloads and errors are never mixed.
#[derive(Debug)]
pub enum ApiError {
    /// Client-caused: the request never reached the provider.
    Validation(ValidationError),
    /// Upstream-caused: auth or fare query failed after validation.
    Upstream(ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            ApiError::Upstream(error) => {
                tracing::warn!(status = ?error.status(), "provider request failed: {error}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("{error} (Hint: verify AMADEUS_CLIENT_ID and AMADEUS_CLIENT_SECRET)"),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        Self::Upstream(error)
    }
}
