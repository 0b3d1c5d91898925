//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use propmock_domain::error::MockError;

/// JSON error body, shaped like GitHub's own error payloads.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`MockError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(MockError);

impl From<MockError> for ApiError {
    fn from(err: MockError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MockError::InvalidPropertiesPayload(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorBody {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
