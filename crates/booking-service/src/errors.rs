//! Room booking service error types.
//!
//! All errors map to appropriate HTTP status codes via the `IntoResponse`
//! impl. The payload of each variant is the client-facing message, returned
//! verbatim in a flat `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Room booking service error type.
///
/// Maps to appropriate HTTP status codes:
/// - Validation: 400 Bad Request
/// - NotFound: 404 Not Found
/// - Conflict: 409 Conflict
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl BookingError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            BookingError::Validation(message)
            | BookingError::NotFound(message)
            | BookingError::Conflict(message) => message,
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
