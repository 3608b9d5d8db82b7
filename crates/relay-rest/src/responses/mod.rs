//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::{ErrorResponse, RelayError};
use tracing::{error, warn};

/// Body of a 400 from `/generate`.
pub const INVALID_PROMPT: &str = "Invalid prompt";
/// Body of a 400 from `/feedback`.
pub const INVALID_FEEDBACK: &str = "Invalid feedback";
/// Body of a 500 from `/generate`.
pub const GENERATION_FAILED: &str = "Content generation failed. Please try again later.";
/// Body of a 500 from `/feedback`.
pub const FEEDBACK_FAILED: &str = "Failed to save feedback. Please try again later.";

/// Application error type for Axum.
///
/// Carries the internal cause together with the message the caller is allowed
/// to see. The cause is logged and never serialized for server errors.
#[derive(Debug)]
pub struct AppError {
    pub error: RelayError,
    pub public_message: &'static str,
}

impl AppError {
    #[must_use]
    pub fn new(error: RelayError, public_message: &'static str) -> Self {
        Self {
            error,
            public_message,
        }
    }

    /// Failure of the generation pipeline.
    #[must_use]
    pub fn generation(error: RelayError) -> Self {
        Self::new(error, GENERATION_FAILED)
    }

    /// Failure to store feedback.
    #[must_use]
    pub fn feedback(error: RelayError) -> Self {
        Self::new(error, FEEDBACK_FAILED)
    }

    fn client_message(&self) -> String {
        match &self.error {
            RelayError::Validation(message) => message.clone(),
            _ => self.public_message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                code = self.error.error_code(),
                error = %self.error,
                "Request failed"
            );
        } else {
            warn!(code = self.error.error_code(), error = %self.error, "Request rejected");
        }

        let body = Json(ErrorResponse::new(self.client_message()));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
