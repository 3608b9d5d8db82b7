//! JSON extractor with a per-endpoint rejection message.
//!
//! Axum's own `Json` rejects with a plain-text body that echoes serde's
//! message. `ApiJson<T>` rejects with `{"error": T::INVALID_MESSAGE}` instead,
//! so callers see a fixed message whatever was wrong with the payload.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::ErrorResponse;
use relay_service::{FeedbackRequest, GenerateRequest};
use serde::de::DeserializeOwned;
use tracing::warn;

/// A request body with a fixed rejection message.
pub trait RequestBody: DeserializeOwned {
    /// Message returned when the body is missing or malformed.
    const INVALID_MESSAGE: &'static str;
}

impl RequestBody for GenerateRequest {
    const INVALID_MESSAGE: &'static str = crate::responses::INVALID_PROMPT;
}

impl RequestBody for FeedbackRequest {
    const INVALID_MESSAGE: &'static str = crate::responses::INVALID_FEEDBACK;
}

/// JSON extractor rejecting with `{"error": T::INVALID_MESSAGE}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T> std::ops::Deref for ApiJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection for [`ApiJson`].
#[derive(Debug)]
pub struct ApiJsonRejection {
    message: &'static str,
    rejection: JsonRejection,
}

impl ApiJsonRejection {
    /// Oversized bodies keep their 413; everything else is a 400.
    fn status(&self) -> StatusCode {
        match self.rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        warn!(reason = %self.rejection.body_text(), "{}", self.message);
        (self.status(), Json(ErrorResponse::new(self.message))).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: RequestBody,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiJsonRejection {
                message: T::INVALID_MESSAGE,
                rejection,
            })?;

        Ok(ApiJson(value))
    }
}
