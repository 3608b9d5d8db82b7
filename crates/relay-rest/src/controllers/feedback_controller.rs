//! Feedback controller.

use crate::{
    extractors::ApiJson,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use relay_service::{FeedbackRequest, FeedbackResponse};
use tracing::debug;

/// Creates the feedback router.
pub fn router() -> Router<AppState> {
    Router::new().route("/feedback", post(submit_feedback))
}

/// Record user feedback.
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback stored", body = FeedbackResponse),
        (status = 400, description = "Missing or malformed fields", body = relay_core::ErrorResponse),
        (status = 500, description = "Feedback could not be stored", body = relay_core::ErrorResponse)
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeedbackRequest>,
) -> ApiResult<FeedbackResponse> {
    debug!(score = request.score, "Feedback request");

    state
        .feedback_service
        .submit(request)
        .await
        .map_err(AppError::feedback)?;

    ok(FeedbackResponse::success())
}
