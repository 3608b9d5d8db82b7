//! Generation controller.

use crate::{
    extractors::ApiJson,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use relay_service::{GenerateRequest, GenerateResponse};
use tracing::debug;

/// Creates the generation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

/// Generate content for a prompt.
///
/// Served from cache when the exact prompt was generated recently.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "generation",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated content", body = GenerateResponse),
        (status = 400, description = "Missing or malformed prompt", body = relay_core::ErrorResponse),
        (status = 500, description = "Generation failed", body = relay_core::ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> ApiResult<GenerateResponse> {
    debug!(prompt_len = request.prompt.len(), "Generate request");

    let outcome = state
        .generation_service
        .generate(&request.prompt)
        .await
        .map_err(AppError::generation)?;

    ok(GenerateResponse::new(outcome.content))
}
