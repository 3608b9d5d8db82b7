//! OpenAPI documentation configuration.

use crate::controllers::{CheckResult, HealthResponse, ReadinessResponse};
use axum::Json;
use relay_core::ErrorResponse;
use relay_service::{FeedbackRequest, FeedbackResponse, GenerateRequest, GenerateResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Prompt Relay API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prompt Relay API",
        description = "Cached text generation and feedback intake",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::controllers::generation_controller::generate,
        crate::controllers::feedback_controller::submit_feedback,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            GenerateRequest,
            GenerateResponse,
            FeedbackRequest,
            FeedbackResponse,
            HealthResponse,
            ReadinessResponse,
            CheckResult,
        )
    ),
    tags(
        (name = "generation", description = "Prompt to content"),
        (name = "feedback", description = "User feedback"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_endpoints() {
        let doc = ApiDoc::openapi();
        for path in ["/generate", "/feedback", "/health", "/ready", "/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
