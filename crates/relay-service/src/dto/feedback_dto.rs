//! Feedback DTOs.

use relay_core::NewFeedback;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Feedback submission.
///
/// Both fields are required. The score must be a JSON integer; no range is
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub score: i64,
    pub content: String,
}

impl From<FeedbackRequest> for NewFeedback {
    fn from(request: FeedbackRequest) -> Self {
        NewFeedback::new(request.score, request.content)
    }
}

/// Acknowledgement returned after feedback is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    #[schema(example = "success")]
    pub status: String,
}

impl FeedbackResponse {
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}
