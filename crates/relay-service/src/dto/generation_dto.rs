//! Generation DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generation request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Prompt text. Used verbatim as the cache key; the empty string is allowed.
    pub prompt: String,
}

/// Generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub content: String,
}

impl GenerateResponse {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
