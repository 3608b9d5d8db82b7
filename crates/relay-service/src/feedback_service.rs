//! Feedback service trait definition.

use crate::dto::FeedbackRequest;
use async_trait::async_trait;
use relay_core::{Feedback, RelayResult};

/// Feedback service trait.
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Stores one feedback submission as a new row.
    async fn submit(&self, request: FeedbackRequest) -> RelayResult<Feedback>;
}
