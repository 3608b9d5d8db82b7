//! Repository traits.

use async_trait::async_trait;
use relay_core::{Feedback, NewFeedback, RelayResult};

/// Feedback repository trait.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Stores one feedback row and returns it with its assigned id.
    ///
    /// Every call inserts a new row; identical submissions are not merged.
    async fn insert(&self, feedback: &NewFeedback) -> RelayResult<Feedback>;

    /// Counts stored feedback rows.
    async fn count(&self) -> RelayResult<u64>;
}
