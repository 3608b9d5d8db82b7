//! Ports implemented by infrastructure crates.

use crate::RelayResult;
use async_trait::async_trait;

/// Produces generated text for a prompt.
///
/// Implemented by the upstream chat-completion client. The generation
/// service depends only on this trait.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for a single user prompt.
    async fn generate(&self, prompt: &str) -> RelayResult<String>;
}

/// A dependency that can report whether it is usable.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short name shown in readiness reports.
    fn name(&self) -> &'static str;

    /// Returns `Ok(())` when the dependency responds.
    async fn check(&self) -> RelayResult<()>;
}
