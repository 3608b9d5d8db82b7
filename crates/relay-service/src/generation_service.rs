//! Generation service trait definition.

use async_trait::async_trait;
use relay_core::RelayResult;
use std::fmt;

/// Where a generation result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    /// Live cache entry.
    Cache,
    /// Fresh call to the upstream API.
    Upstream,
    /// Mock-mode placeholder.
    Mock,
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::Upstream => write!(f, "upstream"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Generated text together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub content: String,
    pub source: GenerationSource,
}

impl GenerationOutcome {
    #[must_use]
    pub fn new(content: impl Into<String>, source: GenerationSource) -> Self {
        Self {
            content: content.into(),
            source,
        }
    }
}

/// Generation service trait.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Returns text for `prompt`, serving from cache when possible.
    async fn generate(&self, prompt: &str) -> RelayResult<GenerationOutcome>;
}

/// Placeholder text served in mock mode.
///
/// A pure function of the prompt.
#[must_use]
pub fn mock_content(prompt: &str) -> String {
    format!(
        "[Mock data] Sample content for: \"{}\". Lorem ipsum dolor sit amet, \
         consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore \
         et dolore magna aliqua.",
        prompt
    )
}
