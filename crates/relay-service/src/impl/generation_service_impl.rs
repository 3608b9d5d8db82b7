//! Cached generation pipeline.

use crate::cache::{cache_keys, CacheStore};
use crate::generation_service::{mock_content, GenerationOutcome, GenerationService, GenerationSource};
use async_trait::async_trait;
use relay_config::{CacheConfig, GenerationConfig};
use relay_core::{RelayResult, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunables for [`GenerationServiceImpl`].
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// TTL for upstream results.
    pub ttl: Duration,
    /// TTL for mock results.
    pub mock_ttl: Duration,
    /// Prepended to the prompt to form the cache key.
    pub key_prefix: String,
    /// Serve placeholder text instead of calling upstream.
    pub mock_mode: bool,
}

impl GenerationSettings {
    #[must_use]
    pub fn from_config(cache: &CacheConfig, generation: &GenerationConfig) -> Self {
        Self {
            ttl: cache.ttl(),
            mock_ttl: cache.mock_ttl(),
            key_prefix: cache.key_prefix.clone(),
            mock_mode: generation.mock_mode,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default(), &GenerationConfig::default())
    }
}

/// Generation service backed by a cache and a text generator.
pub struct GenerationServiceImpl {
    cache: Arc<dyn CacheStore>,
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
}

impl GenerationServiceImpl {
    /// Creates a new generation service.
    pub fn new(
        cache: Arc<dyn CacheStore>,
        generator: Arc<dyn TextGenerator>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            cache,
            generator,
            settings,
        }
    }

    /// Writes a fresh result; write failures are logged, not returned.
    async fn remember(&self, key: &str, content: &str, ttl: Duration) {
        if let Err(e) = self.cache.set(key, content, ttl).await {
            warn!(error = %e, "Failed to cache generated content");
        }
    }
}

#[async_trait]
impl GenerationService for GenerationServiceImpl {
    async fn generate(&self, prompt: &str) -> RelayResult<GenerationOutcome> {
        debug!(prompt = %prompt, "Generating content");
        let key = cache_keys::generation(&self.settings.key_prefix, prompt);

        let outcome = if let Some(content) = self.cache.get(&key).await? {
            GenerationOutcome::new(content, GenerationSource::Cache)
        } else if self.settings.mock_mode {
            let content = mock_content(prompt);
            self.remember(&key, &content, self.settings.mock_ttl).await;
            GenerationOutcome::new(content, GenerationSource::Mock)
        } else {
            let content = self.generator.generate(prompt).await?;
            self.remember(&key, &content, self.settings.ttl).await;
            GenerationOutcome::new(content, GenerationSource::Upstream)
        };

        info!(
            prompt_len = prompt.len(),
            source = %outcome.source,
            "Generation completed"
        );
        Ok(outcome)
    }
}
