//! Cache store trait.

use async_trait::async_trait;
use relay_core::RelayResult;
use std::time::Duration;

/// Key-value store for generated text.
///
/// Keys are looked up byte-for-byte; a write replaces any prior entry for the
/// same key.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> RelayResult<Option<String>>;

    /// Set a value in the cache with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> RelayResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> RelayResult<bool>;

    /// Check if a live key exists in the cache.
    async fn exists(&self, key: &str) -> RelayResult<bool>;
}
