//! Caching infrastructure for the generation pipeline.
//!
//! One key-value contract with two backends: a shared Redis instance and a
//! process-local map with lazy expiry plus a periodic purge.

mod cache_store;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_store::CacheStore;
pub use memory_cache::MemoryCacheService;
pub use redis_cache::{create_redis_pool, RedisCacheService};
