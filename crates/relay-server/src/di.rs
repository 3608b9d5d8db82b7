//! Dependency wiring.
//!
//! Builds every long-lived component once from [`AppConfig`] and hands the
//! handlers `Arc<dyn Trait>` handles through [`AppState`].

use relay_config::{AppConfig, CacheBackend, CacheConfig, RedisConfig};
use relay_core::{HealthCheck, RelayResult, TextGenerator};
use relay_repository::{create_pool, DatabasePool, FeedbackRepository, PgFeedbackRepository};
use relay_rest::AppState;
use relay_service::{
    create_redis_pool, CacheStore, FeedbackService, FeedbackServiceImpl, GenerationService,
    GenerationServiceImpl, GenerationSettings, MemoryCacheService, RedisCacheService,
};
use relay_upstream::create_text_generator;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// The selected cache backend and what it needs at runtime.
pub struct CacheComponents {
    pub store: Arc<dyn CacheStore>,
    pub health: Arc<dyn HealthCheck>,
    /// Purge task of the in-memory backend.
    pub purge_task: Option<JoinHandle<()>>,
}

/// Builds the cache backend named by `cache.backend`.
///
/// Must be called inside a Tokio runtime when the backend is `memory`.
pub fn build_cache(cache: &CacheConfig, redis: &RedisConfig) -> RelayResult<CacheComponents> {
    info!(backend = %cache.backend, "Initializing generation cache");

    match cache.backend {
        CacheBackend::Redis => {
            let service = Arc::new(RedisCacheService::new(create_redis_pool(redis)?));
            Ok(CacheComponents {
                store: service.clone(),
                health: service,
                purge_task: None,
            })
        }
        CacheBackend::Memory => {
            let service = Arc::new(MemoryCacheService::new());
            let purge_task = service.spawn_purge_task(cache.cleanup_interval());
            Ok(CacheComponents {
                store: service.clone(),
                health: service,
                purge_task: Some(purge_task),
            })
        }
    }
}

/// Application component container.
pub struct AppContainer {
    pub pool: Arc<DatabasePool>,
    pub generation_service: Arc<dyn GenerationService>,
    pub feedback_service: Arc<dyn FeedbackService>,
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
    purge_task: Option<JoinHandle<()>>,
}

impl AppContainer {
    /// Connects to the stores and assembles the services.
    pub async fn build(config: &AppConfig) -> RelayResult<Self> {
        let pool = create_pool(&config.database).await?;
        let cache = build_cache(&config.cache, &config.redis)?;
        let generator = create_text_generator(&config.upstream)?;

        Ok(Self::assemble(config, pool, cache, generator))
    }

    fn assemble(
        config: &AppConfig,
        pool: Arc<DatabasePool>,
        cache: CacheComponents,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let settings = GenerationSettings::from_config(&config.cache, &config.generation);
        let generation_service: Arc<dyn GenerationService> =
            Arc::new(GenerationServiceImpl::new(cache.store, generator, settings));

        let repository: Arc<dyn FeedbackRepository> =
            Arc::new(PgFeedbackRepository::new(pool.clone()));
        let feedback_service: Arc<dyn FeedbackService> =
            Arc::new(FeedbackServiceImpl::new(repository));

        let database_check: Arc<dyn HealthCheck> = pool.clone();
        let health_checks = vec![database_check, cache.health];

        info!(
            mock_mode = config.generation.mock_mode,
            ttl_secs = config.cache.ttl_secs,
            "Application components ready"
        );

        Self {
            pool,
            generation_service,
            feedback_service,
            health_checks,
            purge_task: cache.purge_task,
        }
    }

    /// State shared by the HTTP handlers.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.generation_service.clone(),
            self.feedback_service.clone(),
            self.health_checks.clone(),
        )
    }

    /// Stops background work and drains the database pool.
    pub async fn shutdown(self) {
        if let Some(task) = self.purge_task {
            task.abort();
        }
        self.pool.close().await;
    }
}
