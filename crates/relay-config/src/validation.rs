//! Configuration validation module.
//!
//! Collects every problem in one pass so a bad deployment fails at startup
//! with the full list rather than one error at a time.

use crate::{AppConfig, CacheBackend, DatabaseConfig, RedisConfig, ServerConfig, UpstreamConfig};
use relay_core::TelemetryConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { name: String, value: u64, maximum: u64 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout, TTL, or size value must be positive.
    NonPositive { name: String },
    /// Upstream timeout outside the accepted window.
    UpstreamTimeoutOutOfRange { value: u64, minimum: u64, maximum: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// A required text field is empty.
    EmptyField { name: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { name, value, maximum } => {
                write!(f, "Pool size {} for {} exceeds maximum allowed ({})", value, name, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositive { name } => {
                write!(f, "'{}' must be positive, got 0", name)
            }
            Self::UpstreamTimeoutOutOfRange { value, minimum, maximum } => {
                write!(
                    f,
                    "Upstream timeout {}s out of range (must be between {} and {})",
                    value, minimum, maximum
                )
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::EmptyField { name } => write!(f, "'{}' cannot be empty", name),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u64 = 1000;
    /// Upstream timeout bounds, in seconds.
    const MIN_UPSTREAM_TIMEOUT: u64 = 1;
    const MAX_UPSTREAM_TIMEOUT: u64 = 600;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        if config.cache.backend == CacheBackend::Redis {
            Self::validate_redis(&config.redis, &mut errors);
        }
        Self::validate_cache(config, &mut errors);
        Self::validate_upstream(&config.upstream, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Non-fatal findings worth a startup warning.
    #[must_use]
    pub fn warnings(config: &AppConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if !config.generation.mock_mode && config.upstream.api_key.is_empty() {
            warnings.push(
                "Upstream API key is empty and mock mode is off; generation requests will be rejected upstream"
                    .to_string(),
            );
        }

        if config.generation.mock_mode && config.app.environment == "production" {
            warnings.push("Mock mode is enabled in production".to_string());
        }

        warnings
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }
        if config.max_body_size == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "server.max_body_size".to_string(),
            });
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.host.is_empty() {
            errors.push(ConfigValidationError::EmptyField {
                name: "database.host".to_string(),
            });
        }
        if config.name.is_empty() {
            errors.push(ConfigValidationError::EmptyField {
                name: "database.name".to_string(),
            });
        }
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "database.port".to_string(),
                value: config.port,
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if u64::from(config.max_connections) > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                name: "database.max_connections".to_string(),
                value: u64::from(config.max_connections),
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "database.idle_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }

        if config.pool_size as u64 > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                name: "redis.pool_size".to_string(),
                value: config.pool_size as u64,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_cache(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let cache = &config.cache;
        if cache.ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "cache.ttl_secs".to_string(),
            });
        }
        if cache.mock_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "cache.mock_ttl_secs".to_string(),
            });
        }
        if cache.cleanup_interval_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "cache.cleanup_interval_secs".to_string(),
            });
        }
    }

    fn validate_upstream(config: &UpstreamConfig, errors: &mut Vec<ConfigValidationError>) {
        match Url::parse(&config.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "upstream".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "upstream".to_string(),
                message: format!("{}: {}", config.base_url, e),
            }),
        }

        if config.model.is_empty() {
            errors.push(ConfigValidationError::EmptyField {
                name: "upstream.model".to_string(),
            });
        }

        if !(Self::MIN_UPSTREAM_TIMEOUT..=Self::MAX_UPSTREAM_TIMEOUT).contains(&config.timeout_secs) {
            errors.push(ConfigValidationError::UpstreamTimeoutOutOfRange {
                value: config.timeout_secs,
                minimum: Self::MIN_UPSTREAM_TIMEOUT,
                maximum: Self::MAX_UPSTREAM_TIMEOUT,
            });
        }
    }

    fn validate_observability(config: &TelemetryConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}
