//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use relay_core::RelayError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Flat environment variables from earlier deployments and the keys they set.
///
/// `REDIS_ADDR` and `MOCK_MODE` need conversion and are handled separately.
pub const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("DEEPSEEK_API_KEY", "upstream.api_key"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("PORT", "server.port"),
];

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
    env: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Creates a new configuration loader reading the process environment.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `RELAY__` prefix
    /// 5. Legacy flat variables (`DEEPSEEK_API_KEY`, `DB_HOST`, `REDIS_ADDR`, ...)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RelayError> {
        Self::build(config_dir.into(), None)
    }

    /// Creates a loader that reads variables from `env` instead of the process.
    pub fn with_env(
        config_dir: impl Into<String>,
        env: HashMap<String, String>,
    ) -> Result<Self, RelayError> {
        Self::build(config_dir.into(), Some(env))
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RelayError> {
        Self::new("./config")
    }

    fn build(config_dir: String, env: Option<HashMap<String, String>>) -> Result<Self, RelayError> {
        let config = Self::load_config(&config_dir, env.as_ref())?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            env,
        })
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), RelayError> {
        let new_config = Self::load_config(&self.config_dir, self.env.as_ref())?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(
        config_dir: &str,
        env: Option<&HashMap<String, String>>,
    ) -> Result<AppConfig, RelayError> {
        let env = match env {
            Some(env) => env.clone(),
            None => {
                // Load .env file if present
                if let Err(e) = dotenvy::dotenv() {
                    debug!("No .env file found or error loading it: {}", e);
                }
                std::env::vars().collect()
            }
        };

        let environment = env
            .get("RELAY_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_default("app.environment", environment.as_str())
            .map_err(config_error_to_relay_error)?;

        for layer in ["default", environment.as_str(), "local"] {
            let path = Path::new(config_dir).join(format!("{}.toml", layer));
            if path.exists() {
                debug!("Loading config layer from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("RELAY")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        builder = apply_legacy_env(builder, &env).map_err(config_error_to_relay_error)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_relay_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, logging non-fatal findings.
    fn validate_config(config: &AppConfig) -> Result<(), RelayError> {
        for warning in ConfigValidator::warnings(config) {
            warn!("{}", warning);
        }

        ConfigValidator::validate(config).map_err(|errors| {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            RelayError::Configuration(joined)
        })
    }
}

/// Applies the flat variables of earlier deployments as overrides.
///
/// Empty values are ignored.
fn apply_legacy_env(
    mut builder: ConfigBuilder<DefaultState>,
    env: &HashMap<String, String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let lookup = |name: &str| env.get(name).map(String::as_str).filter(|v| !v.is_empty());

    for (var, key) in LEGACY_ENV_KEYS {
        if let Some(value) = lookup(*var) {
            builder = builder.set_override(*key, value)?;
        }
    }

    if let Some(addr) = lookup("REDIS_ADDR") {
        builder = builder.set_override("redis.url", redis_url_from_addr(addr))?;
    }

    if let Some(flag) = lookup("MOCK_MODE") {
        builder = builder.set_override("generation.mock_mode", flag.trim() == "true")?;
    }

    Ok(builder)
}

/// Turns a bare `host:port` into a Redis URL; full URLs pass through.
#[must_use]
pub fn redis_url_from_addr(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("redis://{}", addr)
    }
}

fn config_error_to_relay_error(err: ConfigError) -> RelayError {
    RelayError::Configuration(err.to_string())
}
