//! # Relay Config
//!
//! Configuration management for Prompt Relay.
//! Supports layered configuration from TOML files, `RELAY__` environment
//! variables, and the flat variable names used by earlier deployments
//! (`DEEPSEEK_API_KEY`, `DB_HOST`, `REDIS_ADDR`, `MOCK_MODE`, ...).

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
