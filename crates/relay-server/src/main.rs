//! # Prompt Relay Server
//!
//! Main entry point for the Prompt Relay application.

use relay_config::{ConfigLoader, ConfigValidator};
use relay_core::telemetry::init_telemetry;
use relay_server::{app::AppBuilder, startup};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&config.observability) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    startup::print_banner();
    info!("Starting Prompt Relay Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    for warning in ConfigValidator::warnings(&config) {
        warn!("{}", warning);
    }

    if let Err(e) = AppBuilder::new().with_config(config).run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
