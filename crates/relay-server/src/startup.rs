//! Server startup utilities.

use relay_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____                            __     ____       __
   / __ \_________  ____ ___  ____  / /_   / __ \___  / /___ ___  __
  / /_/ / ___/ __ \/ __ `__ \/ __ \/ __/  / /_/ / _ \/ / __ `/ / / /
 / ____/ /  / /_/ / / / / / / /_/ / /_   / _, _/  __/ / /_/ / /_/ /
/_/   /_/   \____/_/ /_/ /_/ .___/\__/  /_/ |_|\___/_/\__,_/\__, /
                          /_/                              /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let addr = config.server.addr();
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", addr);
    info!("Cache:     {}", config.cache.backend);
    if config.generation.mock_mode {
        info!("Mode:      mock (upstream disabled)");
    } else {
        info!("Upstream:  {} ({})", config.upstream.base_url, config.upstream.model);
    }
    info!("{}", separator);
}
