//! Docket Server: court document record keeping
//!
//! Main entry point that loads configuration, initialises logging, opens the
//! record store and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use docket_core::config::AppConfig;
use docket_core::error::AppError;
use docket_database::RecordStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, source = ?e.source, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `config/{DOCKET_ENV}.toml` overlay and
/// `DOCKET__*` environment overrides.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DOCKET_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        "Starting Docket"
    );

    let store = docket_database::open_store(&config.database).await?;
    tracing::info!(store = store.backend(), "Record store ready");

    docket_api::run_server(config, store).await
}
