//! Start the Docket server.

use clap::Args;

use docket_core::error::AppError;
use docket_database::RecordStore;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Do not apply pending migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.skip_migrations {
        config.database.run_migrations = false;
    }

    println!("Starting Docket server...");
    output::print_kv("Address", &config.server.bind_address());

    let store = super::open_store(&config).await?;
    output::print_kv("Store", store.backend());

    docket_api::run_server(config, store).await
}
