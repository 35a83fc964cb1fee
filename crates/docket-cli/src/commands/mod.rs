//! CLI command definitions and dispatch.

pub mod case;
pub mod digest;
pub mod migrate;
pub mod serve;
pub mod upload;
pub mod verify;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use docket_core::config::AppConfig;
use docket_core::error::AppError;
use docket_database::RecordStore;

use crate::output::OutputFormat;

/// Docket: court document record keeping
#[derive(Debug, Parser)]
#[command(name = "docket", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Docket server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Case management
    Case(case::CaseArgs),
    /// Hash local files and record them as a new version of a case
    Upload(upload::UploadArgs),
    /// Hash a local file and check it against a case
    Verify(verify::VerifyArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Case(args) => case::execute(args, &self.config, self.format).await,
            Commands::Upload(args) => upload::execute(args, &self.config, self.format).await,
            Commands::Verify(args) => verify::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}

/// Helper: open the configured record store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>, AppError> {
    docket_database::open_store(&config.database).await
}
