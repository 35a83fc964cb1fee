//! Upload local files as a new version of a case.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docket_core::error::AppError;
use docket_core::types::CaseId;
use docket_service::{EventBus, UploadService};

use super::digest::describe_file;
use crate::output::{self, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Case number receiving the version
    #[arg(long = "case")]
    pub case_id: CaseId,

    /// Record files as `<BASE>/<file name>` pointers instead of inline content
    #[arg(long)]
    pub external_base: Option<String>,

    /// Files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Uploaded file row for table output
#[derive(Debug, Serialize, Tabled)]
struct UploadedRow {
    /// File name
    name: String,
    /// SHA-256 hash
    hash: String,
    /// Inline or external
    source: String,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(describe_file(path, args.external_base.as_deref()).await?);
    }

    let store = super::open_store(&config).await?;
    let service = UploadService::new(
        store,
        EventBus::new(config.events.channel_capacity),
        config.upload.clone(),
        Duration::from_secs(config.database.transaction_timeout_seconds),
    );

    let outcome = service.upload(args.case_id, files).await?;

    output::print_success(&format!(
        "Recorded version {} of case {} ({} files)",
        outcome.version.version_no,
        args.case_id,
        outcome.files_uploaded()
    ));
    let rows: Vec<UploadedRow> = outcome
        .files
        .iter()
        .map(|f| UploadedRow {
            name: f.file_name.clone(),
            hash: f.hash.clone(),
            source: f.source_kind.clone(),
        })
        .collect();
    output::print_list(&rows, format);

    Ok(())
}
