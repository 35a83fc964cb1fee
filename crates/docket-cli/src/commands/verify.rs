//! Verify a local file against the hashes recorded for a case.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use docket_core::error::AppError;
use docket_core::types::CaseId;
use docket_service::VerificationService;

use super::digest::sha256_hex;
use crate::output::{self, OutputFormat};

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Case number to check against
    #[arg(long = "case")]
    pub case_id: CaseId,

    /// File to hash and verify
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyReport {
    case_no: CaseId,
    hash: String,
    is_valid: bool,
}

/// Execute the verify command
pub async fn execute(
    args: &VerifyArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let bytes = tokio::fs::read(&args.file).await.map_err(|e| {
        AppError::validation(format!("Cannot read '{}': {e}", args.file.display()))
    })?;
    let hash = sha256_hex(&bytes);

    let store = super::open_store(&config).await?;
    let is_valid = VerificationService::new(store)
        .verify(args.case_id, &hash)
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&VerifyReport {
            case_no: args.case_id,
            hash,
            is_valid,
        }),
        OutputFormat::Table => {
            output::print_kv("Hash", &hash);
            if is_valid {
                output::print_success("File matches a recorded document.");
            } else {
                output::print_warning("File does not match any document of this case.");
            }
        }
    }

    Ok(())
}
