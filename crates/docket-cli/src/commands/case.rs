//! Case management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use docket_core::error::AppError;
use docket_core::types::CaseId;
use docket_entity::case::{CaseSummary, CreateCase};
use docket_service::{CaseService, EventBus};

use crate::output::{self, OutputFormat};

/// Arguments for case commands
#[derive(Debug, Args)]
pub struct CaseArgs {
    /// Case subcommand
    #[command(subcommand)]
    pub command: CaseCommand,
}

/// Case subcommands
#[derive(Debug, Subcommand)]
pub enum CaseCommand {
    /// Create a case
    Create {
        /// Case title
        #[arg(long)]
        title: String,
        /// Attorney of record
        #[arg(long)]
        attorney: String,
        /// Defendant name
        #[arg(long)]
        defendant: String,
    },
    /// List cases, newest first
    List {
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Show a case with its versions and files
    Show {
        /// Case number
        id: CaseId,
    },
}

/// Case display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CaseRow {
    /// Case number
    id: i64,
    /// Title
    title: String,
    /// Attorney
    attorney: String,
    /// Defendant
    defendant: String,
    /// Version count
    versions: usize,
    /// File count
    files: usize,
    /// Created at
    created_at: String,
}

impl From<&CaseSummary> for CaseRow {
    fn from(summary: &CaseSummary) -> Self {
        let case = &summary.detail.case;
        Self {
            id: case.id.get(),
            title: case.case_title.clone(),
            attorney: case.attorney.clone(),
            defendant: case.defendant.clone(),
            versions: summary.total_versions,
            files: summary.total_files,
            created_at: case.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// File display row for `case show`
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// Version number
    version: i32,
    /// File name
    name: String,
    /// File type
    file_type: String,
    /// Content hash
    hash: String,
    /// Inline or external
    source: String,
}

/// Execute case commands
pub async fn execute(
    args: &CaseArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let service = CaseService::new(store, EventBus::new(config.events.channel_capacity));

    match &args.command {
        CaseCommand::Create {
            title,
            attorney,
            defendant,
        } => {
            let case = service
                .create(CreateCase {
                    case_title: title.clone(),
                    attorney: attorney.clone(),
                    defendant: defendant.clone(),
                })
                .await?;
            match format {
                OutputFormat::Json => output::print_json(&case),
                OutputFormat::Table => {
                    output::print_success(&format!("Created case {}", case.id));
                }
            }
        }
        CaseCommand::List { page } => {
            let page = service.list(*page).await?;
            let rows: Vec<CaseRow> = page.items.iter().map(CaseRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} cases)",
                    page.page, page.total_pages, page.total_items
                );
            }
        }
        CaseCommand::Show { id } => {
            let detail = service.get(*id).await?;
            match format {
                OutputFormat::Json => output::print_json(&detail),
                OutputFormat::Table => {
                    let case = &detail.case;
                    output::print_kv("Case", &case.id.to_string());
                    output::print_kv("Title", &case.case_title);
                    output::print_kv("Attorney", &case.attorney);
                    output::print_kv("Defendant", &case.defendant);
                    output::print_kv("Versions", &detail.versions.len().to_string());

                    let rows: Vec<FileRow> = detail
                        .versions
                        .iter()
                        .flat_map(|v| {
                            v.files.iter().map(move |f| FileRow {
                                version: v.version.version_no,
                                name: f.file_name.clone(),
                                file_type: f.file_type.clone(),
                                hash: f.hash.clone(),
                                source: f.source_kind.clone(),
                            })
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
    }

    Ok(())
}
