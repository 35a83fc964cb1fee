//! Records a new version of documents for a case.
//!
//! The next version number is derived from the highest existing one and the
//! version plus its files are written in a single transaction. Concurrent
//! uploads to the same case race for the number; the loser sees a conflict
//! and retries with a fresh read, up to `upload.max_attempts` times.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docket_core::config::UploadConfig;
use docket_core::error::{AppError, ErrorKind, FieldError};
use docket_core::events::CaseEvent;
use docket_core::result::AppResult;
use docket_core::types::CaseId;
use docket_database::RecordStore;
use docket_entity::file::{File, NewFile};
use docket_entity::version::{Version, VersionWithFiles, next_version_no};

use crate::events::EventBus;

/// One file of an upload as the client describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    /// File name.
    pub file_name: String,
    /// File type or extension.
    pub file_type: String,
    /// Client-computed content hash.
    pub hash: String,
    /// Inline payload or external pointer.
    pub data_source: String,
}

/// The stored result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The new version.
    pub version: Version,
    /// Files recorded under it.
    pub files: Vec<File>,
    /// Attempts needed to claim the version number.
    pub attempts: u32,
}

impl UploadOutcome {
    /// Number of files recorded.
    pub fn files_uploaded(&self) -> usize {
        self.files.len()
    }
}

/// Handles document uploads.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn RecordStore>,
    events: EventBus,
    config: UploadConfig,
    transaction_timeout: Duration,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("config", &self.config)
            .field("transaction_timeout", &self.transaction_timeout)
            .finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        store: Arc<dyn RecordStore>,
        events: EventBus,
        config: UploadConfig,
        transaction_timeout: Duration,
    ) -> Self {
        Self {
            store,
            events,
            config,
            transaction_timeout,
        }
    }

    /// Records `files` as the next version of `case_id`.
    pub async fn upload(&self, case_id: CaseId, files: Vec<UploadFile>) -> AppResult<UploadOutcome> {
        let files = self.prepare(files)?;

        if self.store.find_case(case_id).await?.is_none() {
            return Err(AppError::not_found(format!("Case {case_id} not found")));
        }

        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;
        let stored = loop {
            attempt += 1;
            let version_no = next_version_no(self.store.latest_version_no(case_id).await?);

            match self.append(case_id, version_no, &files).await {
                Ok(stored) => break stored,
                Err(e) if e.kind == ErrorKind::Conflict && attempt < max_attempts => {
                    warn!(
                        case_id = %case_id,
                        version_no,
                        attempt,
                        "Version number taken by a concurrent upload, retrying"
                    );
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    return Err(AppError::with_source(
                        ErrorKind::Conflict,
                        format!(
                            "Could not allocate a version number for case {case_id} \
                             after {attempt} attempts"
                        ),
                        e,
                    ));
                }
                Err(e) => return Err(e),
            }
        };

        let VersionWithFiles { version, files } = stored;
        info!(
            case_id = %case_id,
            version_id = %version.id,
            version_no = version.version_no,
            files = files.len(),
            attempts = attempt,
            "Documents uploaded"
        );

        self.events.publish(CaseEvent::DocumentAdded {
            case_id,
            version_id: version.id,
            version_no: version.version_no,
            hashes: files.iter().map(|f| f.hash.clone()).collect(),
        });

        Ok(UploadOutcome {
            version,
            files,
            attempts: attempt,
        })
    }

    /// Checks the batch size and classifies every content reference.
    fn prepare(&self, files: Vec<UploadFile>) -> AppResult<Vec<NewFile>> {
        if files.is_empty() {
            return Err(AppError::invalid_fields(
                "No files to upload",
                vec![FieldError::new("files", "at least one file is required")],
            ));
        }
        let max = self.config.max_files_per_upload;
        if files.len() > max {
            return Err(AppError::invalid_fields(
                "Too many files",
                vec![FieldError::new(
                    "files",
                    format!("at most {max} files may be uploaded at once"),
                )],
            ));
        }

        let mut prepared = Vec::with_capacity(files.len());
        let mut errors = Vec::new();
        for (index, file) in files.into_iter().enumerate() {
            match NewFile::new(file.file_name, file.file_type, file.hash, file.data_source) {
                Ok(file) => prepared.push(file),
                Err(e) => errors.push(FieldError::new(
                    format!("files[{index}].dataSource"),
                    e.to_string(),
                )),
            }
        }

        if errors.is_empty() {
            Ok(prepared)
        } else {
            Err(AppError::invalid_fields("Invalid file content", errors))
        }
    }

    /// One bounded attempt at writing the version. An expired attempt is
    /// abandoned, which rolls its transaction back.
    async fn append(
        &self,
        case_id: CaseId,
        version_no: i32,
        files: &[NewFile],
    ) -> AppResult<VersionWithFiles> {
        tokio::time::timeout(
            self.transaction_timeout,
            self.store.append_version(case_id, version_no, files),
        )
        .await
        .map_err(|_| {
            AppError::timeout(format!(
                "Upload transaction for case {case_id} exceeded {}s",
                self.transaction_timeout.as_secs()
            ))
        })?
    }
}
