//! In-process record store.
//!
//! Writes are serialised behind a single [`RwLock`], so every operation is
//! atomic with respect to the others. The store enforces the same
//! not-found and version-number uniqueness rules as the database schema.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_core::types::{CaseId, FileId, PageRequest, PageResponse, VersionId};
use docket_entity::case::{Case, CaseDetail, CreateCase};
use docket_entity::file::{File, NewFile};
use docket_entity::version::{Version, VersionWithFiles};

use super::RecordStore;

#[derive(Debug, Default)]
struct Tables {
    cases: BTreeMap<CaseId, Case>,
    versions: Vec<Version>,
    files: Vec<File>,
    last_case_id: i64,
    last_version_id: i64,
    last_file_id: i64,
}

impl Tables {
    fn detail(&self, case: &Case) -> CaseDetail {
        let versions: Vec<Version> = self
            .versions
            .iter()
            .filter(|v| v.case_id == case.id)
            .cloned()
            .collect();
        let files = self
            .files
            .iter()
            .filter(|f| versions.iter().any(|v| v.id == f.version_id))
            .cloned()
            .collect();
        CaseDetail::assemble(vec![case.clone()], versions, files)
            .pop()
            .unwrap_or_else(|| CaseDetail {
                case: case.clone(),
                versions: Vec::new(),
            })
    }
}

/// Record store holding all rows in memory.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: RwLock<Tables>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_case(&self, data: &CreateCase) -> AppResult<Case> {
        let mut tables = self.tables.write().await;
        tables.last_case_id += 1;
        let case = Case {
            id: CaseId(tables.last_case_id),
            case_title: data.case_title.clone(),
            attorney: data.attorney.clone(),
            defendant: data.defendant.clone(),
            created_at: Utc::now(),
        };
        tables.cases.insert(case.id, case.clone());
        Ok(case)
    }

    async fn find_case(&self, id: CaseId) -> AppResult<Option<Case>> {
        Ok(self.tables.read().await.cases.get(&id).cloned())
    }

    async fn case_detail(&self, id: CaseId) -> AppResult<Option<CaseDetail>> {
        let tables = self.tables.read().await;
        Ok(tables.cases.get(&id).map(|case| tables.detail(case)))
    }

    async fn list_cases(&self, page: &PageRequest) -> AppResult<PageResponse<CaseDetail>> {
        let tables = self.tables.read().await;
        let details = tables
            .cases
            .values()
            .rev()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .map(|case| tables.detail(case))
            .collect();
        Ok(PageResponse::new(details, page, tables.cases.len() as u64))
    }

    async fn latest_version_no(&self, case_id: CaseId) -> AppResult<i32> {
        let tables = self.tables.read().await;
        Ok(tables
            .versions
            .iter()
            .filter(|v| v.case_id == case_id)
            .map(|v| v.version_no)
            .max()
            .unwrap_or(0))
    }

    async fn append_version(
        &self,
        case_id: CaseId,
        version_no: i32,
        files: &[NewFile],
    ) -> AppResult<VersionWithFiles> {
        let mut tables = self.tables.write().await;

        if !tables.cases.contains_key(&case_id) {
            return Err(AppError::not_found(format!("Case {case_id} not found")));
        }
        if tables
            .versions
            .iter()
            .any(|v| v.case_id == case_id && v.version_no == version_no)
        {
            return Err(AppError::conflict(format!(
                "Version {version_no} already exists for case {case_id}"
            )));
        }

        let now = Utc::now();
        tables.last_version_id += 1;
        let version = Version {
            id: VersionId(tables.last_version_id),
            case_id,
            version_no,
            created_at: now,
        };

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            tables.last_file_id += 1;
            stored.push(File {
                id: FileId(tables.last_file_id),
                version_id: version.id,
                file_name: file.file_name.clone(),
                file_type: file.file_type.clone(),
                hash: file.hash.clone(),
                data_source: file.data_source.clone(),
                source_kind: file.source.kind.as_str().to_string(),
                size_bytes: file.source.size_bytes,
                created_at: now,
            });
        }

        tables.versions.push(version.clone());
        tables.files.extend(stored.iter().cloned());
        Ok(VersionWithFiles {
            version,
            files: stored,
        })
    }

    async fn hash_exists(&self, case_id: CaseId, hash: &str) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.files.iter().any(|f| {
            f.matches_hash(hash)
                && tables
                    .versions
                    .iter()
                    .any(|v| v.id == f.version_id && v.case_id == case_id)
        }))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
