//! The record store abstraction used by the service layer.
//!
//! [`PgRecordStore`] persists to PostgreSQL; [`MemoryRecordStore`] keeps
//! everything in process and is selected with a `memory://` database URL.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use docket_core::config::DatabaseConfig;
use docket_core::result::AppResult;
use docket_core::types::{CaseId, PageRequest, PageResponse};
use docket_entity::case::{Case, CaseDetail, CreateCase};
use docket_entity::file::NewFile;
use docket_entity::version::VersionWithFiles;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Persistence operations for cases, versions, and files.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Insert a new case.
    async fn create_case(&self, data: &CreateCase) -> AppResult<Case>;

    /// Find a case by id.
    async fn find_case(&self, id: CaseId) -> AppResult<Option<Case>>;

    /// A case with its versions (ascending) and their files.
    async fn case_detail(&self, id: CaseId) -> AppResult<Option<CaseDetail>>;

    /// One page of case details, newest case first.
    async fn list_cases(&self, page: &PageRequest) -> AppResult<PageResponse<CaseDetail>>;

    /// Highest version number of a case, `0` when it has none.
    async fn latest_version_no(&self, case_id: CaseId) -> AppResult<i32>;

    /// Atomically record version `version_no` of a case with all its files.
    ///
    /// Either the version and every file are stored, or nothing is. A taken
    /// version number fails with a conflict, a missing case with not-found.
    async fn append_version(
        &self,
        case_id: CaseId,
        version_no: i32,
        files: &[NewFile],
    ) -> AppResult<VersionWithFiles>;

    /// Whether any file under any version of the case carries exactly `hash`.
    async fn hash_exists(&self, case_id: CaseId, hash: &str) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<()>;
}

/// Open the store selected by the database configuration.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn RecordStore>> {
    if config.is_memory() {
        info!("Using in-memory record store");
        return Ok(Arc::new(MemoryRecordStore::new()));
    }

    let db = DatabasePool::connect(config).await?;
    if config.run_migrations {
        run_migrations(db.pool()).await?;
    }
    Ok(Arc::new(PgRecordStore::new(db)))
}
