//! PostgreSQL-backed record store.

use async_trait::async_trait;
use tracing::debug;

use docket_core::error::{AppError, ErrorKind};
use docket_core::result::AppResult;
use docket_core::types::{CaseId, PageRequest, PageResponse};
use docket_entity::case::{Case, CaseDetail, CreateCase};
use docket_entity::file::NewFile;
use docket_entity::version::VersionWithFiles;

use super::RecordStore;
use crate::connection::DatabasePool;
use crate::repositories::{CaseRepository, FileRepository, VersionRepository};

/// Record store over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    db: DatabasePool,
    cases: CaseRepository,
    versions: VersionRepository,
    files: FileRepository,
}

impl PgRecordStore {
    /// Create a store using the given pool.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            cases: CaseRepository::new(pool.clone()),
            versions: VersionRepository::new(pool.clone()),
            files: FileRepository::new(pool),
            db,
        }
    }

    async fn assemble(&self, cases: Vec<Case>) -> AppResult<Vec<CaseDetail>> {
        let case_ids: Vec<CaseId> = cases.iter().map(|c| c.id).collect();
        let versions = self.versions.find_by_cases(&case_ids).await?;
        let version_ids: Vec<_> = versions.iter().map(|v| v.id).collect();
        let files = self.files.find_by_versions(&version_ids).await?;
        Ok(CaseDetail::assemble(cases, versions, files))
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create_case(&self, data: &CreateCase) -> AppResult<Case> {
        self.cases.create(data).await
    }

    async fn find_case(&self, id: CaseId) -> AppResult<Option<Case>> {
        self.cases.find_by_id(id).await
    }

    async fn case_detail(&self, id: CaseId) -> AppResult<Option<CaseDetail>> {
        let Some(case) = self.cases.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![case]).await?.pop())
    }

    async fn list_cases(&self, page: &PageRequest) -> AppResult<PageResponse<CaseDetail>> {
        let total = self.cases.count().await?;
        let cases = self.cases.list_page(page).await?;
        let details = self.assemble(cases).await?;
        Ok(PageResponse::new(details, page, total))
    }

    async fn latest_version_no(&self, case_id: CaseId) -> AppResult<i32> {
        self.versions.latest_version_no(case_id).await
    }

    async fn append_version(
        &self,
        case_id: CaseId,
        version_no: i32,
        files: &[NewFile],
    ) -> AppResult<VersionWithFiles> {
        let mut tx = self.db.begin().await?;

        // Dropping `tx` on an early return rolls the whole batch back.
        let version = self.versions.insert(&mut tx, case_id, version_no).await?;
        let files = self.files.insert_batch(&mut tx, version.id, files).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit upload", e)
        })?;

        debug!(
            case_id = %case_id,
            version_no,
            files = files.len(),
            "Version committed"
        );
        Ok(VersionWithFiles { version, files })
    }

    async fn hash_exists(&self, case_id: CaseId, hash: &str) -> AppResult<bool> {
        self.files.hash_exists_for_case(case_id, hash).await
    }

    async fn health_check(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
