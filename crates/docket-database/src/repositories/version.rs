//! Version repository implementation.

use sqlx::{PgConnection, PgPool};

use docket_core::error::{AppError, ErrorKind};
use docket_core::result::AppResult;
use docket_core::types::CaseId;
use docket_entity::version::Version;

use super::{VERSION_CASE_CONSTRAINT, VERSION_NUMBER_CONSTRAINT};

/// Repository for version rows.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: PgPool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest version number recorded for a case, `0` when it has none.
    pub async fn latest_version_no(&self, case_id: CaseId) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(version_no), 0) FROM versions WHERE case_id = $1",
        )
        .bind(case_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read latest version", e)
        })
    }

    /// All versions of the given cases.
    pub async fn find_by_cases(&self, case_ids: &[CaseId]) -> AppResult<Vec<Version>> {
        if case_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = case_ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, Version>(
            "SELECT * FROM versions WHERE case_id = ANY($1) ORDER BY case_id, version_no",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }

    /// Insert a version inside the caller's transaction.
    ///
    /// A taken version number maps to a conflict and a missing case to
    /// not-found.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        case_id: CaseId,
        version_no: i32,
    ) -> AppResult<Version> {
        sqlx::query_as::<_, Version>(
            "INSERT INTO versions (case_id, version_no) VALUES ($1, $2) RETURNING *",
        )
        .bind(case_id)
        .bind(version_no)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(VERSION_NUMBER_CONSTRAINT) =>
            {
                AppError::conflict(format!(
                    "Version {version_no} already exists for case {case_id}"
                ))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(VERSION_CASE_CONSTRAINT) =>
            {
                AppError::not_found(format!("Case {case_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create version", e),
        })
    }
}
