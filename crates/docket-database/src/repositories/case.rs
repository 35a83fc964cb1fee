//! Case repository implementation.

use sqlx::PgPool;

use docket_core::error::{AppError, ErrorKind};
use docket_core::result::AppResult;
use docket_core::types::{CaseId, PageRequest};
use docket_entity::case::{Case, CreateCase};

/// Repository for case rows.
#[derive(Debug, Clone)]
pub struct CaseRepository {
    pool: PgPool,
}

impl CaseRepository {
    /// Create a new case repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new case.
    pub async fn create(&self, data: &CreateCase) -> AppResult<Case> {
        sqlx::query_as::<_, Case>(
            "INSERT INTO cases (case_title, attorney, defendant) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.case_title)
        .bind(&data.attorney)
        .bind(&data.defendant)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create case", e))
    }

    /// Find a case by ID.
    pub async fn find_by_id(&self, id: CaseId) -> AppResult<Option<Case>> {
        sqlx::query_as::<_, Case>("SELECT * FROM cases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find case", e))
    }

    /// Count all cases.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cases")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count cases", e))?;
        Ok(total.max(0) as u64)
    }

    /// One page of cases, newest (highest id) first.
    pub async fn list_page(&self, page: &PageRequest) -> AppResult<Vec<Case>> {
        sqlx::query_as::<_, Case>("SELECT * FROM cases ORDER BY id DESC LIMIT $1 OFFSET $2")
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cases", e))
    }
}
