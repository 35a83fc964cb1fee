//! File repository implementation.

use sqlx::{PgConnection, PgPool};

use docket_core::error::{AppError, ErrorKind};
use docket_core::result::AppResult;
use docket_core::types::{CaseId, VersionId};
use docket_entity::file::{File, NewFile};

/// Repository for file rows.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All files of the given versions, ordered by id.
    pub async fn find_by_versions(&self, version_ids: &[VersionId]) -> AppResult<Vec<File>> {
        if version_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = version_ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE version_id = ANY($1) ORDER BY id")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Insert every file of a version inside the caller's transaction, in
    /// upload order.
    pub async fn insert_batch(
        &self,
        conn: &mut PgConnection,
        version_id: VersionId,
        files: &[NewFile],
    ) -> AppResult<Vec<File>> {
        let mut inserted = Vec::with_capacity(files.len());
        for file in files {
            let row = sqlx::query_as::<_, File>(
                "INSERT INTO files \
                 (version_id, file_name, file_type, hash, data_source, source_kind, size_bytes) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
            )
            .bind(version_id)
            .bind(&file.file_name)
            .bind(&file.file_type)
            .bind(&file.hash)
            .bind(&file.data_source)
            .bind(file.source.kind.as_str())
            .bind(file.source.size_bytes)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to insert file '{}'", file.file_name),
                    e,
                )
            })?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Whether any file under any version of the case carries `hash`.
    pub async fn hash_exists_for_case(&self, case_id: CaseId, hash: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                SELECT 1 FROM files f \
                JOIN versions v ON v.id = f.version_id \
                WHERE v.case_id = $1 AND f.hash = $2 \
             )",
        )
        .bind(case_id)
        .bind(hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify hash", e))
    }
}
