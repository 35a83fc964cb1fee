//! Database migration runner.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{info, warn};

use docket_core::error::{AppError, ErrorKind};
use docket_core::result::AppResult;

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(
        available = MIGRATOR.iter().count(),
        "Running database migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed");
    Ok(())
}

/// Drop every table in the public schema and re-apply all migrations.
pub async fn reset_database(pool: &PgPool) -> AppResult<()> {
    warn!("Dropping public schema");

    for statement in ["DROP SCHEMA public CASCADE", "CREATE SCHEMA public"] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to reset database schema", e)
        })?;
    }

    run_migrations(pool).await
}
