//! Health check handler.

use axum::Json;
use axum::extract::State;

use docket_core::error::AppError;
use docket_database::RecordStore;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let store = state.store.backend();
    state.store.health_check().await.map_err(|e| {
        tracing::warn!(store, error = %e, "Health check failed");
        AppError::service_unavailable(format!("Record store ({store}) is unavailable"))
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    }))
}
