//! Case listing and detail handlers.

use axum::Json;
use axum::extract::{Path, State};

use docket_entity::case::CaseDetail;

use crate::dto::request::RecordsRequest;
use crate::dto::response::RecordsResponse;
use crate::error::ApiError;
use crate::extractors::{ValidatedJsonOrDefault, parse_case_id};
use crate::state::AppState;

/// POST /api/records
pub async fn list_records(
    State(state): State<AppState>,
    ValidatedJsonOrDefault(req): ValidatedJsonOrDefault<RecordsRequest>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let page = state.case_service.list(req.page).await?;
    Ok(Json(page.into()))
}

/// GET /api/records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseDetail>, ApiError> {
    let id = parse_case_id(&id)?;
    let detail = state.case_service.get(id).await?;
    Ok(Json(detail))
}
