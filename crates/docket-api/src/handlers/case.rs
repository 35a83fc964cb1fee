//! Case creation handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CreateCaseRequest;
use crate::dto::response::CreateCaseResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/case/create
pub async fn create_case(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CreateCaseResponse>), ApiError> {
    let case = state.case_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(CreateCaseResponse { id: case.id })))
}
