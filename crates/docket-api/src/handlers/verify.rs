//! Hash verification handler.

use axum::Json;
use axum::extract::State;

use docket_core::types::CaseId;

use crate::dto::request::VerifyQuery;
use crate::dto::response::VerifyResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// GET /api/verify?caseNo=&hash=
pub async fn verify(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<VerifyQuery>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let is_valid = state
        .verification_service
        .verify(CaseId(query.case_no), &query.hash)
        .await?;
    Ok(Json(VerifyResponse { is_valid }))
}
