//! Document upload handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use docket_core::types::CaseId;

use crate::dto::request::UploadRequest;
use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/upload
pub async fn upload(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let files = req.files.into_iter().map(Into::into).collect();
    let outcome = state
        .upload_service
        .upload(CaseId(req.case_no), files)
        .await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}
