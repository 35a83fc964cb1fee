//! Response DTOs.

use serde::{Deserialize, Serialize};

use docket_core::types::{CaseId, PageResponse, VersionId};
use docket_entity::case::CaseSummary;
use docket_service::upload::UploadOutcome;

/// `201` body of case creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCaseResponse {
    /// The new case number.
    pub id: CaseId,
}

/// One page of the case listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    /// Cases on this page, newest first.
    pub records: Vec<CaseSummary>,
    /// Total number of cases.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl From<PageResponse<CaseSummary>> for RecordsResponse {
    fn from(page: PageResponse<CaseSummary>) -> Self {
        Self {
            records: page.items,
            total: page.total_items,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// `201` body of an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// The assigned version number.
    pub version: i32,
    /// The version row id.
    pub version_id: VersionId,
    /// Number of files recorded.
    pub files_uploaded: usize,
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        Self {
            version: outcome.version.version_no,
            version_id: outcome.version.id,
            files_uploaded: outcome.files_uploaded(),
        }
    }
}

/// Verification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Whether the hash is recorded under the case.
    pub is_valid: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Record store backend.
    pub store: String,
}
