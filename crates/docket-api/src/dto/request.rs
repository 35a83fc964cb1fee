//! Request DTOs with validation.
//!
//! Missing string fields default to empty so they surface as field errors
//! rather than as a body-level parse failure.

use serde::{Deserialize, Serialize};
use validator::Validate;

use docket_entity::case::CreateCase;
use docket_service::upload::UploadFile;

use crate::extractors::validation::not_blank;

/// `POST /api/case/create` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    /// Case title.
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 500, message = "must be at most 500 characters")
    )]
    pub case_title: String,
    /// Attorney of record.
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 500, message = "must be at most 500 characters")
    )]
    pub attorney: String,
    /// Defendant name.
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 500, message = "must be at most 500 characters")
    )]
    pub defendant: String,
}

impl From<CreateCaseRequest> for CreateCase {
    fn from(req: CreateCaseRequest) -> Self {
        Self {
            case_title: req.case_title,
            attorney: req.attorney,
            defendant: req.defendant,
        }
    }
}

/// `POST /api/records` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordsRequest {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: u64,
}

impl Default for RecordsRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

fn default_page() -> u64 {
    1
}

/// `POST /api/upload` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// The case receiving the new version.
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive case number"))]
    pub case_no: i64,
    /// Files making up the version.
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one file is required"), nested)]
    pub files: Vec<UploadFileRequest>,
}

/// One file inside an [`UploadRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest {
    /// File name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub file_name: String,
    /// File type or extension; may be empty.
    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub file_type: String,
    /// Client-computed content hash.
    #[serde(default)]
    #[validate(length(min = 1, max = 256, message = "must be 1-256 characters"))]
    pub hash: String,
    /// Inline payload or external pointer.
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub data_source: String,
}

impl From<UploadFileRequest> for UploadFile {
    fn from(req: UploadFileRequest) -> Self {
        Self {
            file_name: req.file_name,
            file_type: req.file_type,
            hash: req.hash,
            data_source: req.data_source,
        }
    }
}

/// `GET /api/verify` query.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyQuery {
    /// The case to search.
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive case number"))]
    pub case_no: i64,
    /// The hash to look for.
    #[serde(default)]
    #[validate(length(min = 1, max = 256, message = "must be 1-256 characters"))]
    pub hash: String,
}
