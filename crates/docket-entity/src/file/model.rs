//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docket_core::types::{FileId, VersionId};

use super::source::{ContentSource, SourceError};

/// A document recorded under a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The version this file belongs to.
    pub version_id: VersionId,
    /// The file name as uploaded.
    pub file_name: String,
    /// File type or extension as reported by the client.
    pub file_type: String,
    /// Client-computed content hash, stored and compared verbatim.
    pub hash: String,
    /// The content reference exactly as supplied.
    pub data_source: String,
    /// `inline` or `external`.
    pub source_kind: String,
    /// Decoded size of inline content.
    pub size_bytes: Option<i64>,
    /// When the file was recorded.
    pub created_at: DateTime<Utc>,
}

impl File {
    /// Exact, case-sensitive hash comparison.
    pub fn matches_hash(&self, hash: &str) -> bool {
        self.hash == hash
    }
}

/// Data required to record a new file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    /// The file name.
    pub file_name: String,
    /// The file type or extension.
    pub file_type: String,
    /// Client-computed content hash.
    pub hash: String,
    /// The raw content reference.
    pub data_source: String,
    /// Classification of `data_source`.
    pub source: ContentSource,
}

impl NewFile {
    /// Build a new file record, classifying its content reference.
    pub fn new(
        file_name: impl Into<String>,
        file_type: impl Into<String>,
        hash: impl Into<String>,
        data_source: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let data_source = data_source.into();
        let source = ContentSource::classify(&data_source)?;
        Ok(Self {
            file_name: file_name.into(),
            file_type: file_type.into(),
            hash: hash.into(),
            data_source,
            source,
        })
    }
}
