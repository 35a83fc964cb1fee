//! Case entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docket_core::types::CaseId;

/// A court matter grouping document versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Unique case identifier (the case number).
    pub id: CaseId,
    /// Case title.
    pub case_title: String,
    /// Attorney of record.
    pub attorney: String,
    /// Defendant name.
    pub defendant: String,
    /// When the case was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCase {
    /// Case title.
    pub case_title: String,
    /// Attorney of record.
    pub attorney: String,
    /// Defendant name.
    pub defendant: String,
}
