//! Case-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{CaseId, VersionId};

/// Events related to cases and their documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum CaseEvent {
    /// A case was created.
    CaseCreated {
        /// The new case.
        case_id: CaseId,
        /// The case title.
        case_title: String,
    },
    /// A new version of documents was added to a case.
    DocumentAdded {
        /// The owning case.
        case_id: CaseId,
        /// The version row.
        version_id: VersionId,
        /// The per-case version number.
        version_no: i32,
        /// Content hashes of the files in the version, in upload order.
        hashes: Vec<String>,
    },
}

impl CaseEvent {
    /// The case this event concerns.
    pub fn case_id(&self) -> CaseId {
        match self {
            Self::CaseCreated { case_id, .. } | Self::DocumentAdded { case_id, .. } => *case_id,
        }
    }

    /// Short event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaseCreated { .. } => "CaseCreated",
            Self::DocumentAdded { .. } => "DocumentAdded",
        }
    }
}
