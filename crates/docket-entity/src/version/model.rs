//! Version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docket_core::types::{CaseId, VersionId};

use crate::file::File;

/// Version number assigned to the first upload of a case.
pub const FIRST_VERSION_NO: i32 = 1;

/// The version number following `last`, where `last` is `0` for a case
/// without versions.
pub fn next_version_no(last: i32) -> i32 {
    last.max(0) + FIRST_VERSION_NO
}

/// A numbered snapshot of uploaded files for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Unique version identifier.
    pub id: VersionId,
    /// The owning case.
    pub case_id: CaseId,
    /// Sequential per-case version number, starting at 1.
    pub version_no: i32,
    /// When this version was created.
    pub created_at: DateTime<Utc>,
}

/// A version together with its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionWithFiles {
    /// The version row.
    #[serde(flatten)]
    pub version: Version,
    /// Files recorded in this version.
    pub files: Vec<File>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_version_is_one() {
        assert_eq!(next_version_no(0), 1);
    }

    #[test]
    fn test_next_follows_highest() {
        assert_eq!(next_version_no(3), 4);
    }
}
