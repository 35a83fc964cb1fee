//! Read models assembled from case, version, and file rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use docket_core::types::VersionId;

use super::model::Case;
use crate::file::File;
use crate::version::{Version, VersionWithFiles};

/// A case with all of its versions (ascending) and their files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetail {
    /// The case row.
    #[serde(flatten)]
    pub case: Case,
    /// Versions ordered by ascending version number.
    pub versions: Vec<VersionWithFiles>,
}

impl CaseDetail {
    /// Assemble details for `cases`, keeping their order.
    ///
    /// Versions and files that do not belong to any of the given cases are
    /// ignored. Versions are sorted by version number and files by id.
    pub fn assemble(cases: Vec<Case>, versions: Vec<Version>, files: Vec<File>) -> Vec<Self> {
        let mut files_by_version: HashMap<VersionId, Vec<File>> = HashMap::new();
        for file in files {
            files_by_version.entry(file.version_id).or_default().push(file);
        }

        let mut versions_by_case: HashMap<_, Vec<VersionWithFiles>> = HashMap::new();
        for version in versions {
            let mut files = files_by_version.remove(&version.id).unwrap_or_default();
            files.sort_by_key(|f| f.id);
            versions_by_case
                .entry(version.case_id)
                .or_default()
                .push(VersionWithFiles { version, files });
        }

        cases
            .into_iter()
            .map(|case| {
                let mut versions = versions_by_case.remove(&case.id).unwrap_or_default();
                versions.sort_by_key(|v| v.version.version_no);
                Self { case, versions }
            })
            .collect()
    }

    /// Total number of files across all versions.
    pub fn file_count(&self) -> usize {
        self.versions.iter().map(|v| v.files.len()).sum()
    }

    /// Highest version number, or `0` without versions.
    pub fn latest_version_no(&self) -> i32 {
        self.versions
            .iter()
            .map(|v| v.version.version_no)
            .max()
            .unwrap_or(0)
    }
}

/// A listing row: the case detail plus aggregate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    /// The full case detail.
    #[serde(flatten)]
    pub detail: CaseDetail,
    /// Number of versions.
    pub total_versions: usize,
    /// Number of files across all versions.
    pub total_files: usize,
    /// Highest version number, `0` when none.
    pub latest_version: i32,
}

impl From<CaseDetail> for CaseSummary {
    fn from(detail: CaseDetail) -> Self {
        Self {
            total_versions: detail.versions.len(),
            total_files: detail.file_count(),
            latest_version: detail.latest_version_no(),
            detail,
        }
    }
}
