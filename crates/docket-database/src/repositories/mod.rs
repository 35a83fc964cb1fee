//! Repository implementations for cases, versions, and files.

pub mod case;
pub mod file;
pub mod version;

pub use case::CaseRepository;
pub use file::FileRepository;
pub use version::VersionRepository;

/// Unique constraint guarding per-case version numbers.
pub const VERSION_NUMBER_CONSTRAINT: &str = "versions_case_id_version_no_key";

/// Foreign key from a version to its case.
pub const VERSION_CASE_CONSTRAINT: &str = "versions_case_id_fkey";
