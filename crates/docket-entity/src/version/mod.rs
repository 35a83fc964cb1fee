//! Version domain entities.

pub mod model;

pub use model::{FIRST_VERSION_NO, Version, VersionWithFiles, next_version_no};
