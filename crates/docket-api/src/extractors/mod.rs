//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod query;
pub mod validation;

pub use json::{ValidatedJson, ValidatedJsonOrDefault};
pub use path::parse_case_id;
pub use query::ValidatedQuery;
