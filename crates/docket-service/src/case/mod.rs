//! Case management services.

pub mod service;

pub use service::{CaseService, MAX_CASE_FIELD_CHARS};
