//! Document upload service.

pub mod service;

pub use service::{UploadFile, UploadOutcome, UploadService};
