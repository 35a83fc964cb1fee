//! Document integrity verification.

pub mod service;

pub use service::VerificationService;
