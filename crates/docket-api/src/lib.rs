//! # docket-api
//!
//! HTTP API layer for Docket built on Axum.
//!
//! Provides the JSON endpoints under `/api`, middleware (request logging,
//! CORS, compression), validating extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
