//! Route definitions for the Docket HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with request logging and the body size limit.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(case_routes())
        .merge(record_routes())
        .merge(document_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Case creation
fn case_routes() -> Router<AppState> {
    Router::new().route("/case/create", post(handlers::case::create_case))
}

/// Listing and detail
fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/records", post(handlers::records::list_records))
        .route("/records/{id}", get(handlers::records::get_record))
}

/// Upload and verification
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::upload::upload))
        .route("/verify", get(handlers::verify::verify))
}
