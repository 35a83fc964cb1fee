//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use docket_api::{AppState, build_app};
use docket_core::config::AppConfig;
use docket_database::{MemoryRecordStore, RecordStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for direct assertions
    pub store: Arc<MemoryRecordStore>,
    /// Application config
    pub config: AppConfig,
}

/// A buffered response
#[derive(Debug)]
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// JSON body (`Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.upload.max_files_per_upload = 5;
        Self::with_config(config)
    }

    /// Create a test application with explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryRecordStore::new());
        let dyn_store: Arc<dyn RecordStore> = store.clone();
        let router = build_app(AppState::new(config.clone(), dyn_store));
        Self {
            router,
            store,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    /// Create a case through the API and return its id
    pub async fn create_case(&self, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/case/create",
                Some(json!({
                    "caseTitle": title,
                    "attorney": "A. Counsel",
                    "defendant": "J. Doe",
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Case creation failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in response")
    }

    /// Upload external-pointer files with the given hashes
    pub async fn upload(&self, case_no: i64, hashes: &[&str]) -> TestResponse {
        let files: Vec<Value> = hashes
            .iter()
            .map(|hash| {
                json!({
                    "fileName": format!("{hash}.pdf"),
                    "fileType": "pdf",
                    "hash": hash,
                    "dataSource": format!("ipfs://{hash}"),
                })
            })
            .collect();
        self.request(
            "POST",
            "/api/upload",
            Some(json!({ "caseNo": case_no, "files": files })),
        )
        .await
    }
}

/// Field names listed in a validation error body
pub fn error_fields(body: &Value) -> Vec<String> {
    body["details"]["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
