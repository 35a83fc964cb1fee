//! Integration tests for case creation.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, error_fields};

#[tokio::test]
async fn test_create_case_returns_id() {
    let app = TestApp::new();

    let first = app.create_case("State v. Doe").await;
    let second = app.create_case("State v. Roe").await;

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_create_case_trims_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/case/create",
            Some(json!({
                "caseTitle": "  State v. Doe ",
                "attorney": " A. Counsel",
                "defendant": "J. Doe ",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let id = response.body["id"].as_i64().unwrap();
    let detail = app.request("GET", &format!("/api/records/{id}"), None).await;
    assert_eq!(detail.body["caseTitle"], "State v. Doe");
    assert_eq!(detail.body["attorney"], "A. Counsel");
    assert_eq!(detail.body["defendant"], "J. Doe");
}

#[tokio::test]
async fn test_create_case_lists_missing_and_blank_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/case/create",
            Some(json!({ "caseTitle": "   " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        error_fields(&response.body),
        vec!["attorney", "caseTitle", "defendant"]
    );
}

#[tokio::test]
async fn test_create_case_rejects_overlong_title() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/case/create",
            Some(json!({
                "caseTitle": "x".repeat(501),
                "attorney": "A. Counsel",
                "defendant": "J. Doe",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["caseTitle"]);
}

#[tokio::test]
async fn test_create_case_rejects_malformed_json() {
    let app = TestApp::new();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/case/create")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/case/create", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
