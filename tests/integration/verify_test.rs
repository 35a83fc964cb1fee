//! Integration tests for hash verification.

use axum::http::StatusCode;

use crate::helpers::{TestApp, error_fields};

#[tokio::test]
async fn test_known_hash_is_valid() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;
    app.upload(case_no, &["abc123"]).await;
    app.upload(case_no, &["def456"]).await;

    for hash in ["abc123", "def456"] {
        let response = app
            .request("GET", &format!("/api/verify?caseNo={case_no}&hash={hash}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["isValid"], true);
    }
}

#[tokio::test]
async fn test_hash_match_is_case_sensitive() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;
    app.upload(case_no, &["abc123"]).await;

    let response = app
        .request("GET", &format!("/api/verify?caseNo={case_no}&hash=ABC123"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isValid"], false);
}

#[tokio::test]
async fn test_hash_is_scoped_to_its_case() {
    let app = TestApp::new();
    let first = app.create_case("State v. Doe").await;
    let second = app.create_case("State v. Roe").await;
    app.upload(first, &["abc123"]).await;

    let response = app
        .request("GET", &format!("/api/verify?caseNo={second}&hash=abc123"), None)
        .await;
    assert_eq!(response.body["isValid"], false);
}

#[tokio::test]
async fn test_unknown_case_is_not_valid() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/verify?caseNo=77&hash=abc123", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isValid"], false);
}

#[tokio::test]
async fn test_missing_parameters_are_listed() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/verify?caseNo=1", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["hash"]);

    let response = app.request("GET", "/api/verify", None).await;
    assert_eq!(error_fields(&response.body), vec!["caseNo", "hash"]);
}
