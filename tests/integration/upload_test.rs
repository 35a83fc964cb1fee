//! Integration tests for document uploads.

use axum::http::StatusCode;
use serde_json::json;

use docket_core::types::CaseId;
use docket_database::RecordStore;

use crate::helpers::{TestApp, error_fields};

#[tokio::test]
async fn test_first_upload_is_version_one() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;

    let response = app.upload(case_no, &["a", "b"]).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["version"], 1);
    assert_eq!(response.body["filesUploaded"], 2);
}

#[tokio::test]
async fn test_next_upload_follows_highest_version() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;
    for hash in ["a", "b", "c"] {
        app.upload(case_no, &[hash]).await;
    }

    let response = app.upload(case_no, &["d"]).await;
    assert_eq!(response.body["version"], 4);
}

#[tokio::test]
async fn test_versions_are_numbered_per_case() {
    let app = TestApp::new();
    let first = app.create_case("State v. Doe").await;
    let second = app.create_case("State v. Roe").await;
    app.upload(first, &["a"]).await;
    app.upload(first, &["b"]).await;

    let response = app.upload(second, &["c"]).await;
    assert_eq!(response.body["version"], 1);
}

#[tokio::test]
async fn test_upload_to_missing_case_persists_nothing() {
    let app = TestApp::new();

    let response = app.upload(42, &["a"]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!app.store.hash_exists(CaseId(42), "a").await.unwrap());
    assert_eq!(app.store.latest_version_no(CaseId(42)).await.unwrap(), 0);
}

#[tokio::test]
async fn test_inline_payload_is_sized() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "caseNo": case_no,
                "files": [{
                    "fileName": "note.txt",
                    "fileType": "",
                    "hash": "2cf24dba",
                    "dataSource": "data:text/plain;base64,aGVsbG8=",
                }],
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let detail = app
        .request("GET", &format!("/api/records/{case_no}"), None)
        .await;
    let file = &detail.body["versions"][0]["files"][0];
    assert_eq!(file["sourceKind"], "inline");
    assert_eq!(file["sizeBytes"], 5);
    assert_eq!(file["dataSource"], "data:text/plain;base64,aGVsbG8=");
}

#[tokio::test]
async fn test_undecodable_inline_payload_names_the_file() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "caseNo": case_no,
                "files": [
                    { "fileName": "a.pdf", "fileType": "pdf", "hash": "a", "dataSource": "ipfs://a" },
                    { "fileName": "b.pdf", "fileType": "pdf", "hash": "b", "dataSource": "%%%" },
                ],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["files[1].dataSource"]);
    assert!(!app.store.hash_exists(CaseId(case_no), "a").await.unwrap());
}

#[tokio::test]
async fn test_malformed_upload_lists_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "caseNo": 0,
                "files": [{ "fileName": "", "fileType": "pdf", "hash": "", "dataSource": "ipfs://a" }],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&response.body),
        vec!["caseNo", "files[0].fileName", "files[0].hash"]
    );
}

#[tokio::test]
async fn test_empty_file_list_is_rejected() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;

    let response = app
        .request("POST", "/api/upload", Some(json!({ "caseNo": case_no, "files": [] })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["files"]);
}

#[tokio::test]
async fn test_too_many_files_is_rejected() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;

    let response = app.upload(case_no, &["1", "2", "3", "4", "5", "6"]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["files"]);
}
