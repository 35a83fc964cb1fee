//! Integration tests for the case listing and detail.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, error_fields};

#[tokio::test]
async fn test_empty_listing() {
    let app = TestApp::new();
    let response = app.request("POST", "/api/records", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["records"], json!([]));
    assert_eq!(response.body["total"], 0);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["totalPages"], 0);
}

#[tokio::test]
async fn test_listing_without_body_defaults_to_first_page() {
    let app = TestApp::new();
    app.create_case("State v. Doe").await;

    let response = app.request("POST", "/api/records", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn test_listing_pages_newest_first() {
    let app = TestApp::new();
    for n in 1..=23 {
        app.create_case(&format!("Case {n}")).await;
    }

    let first = app
        .request("POST", "/api/records", Some(json!({ "page": 1 })))
        .await;
    let records = first.body["records"].as_array().unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0]["id"], 23);
    assert_eq!(records[9]["id"], 14);
    assert_eq!(first.body["total"], 23);
    assert_eq!(first.body["totalPages"], 3);

    let last = app
        .request("POST", "/api/records", Some(json!({ "page": 3 })))
        .await;
    let ids: Vec<i64> = last.body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_listing_far_past_the_end_is_empty() {
    let app = TestApp::new();
    for n in 1..=3 {
        app.create_case(&format!("Case {n}")).await;
    }

    let response = app
        .request("POST", "/api/records", Some(json!({ "page": u64::MAX })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["records"], json!([]));
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["totalPages"], 1);
    assert_eq!(response.body["page"], u64::MAX);
}

#[tokio::test]
async fn test_listing_includes_versions_and_aggregates() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;
    app.upload(case_no, &["a", "b"]).await;
    app.upload(case_no, &["c"]).await;

    let response = app.request("POST", "/api/records", Some(json!({}))).await;
    let record = &response.body["records"][0];

    assert_eq!(record["totalVersions"], 2);
    assert_eq!(record["totalFiles"], 3);
    assert_eq!(record["latestVersion"], 2);
    assert_eq!(record["versions"][0]["versionNo"], 1);
    assert_eq!(record["versions"][0]["files"][1]["hash"], "b");
    assert_eq!(record["versions"][1]["files"][0]["fileName"], "c.pdf");
}

#[tokio::test]
async fn test_listing_rejects_page_zero() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/records", Some(json!({ "page": 0 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["page"]);
}

#[tokio::test]
async fn test_detail_lists_versions_in_order() {
    let app = TestApp::new();
    let case_no = app.create_case("State v. Doe").await;
    for hash in ["v1", "v2", "v3"] {
        app.upload(case_no, &[hash]).await;
    }

    let response = app
        .request("GET", &format!("/api/records/{case_no}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], case_no);
    let numbers: Vec<i64> = response.body["versions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["versionNo"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(response.body["versions"][2]["files"][0]["sourceKind"], "external");
}

#[tokio::test]
async fn test_detail_unknown_case_is_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/records/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_detail_non_integer_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/records/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["id"]);
}
