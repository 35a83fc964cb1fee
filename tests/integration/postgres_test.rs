//! Store tests against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`. The tests
//! panic when `DATABASE_URL` is unset.

use docket_core::error::ErrorKind;
use docket_core::types::{CaseId, PageRequest};
use docket_database::connection::DatabasePool;
use docket_database::migration::run_migrations;
use docket_database::{PgRecordStore, RecordStore};
use docket_entity::case::CreateCase;
use docket_entity::file::NewFile;
use sqlx::PgPool;

async fn store() -> PgRecordStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for --ignored tests");
    let pool = PgPool::connect(&url).await.expect("Failed to connect");
    run_migrations(&pool).await.expect("Failed to migrate");
    PgRecordStore::new(DatabasePool::from_pool(pool))
}

fn new_case(title: &str) -> CreateCase {
    CreateCase {
        case_title: title.to_string(),
        attorney: "A. Counsel".to_string(),
        defendant: "J. Doe".to_string(),
    }
}

fn pointer(hash: &str) -> NewFile {
    NewFile::new(format!("{hash}.pdf"), "pdf", hash, format!("ipfs://{hash}"))
        .expect("valid pointer")
}

#[tokio::test]
#[ignore]
async fn test_pg_append_and_detail() {
    let store = store().await;
    let case = store.create_case(&new_case("State v. Doe")).await.unwrap();

    store.append_version(case.id, 1, &[pointer("a"), pointer("b")]).await.unwrap();
    store.append_version(case.id, 2, &[pointer("c")]).await.unwrap();

    assert_eq!(store.latest_version_no(case.id).await.unwrap(), 2);
    let detail = store.case_detail(case.id).await.unwrap().expect("case exists");
    assert_eq!(detail.versions.len(), 2);
    assert_eq!(detail.versions[0].files.len(), 2);
    assert_eq!(detail.versions[1].version.version_no, 2);

    assert!(store.hash_exists(case.id, "c").await.unwrap());
    assert!(!store.hash_exists(case.id, "C").await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_pg_duplicate_version_is_conflict() {
    let store = store().await;
    let case = store.create_case(&new_case("State v. Roe")).await.unwrap();
    store.append_version(case.id, 1, &[pointer("a")]).await.unwrap();

    let err = store
        .append_version(case.id, 1, &[pointer("b")])
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(!store.hash_exists(case.id, "b").await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_pg_missing_case_is_not_found() {
    let store = store().await;
    let err = store
        .append_version(CaseId(i64::MAX), 1, &[pointer("a")])
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore]
async fn test_pg_failed_file_rolls_back_version() {
    let store = store().await;
    let case = store.create_case(&new_case("State v. Poe")).await.unwrap();

    let oversized = NewFile::new("x".repeat(300), "pdf", "z", "ipfs://z").unwrap();
    let result = store
        .append_version(case.id, 1, &[pointer("ok"), oversized])
        .await;

    assert!(result.is_err());
    assert_eq!(store.latest_version_no(case.id).await.unwrap(), 0);
    assert!(!store.hash_exists(case.id, "ok").await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_pg_listing_is_newest_first() {
    let store = store().await;
    let older = store.create_case(&new_case("Older")).await.unwrap();
    let newer = store.create_case(&new_case("Newer")).await.unwrap();

    let page = store.list_cases(&PageRequest::records(1)).await.unwrap();
    let ids: Vec<CaseId> = page.items.iter().map(|d| d.case.id).collect();
    let newer_pos = ids.iter().position(|id| *id == newer.id);
    let older_pos = ids.iter().position(|id| *id == older.id);
    let newer_pos = newer_pos.expect("newest case on the first page");
    assert!(older_pos.is_none_or(|pos| pos > newer_pos));
}

#[tokio::test]
#[ignore]
async fn test_pg_listing_far_past_the_end_is_empty() {
    let store = store().await;
    store.create_case(&new_case("Only")).await.unwrap();

    let page = store.list_cases(&PageRequest::records(u64::MAX)).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.total_items >= 1);
    assert_eq!(page.page, u64::MAX);
}
