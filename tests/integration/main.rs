//! HTTP-level integration tests driving the full router.

mod helpers;

mod case_test;
mod health_test;
mod postgres_test;
mod records_test;
mod upload_test;
mod verify_test;
