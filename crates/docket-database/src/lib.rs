//! # docket-database
//!
//! PostgreSQL connection management, repositories for cases, versions and
//! files, and the [`RecordStore`] abstraction with its PostgreSQL and
//! in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryRecordStore, PgRecordStore, RecordStore, open_store};
