//! # docket-entity
//!
//! Domain entity models for Docket. Every struct in this crate represents a
//! database table row or a domain value object. Row structs derive
//! `sqlx::FromRow` and serialize with the camelCase field names the HTTP API
//! exposes.

pub mod case;
pub mod file;
pub mod version;
