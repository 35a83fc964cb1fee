//! Request handlers grouped by resource.

pub mod case;
pub mod health;
pub mod records;
pub mod upload;
pub mod verify;
