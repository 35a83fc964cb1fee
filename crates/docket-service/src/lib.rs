//! # docket-service
//!
//! Business logic service layer for Docket. Services orchestrate the
//! [`RecordStore`](docket_database::RecordStore) and publish domain events
//! after successful writes.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod case;
pub mod events;
pub mod upload;
pub mod verify;

pub use case::CaseService;
pub use events::EventBus;
pub use upload::{UploadFile, UploadOutcome, UploadService};
pub use verify::VerificationService;
