//! Domain events emitted by Docket operations.
//!
//! Events are published after the corresponding database write has
//! committed. They mirror the `CaseCreated` / `DocumentAdded` events the
//! browser records on chain, so an external anchor can subscribe to them.

pub mod case;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use case::CaseEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: CaseEvent,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: CaseEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }
}
