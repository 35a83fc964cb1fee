//! In-process domain event bus.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use docket_core::events::{CaseEvent, DomainEvent};

/// Broadcast channel for [`DomainEvent`]s.
///
/// Publishing never blocks; events are dropped when nobody listens and
/// slow subscribers observe a lag instead of back-pressuring writers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event, returning the number of subscribers reached.
    pub fn publish(&self, payload: CaseEvent) -> usize {
        let event = DomainEvent::new(payload);
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                debug!(event = event.payload.name(), "No event subscribers");
                0
            }
        }
    }

    /// Subscribe to all events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Spawn a task that writes every event to the log as an audit trail.
    ///
    /// The task ends when every sender has been dropped.
    pub fn spawn_audit_logger(&self) -> JoinHandle<()> {
        let mut rx = self.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => log_event(&event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Audit logger lagged behind domain events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

fn log_event(event: &DomainEvent) {
    match &event.payload {
        CaseEvent::CaseCreated { case_id, case_title } => info!(
            event_id = %event.id,
            event = event.payload.name(),
            case_id = %case_id,
            case_title = %case_title,
            "Domain event"
        ),
        CaseEvent::DocumentAdded {
            case_id,
            version_id,
            version_no,
            hashes,
        } => info!(
            event_id = %event.id,
            event = event.payload.name(),
            case_id = %case_id,
            version_id = %version_id,
            version_no,
            files = hashes.len(),
            "Domain event"
        ),
    }
}
