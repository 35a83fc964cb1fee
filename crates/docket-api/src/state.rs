//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use docket_core::config::AppConfig;
use docket_database::RecordStore;
use docket_service::{CaseService, EventBus, UploadService, VerificationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Record store (PostgreSQL or in-memory)
    pub store: Arc<dyn RecordStore>,
    /// Domain event bus
    pub events: EventBus,
    /// Case service
    pub case_service: Arc<CaseService>,
    /// Upload service
    pub upload_service: Arc<UploadService>,
    /// Verification service
    pub verification_service: Arc<VerificationService>,
}

impl AppState {
    /// Wire services over the given store.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let events = EventBus::new(config.events.channel_capacity);
        let case_service = Arc::new(CaseService::new(Arc::clone(&store), events.clone()));
        let upload_service = Arc::new(UploadService::new(
            Arc::clone(&store),
            events.clone(),
            config.upload.clone(),
            Duration::from_secs(config.database.transaction_timeout_seconds),
        ));
        let verification_service = Arc::new(VerificationService::new(Arc::clone(&store)));

        Self {
            config: Arc::new(config),
            store,
            events,
            case_service,
            upload_service,
            verification_service,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend())
            .finish_non_exhaustive()
    }
}
