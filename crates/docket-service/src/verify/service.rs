//! Checks a client-computed hash against the hashes recorded for a case.

use std::sync::Arc;

use tracing::debug;

use docket_core::result::AppResult;
use docket_core::types::CaseId;
use docket_database::RecordStore;

/// Answers whether a document hash was recorded under a case.
#[derive(Clone)]
pub struct VerificationService {
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for VerificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationService").finish()
    }
}

impl VerificationService {
    /// Creates a new verification service.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// `true` iff some file in some version of the case has exactly `hash`.
    ///
    /// An unknown case simply has no matching files.
    pub async fn verify(&self, case_id: CaseId, hash: &str) -> AppResult<bool> {
        let is_valid = self.store.hash_exists(case_id, hash).await?;
        debug!(case_id = %case_id, is_valid, "Hash verified");
        Ok(is_valid)
    }
}
