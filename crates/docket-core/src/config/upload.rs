//! Upload flow configuration.

use serde::{Deserialize, Serialize};

/// Limits applied to document uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Attempts made to claim the next version number before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Maximum number of files accepted in one upload.
    #[serde(default = "default_max_files")]
    pub max_files_per_upload: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            max_files_per_upload: default_max_files(),
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_max_files() -> usize {
    100
}
