//! Error types for Spiretide core operations.

use thiserror::Error;

/// Failures while loading or saving the persisted settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Filesystem access failed
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file held something that is not valid settings JSON
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
