//! Error types for the autotriage tool
//!
//! The classifier itself is total over its input domain and never fails;
//! these errors cover the configuration, payload, and I/O boundaries
//! around it.

use thiserror::Error;

/// Main error type for the triage tool
#[derive(Error, Debug)]
pub enum TriageError {
    /// Request payload did not match the documented JSON shape
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// A fault category violated a construction invariant
    #[error("Invalid fault category '{name}': {reason}")]
    InvalidCategory { name: String, reason: String },

    /// A tuning override referenced a category that does not exist
    #[error("Unknown fault category: {0}")]
    UnknownCategory(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Triage error: {0}")]
    Generic(String),
}

/// Result type alias for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Convert anyhow errors to TriageError
impl From<anyhow::Error> for TriageError {
    fn from(err: anyhow::Error) -> Self {
        TriageError::Generic(err.to_string())
    }
}
