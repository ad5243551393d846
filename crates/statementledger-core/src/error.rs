//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Unknown document view name.
    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
