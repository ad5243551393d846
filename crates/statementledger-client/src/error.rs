//! Error types for backend operations.

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Backend client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] statementledger_core::Error),

    /// Backend answered with a non-success status.
    #[error("Backend error ({status}): {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Detail text from the response, or the status reason.
        detail: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// URL parsing error.
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}
