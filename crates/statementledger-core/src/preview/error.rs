//! Preview retrieval failures.

/// Message shown when a submitted password is rejected.
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password. Please try again.";

/// Message shown when a failure carries no usable detail.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load preview";

/// Ways a preview fetch can end without content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// No response was obtained (connection, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The PDF is encrypted and no password was given.
    #[error("Password required")]
    AuthRequired,

    /// The supplied password was rejected.
    #[error("Password incorrect")]
    AuthIncorrect,

    /// The backend answered with a non-success status.
    #[error("Server error ({status})")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Detail text from the response body, if any.
        detail: Option<String>,
    },

    /// The response could not be read.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl PreviewError {
    /// Whether this outcome asks the user for a password.
    #[must_use]
    pub const fn is_password_prompt(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::AuthIncorrect)
    }

    /// Text to show next to the preview surface.
    ///
    /// Server detail and transport diagnostics are shown verbatim; empty
    /// text falls back to [`DEFAULT_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        let text = match self {
            Self::AuthRequired => return String::new(),
            Self::AuthIncorrect => return INCORRECT_PASSWORD_MESSAGE.to_string(),
            Self::Server { detail, .. } => detail.as_deref().unwrap_or_default(),
            Self::Transport(text) | Self::Malformed(text) => text.as_str(),
        };

        if text.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            text.to_string()
        }
    }
}
