//! Preview session state.
//!
//! Each state carries only the payload that is valid in it, so combinations
//! like "ready with an error" cannot be represented.

use crate::Document;

/// State of a preview session.
#[derive(Debug, PartialEq)]
pub enum PreviewState<H> {
    /// No preview open.
    Idle,

    /// A fetch is in flight.
    Loading {
        /// Document being previewed.
        document: Document,
    },

    /// The PDF is encrypted; waiting for the user to enter a password.
    AwaitingPassword {
        /// Document being previewed.
        document: Document,
        /// Set after a rejected attempt; unset on the first prompt.
        error: Option<String>,
    },

    /// Decrypted content is available.
    Ready {
        /// Document being previewed.
        document: Document,
        /// Owned preview content.
        content: H,
    },

    /// The preview could not be loaded.
    Failed {
        /// Document being previewed.
        document: Document,
        /// Explanation for the user.
        error: String,
    },
}

impl<H> Default for PreviewState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H> PreviewState<H> {
    /// Tag of this state without its payload.
    #[must_use]
    pub const fn status(&self) -> PreviewStatus {
        match self {
            Self::Idle => PreviewStatus::Idle,
            Self::Loading { .. } => PreviewStatus::Loading,
            Self::AwaitingPassword { .. } => PreviewStatus::AwaitingPassword,
            Self::Ready { .. } => PreviewStatus::Ready,
            Self::Failed { .. } => PreviewStatus::Failed,
        }
    }

    /// Document being previewed, if any.
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        match self {
            Self::Idle => None,
            Self::Loading { document }
            | Self::AwaitingPassword { document, .. }
            | Self::Ready { document, .. }
            | Self::Failed { document, .. } => Some(document),
        }
    }

    /// User-facing error, if this state carries one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::AwaitingPassword { error, .. } => error.as_deref(),
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Content handle, present only when ready.
    #[must_use]
    pub const fn content(&self) -> Option<&H> {
        match self {
            Self::Ready { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Payload-free view of [`PreviewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewStatus {
    /// No preview open.
    #[default]
    Idle,
    /// Fetching.
    Loading,
    /// Waiting for a password.
    AwaitingPassword,
    /// Content available.
    Ready,
    /// Failed.
    Failed,
}

impl PreviewStatus {
    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::AwaitingPassword => "awaiting password",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PreviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_nothing() {
        let state: PreviewState<()> = PreviewState::default();
        assert_eq!(state.status(), PreviewStatus::Idle);
        assert!(state.document().is_none());
        assert!(state.error_message().is_none());
        assert!(state.content().is_none());
    }

    #[test]
    fn test_payload_accessors() {
        let doc = Document::new("m", "a.pdf", "s");

        let awaiting: PreviewState<()> = PreviewState::AwaitingPassword {
            document: doc.clone(),
            error: None,
        };
        assert_eq!(awaiting.error_message(), None);
        assert_eq!(awaiting.document(), Some(&doc));

        let failed: PreviewState<()> = PreviewState::Failed {
            document: doc.clone(),
            error: "boom".to_string(),
        };
        assert_eq!(failed.error_message(), Some("boom"));

        let ready = PreviewState::Ready {
            document: doc,
            content: 7_u8,
        };
        assert_eq!(ready.content(), Some(&7));
        assert_eq!(ready.error_message(), None);
    }
}
