//! The preview session state machine.

use bytes::Bytes;

use super::content::{ContentStore, MemoryStore};
use super::error::{INCORRECT_PASSWORD_MESSAGE, PreviewError};
use super::state::{PreviewState, PreviewStatus};
use crate::{Document, PreviewRequest, UserIdentity};

/// A fetch the caller must perform on behalf of the session.
///
/// The outcome is handed back to [`PreviewSession::resolve`] together with
/// the ticket's generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    document: Document,
    password: Option<String>,
}

impl FetchTicket {
    /// Session generation this fetch belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Document to fetch.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Password to send, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Build the backend request for `user`.
    #[must_use]
    pub fn request(&self, user: &UserIdentity) -> PreviewRequest {
        PreviewRequest::new(user, &self.document, self.password())
    }
}

/// What [`PreviewSession::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied; the session is now in this state.
    Applied(PreviewStatus),
    /// The outcome belonged to a superseded fetch and was dropped.
    Stale,
}

/// One preview interaction.
///
/// Holds at most one content handle, released before it is replaced, when
/// the session is closed, and when the session is dropped.
pub struct PreviewSession<S: ContentStore = MemoryStore> {
    store: S,
    state: PreviewState<S::Handle>,
    generation: u64,
}

impl<S: ContentStore> std::fmt::Debug for PreviewSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSession")
            .field("status", &self.status())
            .field("document", &self.document().map(Document::key))
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Default for PreviewSession<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::default())
    }
}

impl<S: ContentStore> PreviewSession<S> {
    /// Create an idle session backed by `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            state: PreviewState::Idle,
            generation: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &PreviewState<S::Handle> {
        &self.state
    }

    /// Current state tag.
    #[must_use]
    pub const fn status(&self) -> PreviewStatus {
        self.state.status()
    }

    /// Generation of the most recently issued fetch.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Content store backing this session.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Document being previewed, if any.
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        self.state.document()
    }

    /// User-facing error, if the current state carries one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Content handle, present only when ready.
    #[must_use]
    pub const fn content(&self) -> Option<&S::Handle> {
        self.state.content()
    }

    /// Start previewing `document` without a password.
    ///
    /// Valid from any state. Supersedes any fetch still in flight.
    pub fn open(&mut self, document: Document) -> FetchTicket {
        self.reset();
        self.issue(document, None)
    }

    /// Retry the current document with `password`.
    ///
    /// Returns `None` and leaves the session untouched unless it is
    /// awaiting a password.
    pub fn submit_password(&mut self, password: &str) -> Option<FetchTicket> {
        let PreviewState::AwaitingPassword { document, .. } = &self.state else {
            tracing::debug!(status = %self.status(), "Ignoring password outside of prompt");
            return None;
        };
        let document = document.clone();
        Some(self.issue(document, Some(password.to_string())))
    }

    /// Apply the outcome of the fetch issued under `generation`.
    ///
    /// Outcomes from superseded fetches, or arriving after the session left
    /// `Loading`, are dropped.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<Bytes, PreviewError>,
    ) -> Resolution {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "Discarding stale preview response"
            );
            return Resolution::Stale;
        }

        let document = match std::mem::take(&mut self.state) {
            PreviewState::Loading { document } => document,
            other => {
                tracing::debug!(generation, status = %other.status(), "Discarding late preview response");
                self.state = other;
                return Resolution::Stale;
            }
        };

        self.state = match outcome {
            Ok(bytes) => {
                tracing::info!(key = %document.key(), len = bytes.len(), "Preview ready");
                let content = self.store.install(bytes);
                PreviewState::Ready { document, content }
            }
            Err(PreviewError::AuthRequired) => PreviewState::AwaitingPassword {
                document,
                error: None,
            },
            Err(PreviewError::AuthIncorrect) => PreviewState::AwaitingPassword {
                document,
                error: Some(INCORRECT_PASSWORD_MESSAGE.to_string()),
            },
            Err(err) => {
                tracing::warn!(key = %document.key(), %err, "Preview failed");
                PreviewState::Failed {
                    document,
                    error: err.user_message(),
                }
            }
        };

        tracing::debug!(generation, status = %self.status(), "Preview resolved");
        Resolution::Applied(self.status())
    }

    /// Close the preview, releasing any held content.
    pub fn close(&mut self) {
        if self.reset().is_some() {
            tracing::debug!(generation = self.generation, "Preview closed");
        }
    }

    fn issue(&mut self, document: Document, password: Option<String>) -> FetchTicket {
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            key = %document.key(),
            with_password = password.is_some(),
            "Issuing preview fetch"
        );
        self.state = PreviewState::Loading {
            document: document.clone(),
        };
        FetchTicket {
            generation: self.generation,
            document,
            password,
        }
    }

    /// Return to `Idle`, releasing the content handle if one is held.
    fn reset(&mut self) -> Option<Document> {
        match std::mem::take(&mut self.state) {
            PreviewState::Idle => None,
            PreviewState::Ready { document, content } => {
                self.store.release(content);
                Some(document)
            }
            PreviewState::Loading { document }
            | PreviewState::AwaitingPassword { document, .. }
            | PreviewState::Failed { document, .. } => Some(document),
        }
    }
}

impl<S: ContentStore> Drop for PreviewSession<S> {
    fn drop(&mut self) {
        self.reset();
    }
}
