//! Drives a [`PreviewSession`] against a [`PreviewBackend`].
//!
//! The session lock is held only while a fetch is issued or resolved, never
//! across the network await, so a newer `open` can start while an older
//! fetch is still in flight. The generation check sorts out the rest.

use std::time::Duration;

use tokio::sync::Mutex;

use super::content::{ContentStore, MemoryStore};
use super::error::PreviewError;
use super::session::{FetchTicket, PreviewSession, Resolution};
use super::state::PreviewStatus;
use crate::{Document, PreviewBackend, UserIdentity};

/// Diagnostic used when a preview fetch exceeds the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "Preview request timed out";

/// Preview surface bound to one user and one backend.
pub struct PreviewController<B, S: ContentStore = MemoryStore> {
    backend: B,
    user: UserIdentity,
    session: Mutex<PreviewSession<S>>,
    timeout: Option<Duration>,
}

impl<B: PreviewBackend, S: ContentStore> PreviewController<B, S> {
    /// Creates a new controller with an idle session.
    #[must_use]
    pub fn new(backend: B, user: UserIdentity, store: S) -> Self {
        Self {
            backend,
            user,
            session: Mutex::new(PreviewSession::new(store)),
            timeout: None,
        }
    }

    /// Fail fetches that take longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The user previews are requested for.
    #[must_use]
    pub const fn user(&self) -> &UserIdentity {
        &self.user
    }

    /// Open `document` and wait for its first response.
    ///
    /// Returns [`Resolution::Stale`] if another `open` superseded this one
    /// before the response arrived.
    pub async fn open(&self, document: Document) -> Resolution {
        let ticket = self.session.lock().await.open(document);
        self.complete(ticket).await
    }

    /// Retry the current document with `password`.
    ///
    /// Returns `None` if the session is not awaiting a password.
    pub async fn submit_password(&self, password: &str) -> Option<Resolution> {
        let ticket = self.session.lock().await.submit_password(password)?;
        Some(self.complete(ticket).await)
    }

    /// Close the preview and release its content.
    pub async fn close(&self) {
        self.session.lock().await.close();
    }

    /// Current state tag.
    pub async fn status(&self) -> PreviewStatus {
        self.session.lock().await.status()
    }

    /// Run `f` against the session under its lock.
    pub async fn inspect<R>(&self, f: impl FnOnce(&PreviewSession<S>) -> R) -> R {
        let session = self.session.lock().await;
        f(&session)
    }

    async fn complete(&self, ticket: FetchTicket) -> Resolution {
        let request = ticket.request(&self.user);
        let fetch = self.backend.fetch_preview(&request);

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fetch).await.unwrap_or_else(|_| {
                tracing::warn!(generation = ticket.generation(), ?limit, "Preview fetch timed out");
                Err(PreviewError::Transport(TIMEOUT_MESSAGE.to_string()))
            }),
            None => fetch.await,
        };

        self.session
            .lock()
            .await
            .resolve(ticket.generation(), outcome)
    }
}
