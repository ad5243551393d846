//! Boundaries to the document backend.
//!
//! The core never talks HTTP itself. Listing and preview retrieval are
//! expressed as traits so the dashboard can run against the real backend
//! client or an in-process fake.

use std::future::Future;

use bytes::Bytes;
use serde::Serialize;

use crate::Document;
use crate::format::username_from_email;
use crate::preview::PreviewError;

/// The authenticated user, identified by email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Create an identity from an email address.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.0
    }

    /// Short name for greetings.
    #[must_use]
    pub fn username(&self) -> String {
        username_from_email(Some(&self.0))
    }
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a preview request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRequest {
    /// Owner of the document.
    pub user_email: String,
    /// Source message identifier.
    pub message_id: String,
    /// Attachment filename.
    pub filename: String,
    /// Password to decrypt the PDF with; omitted when not supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PreviewRequest {
    /// Build a request for `document`.
    ///
    /// An empty password is treated as no password.
    #[must_use]
    pub fn new(user: &UserIdentity, document: &Document, password: Option<&str>) -> Self {
        Self {
            user_email: user.email().to_string(),
            message_id: document.message_id.clone(),
            filename: document.filename.clone(),
            password: password.filter(|p| !p.is_empty()).map(ToString::to_string),
        }
    }

    /// Whether a password accompanies this request.
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password.is_some()
    }
}

/// Source of the user's documents.
pub trait DocumentSource {
    /// Error returned when listing fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List every document known for `user`, in backend order.
    fn list_documents(
        &self,
        user: &UserIdentity,
    ) -> impl Future<Output = Result<Vec<Document>, Self::Error>> + Send;
}

/// Retrieves decrypted preview bytes for a document.
pub trait PreviewBackend {
    /// Fetch the preview described by `request`.
    ///
    /// Password prompts come back as [`PreviewError::AuthRequired`] or
    /// [`PreviewError::AuthIncorrect`].
    fn fetch_preview(
        &self,
        request: &PreviewRequest,
    ) -> impl Future<Output = Result<Bytes, PreviewError>> + Send;
}
