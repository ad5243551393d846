//! Backend HTTP client.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::endpoint::Endpoints;
use crate::error::{Error, Result};
use statementledger_core::{
    Document, DocumentSource, PreviewBackend, PreviewError, PreviewRequest, UserIdentity,
    parse_listing,
};

/// Detail the backend sends with a 401 when the supplied password was wrong.
pub const PASSWORD_INCORRECT: &str = "PASSWORD_INCORRECT";

/// Client for the document backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    endpoints: Endpoints,
    http_client: Client,
}

impl BackendClient {
    /// Creates a new client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self::with_endpoints(Endpoints::new(base_url)?))
    }

    /// Creates a new client for already resolved endpoints.
    #[must_use]
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            http_client: Client::new(),
        }
    }

    /// Sets a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Resolved endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Lists every PDF attachment known for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not a document listing.
    pub async fn list_documents(&self, user: &UserIdentity) -> Result<Vec<Document>> {
        let response = self
            .http_client
            .get(self.endpoints.list_url(user))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            tracing::warn!(status = status.as_u16(), %detail, "Document listing failed");
            return Err(Error::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let documents = parse_listing(&body)?;
        tracing::info!(%user, count = documents.len(), "Listed documents");
        Ok(documents)
    }

    /// Fetches decrypted preview bytes.
    ///
    /// # Errors
    ///
    /// Returns the [`PreviewError`] matching the backend's answer; see
    /// [`classify_failure`].
    pub async fn fetch_preview(
        &self,
        request: &PreviewRequest,
    ) -> std::result::Result<Bytes, PreviewError> {
        let response = self
            .http_client
            .post(self.endpoints.preview.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| PreviewError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PreviewError::Malformed(e.to_string()))?;

        if status.is_success() {
            tracing::debug!(
                message_id = %request.message_id,
                len = body.len(),
                "Preview fetched"
            );
            Ok(body)
        } else {
            let err = classify_failure(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), %err, "Preview refused");
            Err(err)
        }
    }

    /// Download link for one attachment.
    #[must_use]
    pub fn download_url(&self, user: &UserIdentity, message_id: &str, filename: &str) -> Url {
        self.endpoints.download_url(user, message_id, filename)
    }
}

impl DocumentSource for BackendClient {
    type Error = Error;

    fn list_documents(
        &self,
        user: &UserIdentity,
    ) -> impl Future<Output = Result<Vec<Document>>> + Send {
        Self::list_documents(self, user)
    }
}

impl PreviewBackend for BackendClient {
    fn fetch_preview(
        &self,
        request: &PreviewRequest,
    ) -> impl Future<Output = std::result::Result<Bytes, PreviewError>> + Send {
        Self::fetch_preview(self, request)
    }
}

/// Map a non-success preview response to a [`PreviewError`].
///
/// - `401` with detail `PASSWORD_INCORRECT` is a rejected password
/// - any other `401` is a first-time password prompt
/// - everything else is a server error carrying the body's `detail`
#[must_use]
pub fn classify_failure(status: u16, body: &[u8]) -> PreviewError {
    let detail = error_detail(body);
    if status == 401 {
        if detail.as_deref() == Some(PASSWORD_INCORRECT) {
            PreviewError::AuthIncorrect
        } else {
            PreviewError::AuthRequired
        }
    } else {
        PreviewError::Server { status, detail }
    }
}

/// Error body in the backend's `{"detail": ...}` shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
