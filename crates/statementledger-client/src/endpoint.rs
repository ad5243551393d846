//! Backend endpoint configuration.

use crate::error::{Error, Result};
use statementledger_core::UserIdentity;
use url::Url;

/// Resolved endpoint URLs for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL every endpoint is relative to.
    pub base_url: Url,
    /// Document listing endpoint.
    pub list_pdfs: Url,
    /// Preview endpoint.
    pub preview: Url,
    /// Download endpoint.
    pub download: Url,
}

impl Endpoints {
    /// Resolve endpoints under `base_url`.
    ///
    /// A base with a path prefix (`https://host/api`) keeps the prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry paths.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            list_pdfs: base_url.join("gmail/list-pdfs")?,
            preview: base_url.join("gmail/preview")?,
            download: base_url.join("gmail/download")?,
            base_url,
        })
    }

    /// Local development backend on port 8000.
    ///
    /// # Errors
    ///
    /// Returns an error if URL parsing fails.
    pub fn localhost() -> Result<Self> {
        Self::new("http://localhost:8000")
    }

    /// Listing URL for `user`.
    #[must_use]
    pub fn list_url(&self, user: &UserIdentity) -> Url {
        let mut url = self.list_pdfs.clone();
        url.query_pairs_mut().append_pair("user_email", user.email());
        url
    }

    /// Download link for one attachment.
    ///
    /// Pure construction; the backend is not contacted.
    #[must_use]
    pub fn download_url(&self, user: &UserIdentity, message_id: &str, filename: &str) -> Url {
        let mut url = self.download.clone();
        url.query_pairs_mut()
            .append_pair("user_email", user.email())
            .append_pair("message_id", message_id)
            .append_pair("filename", filename);
        url
    }
}
