//! Persisted user settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default backend for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the document backend.
    pub backend_url: String,
    /// Mailbox address documents are listed for.
    pub user_email: Option<String>,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Upper bound on a single preview fetch, if any.
    pub preview_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            user_email: None,
            request_timeout_secs: 30,
            preview_timeout_secs: None,
        }
    }
}

impl Settings {
    /// Apply command line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, backend_url: Option<String>, user_email: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        if user_email.is_some() {
            self.user_email = user_email;
        }
        self
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Preview fetch timeout, if configured.
    #[must_use]
    pub fn preview_timeout(&self) -> Option<Duration> {
        self.preview_timeout_secs.map(Duration::from_secs)
    }
}

/// Location of the settings file.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("statementledger")
        .join("settings.json")
}

/// Load settings from the default location.
pub async fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(&settings_path()).await
}

/// Load settings from `path`, falling back to defaults if it does not exist.
pub async fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(Settings::default());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Save settings to the default location.
pub async fn save_settings(settings: &Settings) -> anyhow::Result<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path).await?;
    Ok(path)
}

/// Save settings to `path`, creating parent directories.
pub async fn save_settings_to(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!("Settings saved to {:?}", path);
    Ok(())
}
