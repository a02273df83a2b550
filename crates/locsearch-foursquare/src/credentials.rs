//! API key storage.
//!
//! The provider reads the key through a [`CredentialStore`] at the start of
//! every operation and never keeps it afterwards, so a key updated through
//! the settings flow takes effect on the next call.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::FoursquareError;

/// Current-value store for the API key.
///
/// A missing or blank key is a valid state meaning "not configured".
pub trait CredentialStore: Send + Sync {
    /// Reads the current key.
    fn api_key(&self) -> impl Future<Output = Result<Option<String>, FoursquareError>> + Send;

    /// Replaces the stored key.
    fn set_api_key(&self, api_key: &str)
        -> impl Future<Output = Result<(), FoursquareError>> + Send;
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Fixed key, e.g. from an environment variable. Cannot be updated.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential {
    api_key: Option<String>,
}

impl StaticCredential {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: non_blank(api_key),
        }
    }
}

impl CredentialStore for StaticCredential {
    async fn api_key(&self) -> Result<Option<String>, FoursquareError> {
        Ok(self.api_key.clone())
    }

    async fn set_api_key(&self, _api_key: &str) -> Result<(), FoursquareError> {
        Err(FoursquareError::Credential(
            "API key is fixed by configuration and cannot be changed".to_owned(),
        ))
    }
}

/// In-process store, updatable at runtime.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    api_key: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: RwLock::new(non_blank(api_key)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, FoursquareError> {
        Ok(self.api_key.read().await.clone())
    }

    async fn set_api_key(&self, api_key: &str) -> Result<(), FoursquareError> {
        *self.api_key.write().await = non_blank(Some(api_key.to_owned()));
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    api_key: Option<String>,
}

/// JSON file store: `{ "api_key": "..." }`.
///
/// The file is re-read on every call. A missing file means no key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &str, e: &std::io::Error) -> FoursquareError {
        FoursquareError::Credential(format!("{action} {}: {e}", self.path.display()))
    }
}

impl CredentialStore for FileCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, FoursquareError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error("failed to read", &e)),
        };
        let file: CredentialFile = serde_json::from_str(&raw).map_err(|e| {
            FoursquareError::Credential(format!(
                "malformed credential file {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(non_blank(file.api_key))
    }

    async fn set_api_key(&self, api_key: &str) -> Result<(), FoursquareError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("failed to create directory for", &e))?;
        }

        let contents = serde_json::to_string_pretty(&CredentialFile {
            api_key: non_blank(Some(api_key.to_owned())),
        })
        .map_err(|e| FoursquareError::Credential(format!("failed to encode credential: {e}")))?;

        // Write then rename so a concurrent reader never sees a partial file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| self.io_error("failed to write", &e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error("failed to replace", &e))?;

        tracing::info!(path = %self.path.display(), "stored API key");
        Ok(())
    }
}
