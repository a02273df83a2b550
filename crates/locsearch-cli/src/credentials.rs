//! Credential source selection for the CLI.

use locsearch_core::AppConfig;
use locsearch_foursquare::{CredentialStore, FileCredentialStore, FoursquareError, StaticCredential};

/// `FSQ_API_KEY` wins when set; otherwise the key lives in the credential
/// file and can be changed with `set-key`.
#[derive(Debug)]
pub(crate) enum CliCredentials {
    Env(StaticCredential),
    File(FileCredentialStore),
}

impl CliCredentials {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        match &config.api_key {
            Some(key) => {
                tracing::debug!("using API key from FSQ_API_KEY");
                Self::Env(StaticCredential::new(Some(key.clone())))
            }
            None => {
                tracing::debug!(path = %config.credentials_path.display(), "using credential file");
                Self::File(FileCredentialStore::new(config.credentials_path.clone()))
            }
        }
    }
}

impl CredentialStore for CliCredentials {
    async fn api_key(&self) -> Result<Option<String>, FoursquareError> {
        match self {
            Self::Env(store) => store.api_key().await,
            Self::File(store) => store.api_key().await,
        }
    }

    async fn set_api_key(&self, api_key: &str) -> Result<(), FoursquareError> {
        match self {
            Self::Env(store) => store.set_api_key(api_key).await,
            Self::File(store) => store.set_api_key(api_key).await,
        }
    }
}
