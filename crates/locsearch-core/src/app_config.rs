use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Credential override. When unset, the credential file is consulted.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Sent as `X-Places-Api-Version` when set.
    pub api_version: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub credentials_path: PathBuf,
    pub language: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("credentials_path", &self.credentials_path)
            .field("language", &self.language)
            .field("log_level", &self.log_level)
            .finish()
    }
}
