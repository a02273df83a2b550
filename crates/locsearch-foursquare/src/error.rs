use thiserror::Error;

/// Errors returned by the places API client and the location provider.
#[derive(Debug, Error)]
pub enum FoursquareError {
    /// HTTP 401: the API key was rejected.
    #[error("unauthorized, invalid API key? body: {body}")]
    Unauthorized { body: String },

    /// Any other non-2xx response.
    #[error("places API error: status {status}; body: {body}")]
    Api { status: u16, body: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The credential store failed, or holds no key.
    #[error("credential error: {0}")]
    Credential(String),
}

impl FoursquareError {
    /// `true` when the backend rejected the credential, as opposed to any
    /// transient or API-side failure.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, FoursquareError::Unauthorized { .. })
    }
}
