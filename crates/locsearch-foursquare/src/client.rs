//! HTTP client for the Foursquare places API.
//!
//! Wraps `reqwest` with places-specific status handling and typed response
//! deserialization. The API key is passed to every call rather than stored,
//! so a key changed between calls is picked up on the next one.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};

use crate::error::FoursquareError;
use crate::types::{PlaceSearchResponse, RawPlace};

pub const DEFAULT_BASE_URL: &str = "https://places-api.foursquare.com/";

const API_VERSION_HEADER: &str = "X-Places-Api-Version";

/// Parameters of one `places/search` call.
#[derive(Debug, Clone, Copy)]
pub struct PlaceSearchRequest<'a> {
    pub query: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
    /// Response fields to request; `None` lets the API pick its defaults.
    pub fields: Option<&'a [String]>,
    pub language: Option<&'a str>,
}

/// Client for the places REST API.
///
/// Use [`FoursquareClient::new`] for production or
/// [`FoursquareClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct FoursquareClient {
    client: Client,
    base_url: Url,
    api_version: Option<String>,
}

impl FoursquareClient {
    /// Creates a client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FoursquareError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FoursquareError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FoursquareError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so path segments append instead of
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised)
            .map_err(|e| FoursquareError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(FoursquareError::InvalidBaseUrl(format!(
                "'{base_url}' cannot be used as a base"
            )));
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_version: None,
        })
    }

    /// Sends `X-Places-Api-Version: <version>` with every request.
    #[must_use]
    pub fn with_api_version(mut self, version: Option<String>) -> Self {
        self.api_version = version;
        self
    }

    /// Searches places around a point.
    ///
    /// A response without a `results` array yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`FoursquareError::Unauthorized`] on HTTP 401.
    /// - [`FoursquareError::Api`] on any other non-2xx status.
    /// - [`FoursquareError::Http`] on network failure.
    /// - [`FoursquareError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn places_search(
        &self,
        request: &PlaceSearchRequest<'_>,
        api_key: &str,
    ) -> Result<Vec<RawPlace>, FoursquareError> {
        let ll = format!("{},{}", request.latitude, request.longitude);
        let radius = request.radius_meters.to_string();
        let fields = request.fields.map(|f| f.join(","));

        let mut query = vec![
            ("query", request.query),
            ("ll", ll.as_str()),
            ("radius", radius.as_str()),
        ];
        if let Some(fields) = fields.as_deref() {
            query.push(("fields", fields));
        }

        let url = self.build_url(&["places", "search"], &query);
        let (status, body) = self.get(&url, api_key, request.language).await?;
        if !status.is_success() {
            return Err(FoursquareError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PlaceSearchResponse =
            serde_json::from_str(&body).map_err(|e| FoursquareError::Deserialize {
                context: format!("places/search(query={})", request.query),
                source: e,
            })?;
        Ok(parsed.results.unwrap_or_default())
    }

    /// Fetches a single place by id. Returns `Ok(None)` when the API answers
    /// 404 or a `null` body.
    ///
    /// # Errors
    ///
    /// - [`FoursquareError::Unauthorized`] on HTTP 401.
    /// - [`FoursquareError::Api`] on any other non-2xx status except 404.
    /// - [`FoursquareError::Http`] on network failure.
    /// - [`FoursquareError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn place_by_id(
        &self,
        place_id: &str,
        fields: Option<&[String]>,
        language: Option<&str>,
        api_key: &str,
    ) -> Result<Option<RawPlace>, FoursquareError> {
        let fields = fields.map(|f| f.join(","));
        let mut query = Vec::new();
        if let Some(fields) = fields.as_deref() {
            query.push(("fields", fields));
        }

        let url = self.build_url(&["places", place_id], &query);
        let (status, body) = self.get(&url, api_key, language).await?;
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(place_id, "place not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FoursquareError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<Option<RawPlace>>(&body).map_err(|e| FoursquareError::Deserialize {
            context: format!("places/{place_id}"),
            source: e,
        })
    }

    /// Builds a request URL from path segments and query pairs.
    ///
    /// Segments and values are percent-encoded by [`Url`], so ids and free
    /// text are safe to pass through unchanged.
    fn build_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request and returns the status with the body text.
    ///
    /// HTTP 401 is turned into [`FoursquareError::Unauthorized`] here; every
    /// other status is left to the caller.
    async fn get(
        &self,
        url: &Url,
        api_key: &str,
        language: Option<&str>,
    ) -> Result<(StatusCode, String), FoursquareError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, api_key)
            .header(ACCEPT, "application/json");
        if let Some(language) = language {
            request = request.header(ACCEPT_LANGUAGE, language);
        }
        if let Some(version) = &self.api_version {
            request = request.header(API_VERSION_HEADER, version);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(FoursquareError::Unauthorized { body });
        }
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            tracing::warn!(path = url.path(), status = status.as_u16(), "places API returned an error");
        }
        Ok((status, body))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
