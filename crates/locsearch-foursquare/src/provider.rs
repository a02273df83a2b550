//! Location provider: the host-facing search / get / refresh operations.
//!
//! Each call is independent. The API key is read from the credential store
//! once at the start of a call, one request is issued, and raw places are
//! mapped through [`crate::normalize`]. Places that fail normalization are
//! dropped; backend and credential errors propagate.

use chrono::Utc;
use locsearch_core::{Location, PluginState, StorageStrategy};

use crate::client::{FoursquareClient, PlaceSearchRequest};
use crate::credentials::CredentialStore;
use crate::error::FoursquareError;
use crate::normalize::{normalize_place, NormalizeContext};

/// Languages the places API localizes responses into.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "ja", "th", "tr", "ko", "ru", "pt", "id",
];

pub const DEFAULT_LANGUAGE: &str = "en";

/// Locations updated less than this long ago are returned as-is by
/// [`FoursquareLocationProvider::refresh`].
pub const FRESHNESS_THRESHOLD_MS: i64 = 24 * 60 * 60 * 1000;

/// A long-lived place used to check whether an API key works.
pub const API_KEY_TEST_PLACE_ID: &str = "51a2445e5019c80b56934c75";

/// Every field the normalizer reads, for callers that want to request an
/// explicit field set.
pub const PLACE_FIELDS: &[&str] = &[
    "fsq_place_id",
    "name",
    "latitude",
    "longitude",
    "location",
    "categories",
    "tel",
    "email",
    "website",
    "hours",
    "rating",
];

const SETUP_REQUIRED_MESSAGE: &str = "A Foursquare API key is required";

/// Provider settings that do not change per call.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Language used when the caller asks for none or an unsupported one.
    pub default_language: String,
    /// Field selection sent with every request; `None` sends no `fields`.
    pub fields: Option<Vec<String>>,
    pub attribution_icon_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
            fields: None,
            attribution_icon_url: None,
        }
    }
}

/// A free-text search around the user's position.
#[derive(Debug, Clone, Copy)]
pub struct LocationQuery<'a> {
    pub query: &'a str,
    pub user_latitude: f64,
    pub user_longitude: f64,
    pub search_radius_meters: u32,
}

/// Host-supplied conditions for a search.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams<'a> {
    pub language: Option<&'a str>,
    /// Overrides [`ProviderConfig::fields`] for this call.
    pub fields: Option<&'a [String]>,
    pub allow_network: bool,
}

pub struct FoursquareLocationProvider<S> {
    client: FoursquareClient,
    credentials: S,
    config: ProviderConfig,
}

impl<S: CredentialStore> FoursquareLocationProvider<S> {
    #[must_use]
    pub fn new(client: FoursquareClient, credentials: S, config: ProviderConfig) -> Self {
        Self {
            client,
            credentials,
            config,
        }
    }

    /// The host keeps a durable copy of returned locations.
    #[must_use]
    pub fn storage_strategy(&self) -> StorageStrategy {
        StorageStrategy::StoreCopy
    }

    /// Searches places matching `query` around the user's position.
    ///
    /// Returns an empty list without contacting the API when network access
    /// is not allowed. Results keep the API's order.
    ///
    /// # Errors
    ///
    /// - [`FoursquareError::Credential`] if no API key is configured.
    /// - [`FoursquareError::Unauthorized`] if the key is rejected.
    /// - Any other [`FoursquareError`] from the request.
    pub async fn search(
        &self,
        query: &LocationQuery<'_>,
        params: &SearchParams<'_>,
    ) -> Result<Vec<Location>, FoursquareError> {
        if !params.allow_network {
            tracing::debug!("network not allowed, skipping place search");
            return Ok(Vec::new());
        }

        let api_key = self.require_api_key().await?;
        let language = self.resolve_language(params.language);
        let request = PlaceSearchRequest {
            query: query.query,
            latitude: query.user_latitude,
            longitude: query.user_longitude,
            radius_meters: query.search_radius_meters,
            fields: params.fields.or(self.config.fields.as_deref()),
            language: Some(language),
        };

        let places = self.client.places_search(&request, &api_key).await?;
        let received = places.len();
        let ctx = self.normalize_context(language);
        let locations: Vec<Location> = places
            .into_iter()
            .filter_map(|place| normalize_place(place, &ctx))
            .collect();

        tracing::debug!(
            query = query.query,
            received,
            kept = locations.len(),
            language,
            "place search complete"
        );
        Ok(locations)
    }

    /// Fetches one place by id. `Ok(None)` when it does not exist or cannot
    /// be normalized.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn get(
        &self,
        place_id: &str,
        language: Option<&str>,
    ) -> Result<Option<Location>, FoursquareError> {
        self.get_with_fields(place_id, None, language).await
    }

    /// [`Self::get`] with a field selection overriding
    /// [`ProviderConfig::fields`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn get_with_fields(
        &self,
        place_id: &str,
        fields: Option<&[String]>,
        language: Option<&str>,
    ) -> Result<Option<Location>, FoursquareError> {
        let api_key = self.require_api_key().await?;
        let language = self.resolve_language(language);
        let place = self
            .client
            .place_by_id(
                place_id,
                fields.or(self.config.fields.as_deref()),
                Some(language),
                &api_key,
            )
            .await?;
        let ctx = self.normalize_context(language);
        Ok(place.and_then(|p| normalize_place(p, &ctx)))
    }

    /// Re-fetches `item` unless it was updated within the last day.
    ///
    /// `Ok(None)` tells the host the place is gone and should be dropped.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`]; never fails for a fresh item.
    pub async fn refresh(
        &self,
        item: Location,
        last_updated_ms: i64,
        language: Option<&str>,
    ) -> Result<Option<Location>, FoursquareError> {
        self.refresh_at(item, last_updated_ms, Utc::now().timestamp_millis(), language)
            .await
    }

    /// [`Self::refresh`] with an explicit current time, in epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Same as [`Self::refresh`].
    pub async fn refresh_at(
        &self,
        item: Location,
        last_updated_ms: i64,
        now_ms: i64,
        language: Option<&str>,
    ) -> Result<Option<Location>, FoursquareError> {
        if now_ms.saturating_sub(last_updated_ms) < FRESHNESS_THRESHOLD_MS {
            return Ok(Some(item));
        }
        tracing::debug!(place_id = %item.id, last_updated_ms, "refreshing stale location");
        self.get(&item.id, language).await
    }

    /// `Ready` when an API key is configured, `SetupRequired` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Credential`] if the store cannot be read.
    pub async fn plugin_state(&self) -> Result<PluginState, FoursquareError> {
        Ok(match self.credentials.api_key().await? {
            Some(_) => PluginState::Ready,
            None => PluginState::SetupRequired {
                message: SETUP_REQUIRED_MESSAGE.to_owned(),
            },
        })
    }

    /// Stores a new API key.
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Credential`] if the store rejects the write.
    pub async fn set_api_key(&self, api_key: &str) -> Result<(), FoursquareError> {
        self.credentials.set_api_key(api_key).await
    }

    /// Checks whether `api_key` is accepted by looking up a known place with
    /// it. The stored key is neither used nor changed.
    ///
    /// Returns `Ok(false)` only when the key is rejected.
    ///
    /// # Errors
    ///
    /// Any failure other than a rejected key (network, 5xx, bad body).
    pub async fn test_api_key(&self, api_key: &str) -> Result<bool, FoursquareError> {
        match self
            .client
            .place_by_id(API_KEY_TEST_PLACE_ID, None, None, api_key)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_authentication() => {
                tracing::warn!(error = %e, "API key rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn require_api_key(&self) -> Result<String, FoursquareError> {
        self.credentials
            .api_key()
            .await?
            .ok_or_else(|| FoursquareError::Credential("no API key configured".to_owned()))
    }

    /// Picks the request language: the requested one if the API supports
    /// it, otherwise the configured default.
    fn resolve_language<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(lang) if is_supported_language(lang) => lang,
            _ => &self.config.default_language,
        }
    }

    fn normalize_context<'a>(&'a self, language: &'a str) -> NormalizeContext<'a> {
        NormalizeContext {
            language,
            attribution_icon_url: self.config.attribution_icon_url.as_deref(),
        }
    }
}

/// `true` if the places API can localize into `lang`.
#[must_use]
pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{MemoryCredentialStore, StaticCredential};

    fn provider<S: CredentialStore>(credentials: S) -> FoursquareLocationProvider<S> {
        // Unroutable base URL: any request made by these tests would fail.
        let client = FoursquareClient::with_base_url("http://127.0.0.1:9", 1, "test")
            .expect("client construction should not fail");
        FoursquareLocationProvider::new(client, credentials, ProviderConfig::default())
    }

    fn location(id: &str) -> Location {
        Location {
            id: id.to_owned(),
            label: "Cached".to_owned(),
            address: locsearch_core::Address::default(),
            latitude: 1.0,
            longitude: 2.0,
            phone_number: None,
            website_url: None,
            user_rating: None,
            attribution: locsearch_core::Attribution {
                text: "Foursquare".to_owned(),
                url: format!("https://foursquare.com/v/{id}"),
                icon_url: None,
            },
            icon: None,
            category: None,
            opening_schedule: None,
        }
    }

    #[test]
    fn resolve_language_keeps_supported() {
        let p = provider(StaticCredential::new(None));
        assert_eq!(p.resolve_language(Some("de")), "de");
        assert_eq!(p.resolve_language(Some("id")), "id");
    }

    #[test]
    fn resolve_language_falls_back_to_default() {
        let p = provider(StaticCredential::new(None));
        assert_eq!(p.resolve_language(Some("nl")), "en");
        assert_eq!(p.resolve_language(None), "en");
    }

    #[test]
    fn place_fields_are_unique_and_include_required_fields() {
        let unique: std::collections::HashSet<_> = PLACE_FIELDS.iter().collect();
        assert_eq!(unique.len(), PLACE_FIELDS.len());
        for required in ["fsq_place_id", "name", "latitude", "longitude"] {
            assert!(PLACE_FIELDS.contains(&required), "missing {required}");
        }
    }

    #[test]
    fn reports_store_copy_strategy() {
        let p = provider(StaticCredential::new(None));
        assert_eq!(p.storage_strategy(), StorageStrategy::StoreCopy);
    }

    #[tokio::test]
    async fn search_without_network_returns_empty() {
        let p = provider(StaticCredential::new(Some("key".to_owned())));
        let query = LocationQuery {
            query: "coffee",
            user_latitude: 0.0,
            user_longitude: 0.0,
            search_radius_meters: 1000,
        };
        let params = SearchParams {
            language: None,
            fields: None,
            allow_network: false,
        };
        assert!(p.search(&query, &params).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_without_key_is_credential_error() {
        let p = provider(StaticCredential::new(None));
        let query = LocationQuery {
            query: "coffee",
            user_latitude: 0.0,
            user_longitude: 0.0,
            search_radius_meters: 1000,
        };
        let params = SearchParams {
            language: Some("en"),
            fields: None,
            allow_network: true,
        };
        let err = p.search(&query, &params).await.unwrap_err();
        assert!(matches!(err, FoursquareError::Credential(_)));
    }

    #[tokio::test]
    async fn refresh_of_fresh_item_returns_it_unchanged() {
        let p = provider(StaticCredential::new(None));
        let now = 1_700_000_000_000;
        let one_hour_ago = now - 60 * 60 * 1000;
        let item = location("abc");
        let refreshed = p
            .refresh_at(item.clone(), one_hour_ago, now, None)
            .await
            .unwrap();
        assert_eq!(refreshed, Some(item));
    }

    #[tokio::test]
    async fn plugin_state_tracks_credential() {
        let p = provider(MemoryCredentialStore::new(None));
        assert!(matches!(
            p.plugin_state().await.unwrap(),
            PluginState::SetupRequired { .. }
        ));
        p.set_api_key("fsq3key").await.unwrap();
        assert_eq!(p.plugin_state().await.unwrap(), PluginState::Ready);
    }
}
