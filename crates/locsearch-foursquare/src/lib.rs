//! Foursquare places backend for location search.
//!
//! [`FoursquareClient`] talks to the places REST API, [`normalize`] turns raw
//! places into [`locsearch_core::Location`] values, and
//! [`FoursquareLocationProvider`] ties both to a [`CredentialStore`] to offer
//! search, lookup and refresh.

pub mod categories;
pub mod client;
pub mod credentials;
pub mod error;
pub mod hours;
pub mod normalize;
pub mod provider;
pub mod types;

pub use categories::{classify_category, icon_for_category_id, icon_for_legacy_code};
pub use client::{FoursquareClient, PlaceSearchRequest, DEFAULT_BASE_URL};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StaticCredential};
pub use error::FoursquareError;
pub use normalize::{normalize_place, NormalizeContext};
pub use provider::{
    FoursquareLocationProvider, LocationQuery, ProviderConfig, SearchParams, PLACE_FIELDS,
    SUPPORTED_LANGUAGES,
};
pub use types::{RawCategory, RawPlace};
