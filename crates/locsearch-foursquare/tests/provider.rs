//! End-to-end tests for `FoursquareLocationProvider` against a mock API.

use chrono::{TimeDelta, Weekday};
use locsearch_core::{Location, LocationIcon, PluginState, StorageStrategy};
use locsearch_foursquare::credentials::CredentialStore;
use locsearch_foursquare::provider::API_KEY_TEST_PLACE_ID;
use locsearch_foursquare::{
    FoursquareClient, FoursquareError, FoursquareLocationProvider, LocationQuery,
    MemoryCredentialStore, ProviderConfig, SearchParams, StaticCredential,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOW_MS: i64 = 1_750_000_000_000;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn provider_with<S: CredentialStore>(
    server: &MockServer,
    credentials: S,
    config: ProviderConfig,
) -> FoursquareLocationProvider<S> {
    let client = FoursquareClient::with_base_url(&server.uri(), 30, "locsearch-test/0.1")
        .expect("client construction should not fail");
    FoursquareLocationProvider::new(client, credentials, config)
}

fn provider(server: &MockServer) -> FoursquareLocationProvider<StaticCredential> {
    provider_with(
        server,
        StaticCredential::new(Some("fsq3-key".to_owned())),
        ProviderConfig::default(),
    )
}

fn coffee_query() -> LocationQuery<'static> {
    LocationQuery {
        query: "burger",
        user_latitude: 40.7128,
        user_longitude: -74.006,
        search_radius_meters: 2000,
    }
}

fn online(language: Option<&str>) -> SearchParams<'_> {
    SearchParams {
        language,
        fields: None,
        allow_network: true,
    }
}

fn burger_place() -> serde_json::Value {
    serde_json::json!({
        "fsq_place_id": "5a1b2c",
        "name": "Corner Burger",
        "latitude": 40.713,
        "longitude": -74.005,
        "location": {
            "address": "1 Main St",
            "formatted_address": "1 Main St, New York, NY 10001",
            "locality": "New York",
            "region": "NY",
            "postcode": "10001",
            "country": "US"
        },
        "categories": [
            { "fsq_category_id": "4bf58dd8d48988d16c941735", "name": "Burger Joint" },
            { "fsq_category_id": "4bf58dd8d48988d1ca941735", "name": "Pizzeria" }
        ],
        "tel": "(212) 555-0100",
        "website": "https://cornerburger.example",
        "rating": 85,
        "hours": {
            "regular": [
                { "day": 1, "open": "0900", "close": "1700" },
                { "day": 5, "open": "2200", "close": "+0200" }
            ]
        }
    })
}

fn cached_location(id: &str) -> Location {
    Location {
        id: id.to_owned(),
        label: "Old Name".to_owned(),
        address: locsearch_core::Address::default(),
        latitude: 0.0,
        longitude: 0.0,
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

#[tokio::test]
async fn search_normalizes_results_in_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": [
            burger_place(),
            { "fsq_place_id": "no-coords", "name": "Nowhere" },
            { "fsq_place_id": "p2", "name": "Second", "latitude": 40.0, "longitude": -74.0 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("query", "burger"))
        .and(query_param("radius", "2000"))
        .and(header("Authorization", "fsq3-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let results = provider(&server)
        .search(&coffee_query(), &online(Some("en")))
        .await
        .expect("search should succeed");

    assert_eq!(results.len(), 2, "place without coordinates is dropped");
    let first = &results[0];
    assert_eq!(first.id, "5a1b2c");
    assert_eq!(first.label, "Corner Burger");
    assert_eq!(first.icon, Some(LocationIcon::Burger));
    assert_eq!(first.category.as_deref(), Some("Burger Joint"));
    assert_eq!(first.user_rating, Some(8.5));
    assert_eq!(first.phone_number.as_deref(), Some("(212) 555-0100"));
    assert_eq!(first.address.city.as_deref(), Some("New York"));
    assert_eq!(first.address.state.as_deref(), Some("NY"));
    assert_eq!(first.attribution.url, "https://foursquare.com/v/5a1b2c");

    let schedule = first.opening_schedule.as_ref().expect("hours should decode");
    assert_eq!(schedule.opening_hours.len(), 2);
    assert_eq!(schedule.opening_hours[0].day_of_week, Weekday::Mon);
    assert_eq!(schedule.opening_hours[0].duration, TimeDelta::hours(8));
    assert_eq!(schedule.opening_hours[1].day_of_week, Weekday::Fri);
    assert_eq!(schedule.opening_hours[1].duration, TimeDelta::hours(4));

    assert_eq!(results[1].id, "p2");
}

#[tokio::test]
async fn search_drops_place_with_partial_geocode_and_keeps_neighbours() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": [
            { "fsq_place_id": "good", "name": "Good", "latitude": 1.0, "longitude": 2.0 },
            { "fsq_id": "bad", "name": "Bad", "geocodes": { "main": { "latitude": 1.0 } } },
            { "fsq_id": "nulled", "name": "Nulled",
              "geocodes": { "main": { "latitude": null, "longitude": 3.0 } } },
            { "fsq_id": "legacy", "name": "Legacy",
              "geocodes": { "main": { "latitude": 5.0, "longitude": 6.0 } } }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let results = provider(&server)
        .search(&coffee_query(), &online(None))
        .await
        .expect("one malformed place must not fail the search");

    let ids: Vec<&str> = results.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["good", "legacy"]);
}

#[tokio::test]
async fn search_offline_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let params = SearchParams {
        language: Some("en"),
        fields: None,
        allow_network: false,
    };
    let results = provider(&server)
        .search(&coffee_query(), &params)
        .await
        .expect("offline search should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_falls_back_to_default_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("Accept-Language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server)
        .search(&coffee_query(), &online(Some("nl")))
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn search_forwards_supported_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("Accept-Language", "ja"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server)
        .search(&coffee_query(), &online(Some("ja")))
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn search_sends_configured_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("fields", "fsq_place_id,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        fields: Some(vec!["fsq_place_id".to_owned(), "name".to_owned()]),
        ..ProviderConfig::default()
    };
    provider_with(&server, StaticCredential::new(Some("k".to_owned())), config)
        .search(&coffee_query(), &online(None))
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn per_call_fields_override_configured_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("fields", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/places/abc"))
        .and(query_param("fields", "name"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        fields: Some(vec!["fsq_place_id".to_owned()]),
        ..ProviderConfig::default()
    };
    let p = provider_with(&server, StaticCredential::new(Some("k".to_owned())), config);
    let fields = vec!["name".to_owned()];
    let params = SearchParams {
        language: None,
        fields: Some(fields.as_slice()),
        allow_network: true,
    };
    p.search(&coffee_query(), &params)
        .await
        .expect("search should succeed");
    let location = p
        .get_with_fields("abc", Some(fields.as_slice()), None)
        .await
        .expect("404 is not an error");
    assert!(location.is_none());
}

#[tokio::test]
async fn search_rejected_key_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .search(&coffee_query(), &online(None))
        .await
        .expect_err("401 should fail the search");
    assert!(err.is_authentication());
}

#[tokio::test]
async fn search_server_error_is_not_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .search(&coffee_query(), &online(None))
        .await
        .expect_err("503 should fail the search");
    assert!(matches!(err, FoursquareError::Api { status: 503, .. }), "got: {err:?}");
}

#[tokio::test]
async fn search_without_key_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_with(&server, StaticCredential::new(None), ProviderConfig::default())
        .search(&coffee_query(), &online(None))
        .await
        .expect_err("missing key should fail");
    assert!(matches!(err, FoursquareError::Credential(_)));
}

#[tokio::test]
async fn get_returns_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/5a1b2c"))
        .and(header("Accept-Language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(burger_place()))
        .mount(&server)
        .await;

    let location = provider(&server)
        .get("5a1b2c", Some("fr"))
        .await
        .expect("get should succeed")
        .expect("place should be present");
    assert_eq!(location.label, "Corner Burger");
    assert_eq!(location.latitude, 40.713);
}

#[tokio::test]
async fn get_missing_place_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let location = provider(&server)
        .get("unknown", None)
        .await
        .expect("404 is not an error");
    assert!(location.is_none());
}

#[tokio::test]
async fn refresh_fresh_item_skips_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let item = cached_location("5a1b2c");
    let refreshed = provider(&server)
        .refresh_at(item.clone(), NOW_MS - DAY_MS + 1, NOW_MS, None)
        .await
        .expect("fresh refresh should succeed");
    assert_eq!(refreshed, Some(item));
}

#[tokio::test]
async fn refresh_stale_item_refetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/5a1b2c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(burger_place()))
        .expect(1)
        .mount(&server)
        .await;

    let refreshed = provider(&server)
        .refresh_at(cached_location("5a1b2c"), NOW_MS - DAY_MS, NOW_MS, None)
        .await
        .expect("stale refresh should succeed")
        .expect("place still exists");
    assert_eq!(refreshed.label, "Corner Burger");
}

#[tokio::test]
async fn refresh_of_deleted_place_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/5a1b2c"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let refreshed = provider(&server)
        .refresh_at(cached_location("5a1b2c"), NOW_MS - 2 * DAY_MS, NOW_MS, None)
        .await
        .expect("404 is not an error");
    assert!(refreshed.is_none());
}

#[tokio::test]
async fn key_update_applies_to_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("Authorization", "second-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let p = provider_with(
        &server,
        MemoryCredentialStore::new(Some("first-key".to_owned())),
        ProviderConfig::default(),
    );
    p.set_api_key("second-key").await.expect("set should succeed");
    p.search(&coffee_query(), &online(None))
        .await
        .expect("search with updated key should succeed");
}

#[tokio::test]
async fn test_api_key_accepts_valid_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/places/{API_KEY_TEST_PLACE_ID}")))
        .and(header("Authorization", "candidate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fsq_place_id": API_KEY_TEST_PLACE_ID,
            "name": "Test Place"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let p = provider_with(&server, MemoryCredentialStore::new(None), ProviderConfig::default());
    assert!(p.test_api_key("candidate").await.expect("self-test should run"));
    assert!(
        matches!(p.plugin_state().await.unwrap(), PluginState::SetupRequired { .. }),
        "testing a key must not store it"
    );
}

#[tokio::test]
async fn test_api_key_rejected_key_is_false() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(!provider(&server)
        .test_api_key("wrong")
        .await
        .expect("401 is reported as false"));
}

#[tokio::test]
async fn test_api_key_server_error_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = provider(&server)
        .test_api_key("whatever")
        .await
        .expect_err("500 is not a verdict on the key");
    assert!(!err.is_authentication());
}

#[tokio::test]
async fn plugin_state_and_storage_strategy() {
    let server = MockServer::start().await;

    assert_eq!(provider(&server).plugin_state().await.unwrap(), PluginState::Ready);
    assert_eq!(provider(&server).storage_strategy(), StorageStrategy::StoreCopy);

    let unconfigured =
        provider_with(&server, StaticCredential::new(None), ProviderConfig::default());
    assert!(matches!(
        unconfigured.plugin_state().await.unwrap(),
        PluginState::SetupRequired { .. }
    ));
}
