//! Integration tests for `FoursquareClient` using wiremock HTTP mocks.

use locsearch_foursquare::{FoursquareClient, FoursquareError, PlaceSearchRequest};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FoursquareClient {
    FoursquareClient::with_base_url(base_url, 30, "locsearch-test/0.1")
        .expect("client construction should not fail")
}

fn search_request<'a>(fields: Option<&'a [String]>) -> PlaceSearchRequest<'a> {
    PlaceSearchRequest {
        query: "coffee",
        latitude: 52.52,
        longitude: 13.405,
        radius_meters: 1500,
        fields,
        language: Some("de"),
    }
}

#[tokio::test]
async fn places_search_sends_query_and_headers() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": [
            { "fsq_place_id": "p1", "name": "Cafe One", "latitude": 52.5, "longitude": 13.4 },
            { "fsq_place_id": "p2", "name": "Cafe Two", "latitude": 52.6, "longitude": 13.5 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("query", "coffee"))
        .and(query_param("ll", "52.52,13.405"))
        .and(query_param("radius", "1500"))
        .and(query_param_is_missing("fields"))
        .and(header("Authorization", "fsq3-test-key"))
        .and(header("Accept", "application/json"))
        .and(header("Accept-Language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .places_search(&search_request(None), "fsq3-test-key")
        .await
        .expect("search should succeed");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].fsq_place_id.as_deref(), Some("p1"));
    assert_eq!(places[1].name.as_deref(), Some("Cafe Two"));
}

#[tokio::test]
async fn places_search_sends_fields_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("fields", "fsq_place_id,name,latitude"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let fields: Vec<String> = ["fsq_place_id", "name", "latitude"]
        .iter()
        .map(|f| (*f).to_owned())
        .collect();
    let client = test_client(&server.uri());
    let places = client
        .places_search(&search_request(Some(fields.as_slice())), "key")
        .await
        .expect("search should succeed");
    assert!(places.is_empty());
}

#[tokio::test]
async fn places_search_without_results_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .places_search(&search_request(None), "key")
        .await
        .expect("missing results should not be an error");
    assert!(places.is_empty());
}

#[tokio::test]
async fn api_version_header_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("X-Places-Api-Version", "2025-06-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_api_version(Some("2025-06-17".to_owned()));
    client
        .places_search(&search_request(None), "key")
        .await
        .expect("search should succeed");
}

#[tokio::test]
async fn unauthorized_is_distinct_from_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("Authorization", "bad-key"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(header("Authorization", "good-key"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let err = client
        .places_search(&search_request(None), "bad-key")
        .await
        .expect_err("401 should be an error");
    assert!(err.is_authentication(), "expected Unauthorized, got: {err:?}");

    let err = client
        .places_search(&search_request(None), "good-key")
        .await
        .expect_err("500 should be an error");
    assert!(!err.is_authentication());
    assert!(
        matches!(err, FoursquareError::Api { status: 500, ref body } if body == "boom"),
        "expected Api(500), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .places_search(&search_request(None), "key")
        .await
        .expect_err("html body should not parse");
    assert!(matches!(err, FoursquareError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn place_by_id_returns_place() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/abc123"))
        .and(header("Authorization", "key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fsq_place_id": "abc123",
            "name": "Museum",
            "latitude": 48.86,
            "longitude": 2.33
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let place = client
        .place_by_id("abc123", None, None, "key")
        .await
        .expect("lookup should succeed")
        .expect("place should be present");
    assert_eq!(place.name.as_deref(), Some("Museum"));
}

#[tokio::test]
async fn place_by_id_not_found_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let place = client
        .place_by_id("missing", None, None, "key")
        .await
        .expect("404 should not be an error");
    assert!(place.is_none());
}

#[tokio::test]
async fn place_by_id_null_body_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/gone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let place = client
        .place_by_id("gone", None, None, "key")
        .await
        .expect("null body should not be an error");
    assert!(place.is_none());
}
