use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.base_url, "https://places-api.foursquare.com");
    assert!(cfg.api_version.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "locsearch/0.1 (location-search)");
    assert_eq!(
        cfg.credentials_path.to_string_lossy(),
        "./.locsearch/credentials.json"
    );
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_api_key() {
    let mut map = HashMap::new();
    map.insert("FSQ_API_KEY", "fsq3abc");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("fsq3abc"));
}

#[test]
fn build_app_config_blank_api_key_is_unset() {
    let mut map = HashMap::new();
    map.insert("FSQ_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("FSQ_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("FSQ_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FSQ_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FSQ_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("FSQ_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FSQ_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("FSQ_BASE_URL", "places-api.foursquare.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FSQ_BASE_URL"));
}

#[test]
fn build_app_config_lowercases_language() {
    let mut map = HashMap::new();
    map.insert("LOCSEARCH_LANGUAGE", "DE");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.language, "de");
}

#[test]
fn build_app_config_api_version_and_paths() {
    let mut map = HashMap::new();
    map.insert("FSQ_API_VERSION", "2025-06-17");
    map.insert("LOCSEARCH_CREDENTIALS_PATH", "/tmp/creds.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_version.as_deref(), Some("2025-06-17"));
    assert_eq!(cfg.credentials_path.to_string_lossy(), "/tmp/creds.json");
}

#[test]
fn debug_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("FSQ_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
