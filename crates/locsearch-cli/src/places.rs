//! Command handlers for the CLI.
//!
//! `main` builds one provider from the loaded config and hands it to the
//! handler for the chosen subcommand. Results go to stdout as pretty JSON;
//! logs go to stderr.

use std::path::Path;

use anyhow::Context;
use locsearch_core::{AppConfig, Location};
use locsearch_foursquare::{
    FoursquareClient, FoursquareLocationProvider, LocationQuery, ProviderConfig, SearchParams,
    PLACE_FIELDS,
};
use serde::Serialize;

use crate::credentials::CliCredentials;

pub(crate) type Provider = FoursquareLocationProvider<CliCredentials>;

pub(crate) fn build_provider(config: &AppConfig) -> anyhow::Result<Provider> {
    let client = FoursquareClient::with_base_url(
        &config.base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build places API client")?
    .with_api_version(config.api_version.clone());

    let provider_config = ProviderConfig {
        default_language: config.language.clone(),
        ..ProviderConfig::default()
    };

    Ok(FoursquareLocationProvider::new(
        client,
        CliCredentials::from_config(config),
        provider_config,
    ))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `--all-fields` selection: every field the normalizer reads, or `None`
/// to let the API pick its defaults.
pub(crate) fn requested_fields(all_fields: bool) -> Option<Vec<String>> {
    all_fields.then(|| PLACE_FIELDS.iter().map(|f| (*f).to_owned()).collect())
}

pub(crate) struct SearchArgs<'a> {
    pub(crate) query: &'a str,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) radius_meters: u32,
    pub(crate) language: Option<&'a str>,
    pub(crate) fields: Option<&'a [String]>,
    pub(crate) allow_network: bool,
}

pub(crate) async fn run_search(provider: &Provider, args: &SearchArgs<'_>) -> anyhow::Result<()> {
    let query = LocationQuery {
        query: args.query,
        user_latitude: args.latitude,
        user_longitude: args.longitude,
        search_radius_meters: args.radius_meters,
    };
    let params = SearchParams {
        language: args.language,
        fields: args.fields,
        allow_network: args.allow_network,
    };
    let locations = provider
        .search(&query, &params)
        .await
        .context("place search failed")?;
    tracing::info!(count = locations.len(), "search returned locations");
    print_json(&locations)
}

pub(crate) async fn run_get(
    provider: &Provider,
    place_id: &str,
    fields: Option<&[String]>,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let location = provider
        .get_with_fields(place_id, fields, language)
        .await
        .with_context(|| format!("failed to fetch place '{place_id}'"))?;
    if location.is_none() {
        tracing::warn!(place_id, "place not found");
    }
    print_json(&location)
}

pub(crate) async fn run_refresh(
    provider: &Provider,
    location_path: &Path,
    last_updated_ms: i64,
    language: Option<&str>,
) -> anyhow::Result<()> {
    let item = read_location(location_path)?;
    let id = item.id.clone();
    let refreshed = provider
        .refresh(item, last_updated_ms, language)
        .await
        .with_context(|| format!("failed to refresh place '{id}'"))?;
    if refreshed.is_none() {
        tracing::warn!(place_id = %id, "place no longer exists");
    }
    print_json(&refreshed)
}

pub(crate) async fn run_status(provider: &Provider) -> anyhow::Result<()> {
    let state = provider.plugin_state().await?;
    print_json(&state)
}

pub(crate) async fn run_set_key(provider: &Provider, api_key: &str) -> anyhow::Result<()> {
    provider.set_api_key(api_key).await?;
    print_json(&provider.plugin_state().await?)
}

pub(crate) async fn run_test_key(provider: &Provider, api_key: &str) -> anyhow::Result<()> {
    let valid = provider
        .test_api_key(api_key)
        .await
        .context("could not check API key")?;
    print_json(&serde_json::json!({ "valid": valid }))
}

pub(crate) fn read_location(path: &Path) -> anyhow::Result<Location> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a location", path.display()))
}
