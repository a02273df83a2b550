mod credentials;
mod places;

use clap::{Parser, Subcommand};
use locsearch_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "locsearch")]
#[command(about = "Search places through the Foursquare places API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search places around a position
    Search {
        /// Free-text query (e.g., "coffee")
        query: String,
        /// Latitude of the search center
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude of the search center
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Search radius in meters
        #[arg(long, default_value = "1500")]
        radius: u32,
        /// Response language (e.g., de); unsupported values use the default
        #[arg(long)]
        lang: Option<String>,
        /// Behave as if network access were unavailable
        #[arg(long)]
        offline: bool,
        /// Request every field the normalizer reads
        #[arg(long)]
        all_fields: bool,
    },
    /// Fetch a single place by id
    Get {
        /// Place id
        id: String,
        #[arg(long)]
        lang: Option<String>,
        /// Request every field the normalizer reads
        #[arg(long)]
        all_fields: bool,
    },
    /// Refresh a previously fetched location if it is older than a day
    Refresh {
        /// JSON file holding a location printed by `get` or `search`
        location: std::path::PathBuf,
        /// When the location was last updated, in epoch milliseconds
        #[arg(long)]
        last_updated: i64,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Show whether an API key is configured
    Status,
    /// Store an API key in the credential file
    SetKey {
        key: String,
    },
    /// Check an API key against the places API without storing it
    TestKey {
        key: String,
    },
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = locsearch_core::load_app_config()?;
    init_tracing(&config);
    tracing::debug!(?config, "loaded configuration");

    let provider = places::build_provider(&config)?;

    match cli.command {
        Commands::Search {
            query,
            lat,
            lon,
            radius,
            lang,
            offline,
            all_fields,
        } => {
            let fields = places::requested_fields(all_fields);
            let search = places::SearchArgs {
                query: &query,
                latitude: lat,
                longitude: lon,
                radius_meters: radius,
                language: lang.as_deref(),
                fields: fields.as_deref(),
                allow_network: !offline,
            };
            places::run_search(&provider, &search).await?;
        }
        Commands::Get {
            id,
            lang,
            all_fields,
        } => {
            let fields = places::requested_fields(all_fields);
            places::run_get(&provider, &id, fields.as_deref(), lang.as_deref()).await?;
        }
        Commands::Refresh {
            location,
            last_updated,
            lang,
        } => places::run_refresh(&provider, &location, last_updated, lang.as_deref()).await?,
        Commands::Status => places::run_status(&provider).await?,
        Commands::SetKey { key } => places::run_set_key(&provider, &key).await?,
        Commands::TestKey { key } => places::run_test_key(&provider, &key).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
