//! Shared domain model and configuration for the location-search plugin.

pub mod app_config;
pub mod config;
pub mod icon;
pub mod location;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use icon::LocationIcon;
pub use location::{
    Address, Attribution, Location, OpeningHours, OpeningSchedule, PluginState, StorageStrategy,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
