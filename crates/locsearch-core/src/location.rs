//! Host-facing location model.
//!
//! A [`Location`] is the stable shape handed to the launcher. It is only ever
//! built with an id, a label and both coordinates present; everything else is
//! optional.

use chrono::{NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use crate::icon::LocationIcon;

/// A normalized point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub label: String,
    pub address: Address,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    /// User rating on a 0-10 scale.
    pub user_rating: Option<f32>,
    pub attribution: Attribution,
    pub icon: Option<LocationIcon>,
    /// Display name of the primary category.
    pub category: Option<String>,
    pub opening_schedule: Option<OpeningSchedule>,
}

/// Postal address. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: Option<String>,
    pub formatted_address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Data-source credit shown next to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub text: String,
    pub url: String,
    pub icon_url: Option<String>,
}

/// Weekly opening hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSchedule {
    pub opening_hours: Vec<OpeningHours>,
}

/// One opening interval within a week.
///
/// `duration` may span midnight (next-day closing) and is kept as decoded,
/// so a close time earlier than the open time without a next-day marker
/// yields a negative duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    #[serde(with = "duration_secs")]
    pub duration: TimeDelta,
}

/// How the host keeps returned locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageStrategy {
    /// The host stores a durable copy of returned data.
    StoreCopy,
    /// The host only keeps the id and re-fetches on demand.
    Deferred,
}

/// Readiness reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PluginState {
    Ready,
    SetupRequired { message: String },
}

/// `TimeDelta` has no serde support; encode it as signed whole seconds.
mod duration_secs {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
        value.num_seconds().serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TimeDelta, D::Error> {
        let secs = i64::deserialize(d)?;
        TimeDelta::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {secs}s")))
    }
}
