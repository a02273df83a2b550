//! Places API response types.
//!
//! Two API generations are modelled side by side:
//!
//! - current: place id in `fsq_place_id`, flat `latitude` / `longitude`,
//!   string `fsq_category_id` on categories.
//! - older: place id in `fsq_id`, coordinates under `geocodes.main`, numeric
//!   `id` on categories.
//!
//! Every field is optional. Unknown fields are ignored and `null` is treated
//! the same as absent; nothing defaults to a zero value.

use serde::Deserialize;

/// Response body of `GET /places/search`.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceSearchResponse {
    #[serde(default)]
    pub results: Option<Vec<RawPlace>>,
}

/// One place as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlace {
    pub fsq_place_id: Option<String>,
    /// Place id in the older API.
    pub fsq_id: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Coordinates in the older API.
    pub geocodes: Option<RawGeocodes>,
    pub location: Option<RawPlaceLocation>,
    pub categories: Option<Vec<RawCategory>>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours: Option<RawHours>,
    /// Provider rating on a 0-100 scale.
    pub rating: Option<f32>,
}

/// A coordinate pair. Either axis may be missing or `null` upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawLatLon {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RawLatLon {
    /// Both axes, or `None` if either is absent.
    #[must_use]
    pub fn pair(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Named coordinate variants of a place. Only `main` is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGeocodes {
    pub main: Option<RawLatLon>,
    pub drop_off: Option<RawLatLon>,
    pub roof: Option<RawLatLon>,
    pub front_door: Option<RawLatLon>,
    pub road: Option<RawLatLon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlaceLocation {
    pub address: Option<String>,
    pub country: Option<String>,
    pub formatted_address: Option<String>,
    pub locality: Option<String>,
    pub postcode: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub fsq_category_id: Option<String>,
    /// Numeric category code in the older API.
    pub id: Option<i64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub plural_name: Option<String>,
    pub icon: Option<RawCategoryIcon>,
}

/// Category icon asset, split into URL prefix and file suffix.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategoryIcon {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHours {
    pub display: Option<String>,
    pub is_local_holiday: Option<bool>,
    pub open_now: Option<bool>,
    pub regular: Option<Vec<RawRegularHours>>,
}

/// One weekly opening interval in compact form.
///
/// `day` is 1 (Monday) through 7 (Sunday); `open` is `"HHMM"`; `close` is
/// `"HHMM"`, or `"+HHMM"` when the place closes on the following day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRegularHours {
    pub close: Option<String>,
    pub day: Option<i64>,
    pub open: Option<String>,
}
