//! Normalization from raw places API records to [`locsearch_core::Location`].
//!
//! Field resolution tries the current API shape first and falls back to the
//! older one (`fsq_place_id` then `fsq_id`; flat coordinates then
//! `geocodes.main`). A record without an id, a name, or both coordinates is
//! skipped rather than partially built.

use locsearch_core::{Address, Attribution, Location};
use thiserror::Error;

use crate::categories::classify_category;
use crate::hours::decode_schedule;
use crate::types::{RawPlace, RawPlaceLocation};

/// Attribution label shown with every location.
pub const ATTRIBUTION_TEXT: &str = "Foursquare";

const PROFILE_URL_BASE: &str = "https://foursquare.com/v/";

/// Provider rating is 0-100; locations carry 0-10.
const RATING_SCALE: f32 = 10.0;

/// Per-request inputs that are not part of the raw record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeContext<'a> {
    /// Language the upstream request was made in. Only used for diagnostics.
    pub language: &'a str,
    /// Icon shown next to the attribution text.
    pub attribution_icon_url: Option<&'a str>,
}

/// Why a raw place could not become a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("missing place id")]
    MissingId,
    #[error("missing name")]
    MissingName,
    #[error("missing coordinates")]
    MissingCoordinates,
}

/// Converts a [`RawPlace`] into a [`Location`], or `None` if a required field
/// is absent.
#[must_use]
pub fn normalize_place(place: RawPlace, ctx: &NormalizeContext<'_>) -> Option<Location> {
    match try_normalize_place(place, ctx) {
        Ok(location) => Some(location),
        Err((reason, id)) => {
            tracing::debug!(
                place_id = id.as_deref().unwrap_or("<none>"),
                language = ctx.language,
                %reason,
                "skipping place"
            );
            None
        }
    }
}

/// Like [`normalize_place`] but reports which required field was missing,
/// together with whatever id the record carried.
///
/// # Errors
///
/// Returns the [`SkipReason`] for the first required field that is absent.
pub fn try_normalize_place(
    place: RawPlace,
    ctx: &NormalizeContext<'_>,
) -> Result<Location, (SkipReason, Option<String>)> {
    let Some(id) = place.fsq_place_id.or(place.fsq_id) else {
        return Err((SkipReason::MissingId, None));
    };
    let Some(label) = place.name else {
        return Err((SkipReason::MissingName, Some(id)));
    };
    let coordinates = match (place.latitude, place.longitude) {
        (Some(lat), Some(lon)) => Some((lat, lon)),
        _ => place
            .geocodes
            .as_ref()
            .and_then(|g| g.main)
            .and_then(|main| main.pair()),
    };
    let Some((latitude, longitude)) = coordinates else {
        return Err((SkipReason::MissingCoordinates, Some(id)));
    };

    let primary_category = place.categories.as_ref().and_then(|c| c.first());
    let icon = primary_category.and_then(classify_category);
    let category = primary_category.and_then(|c| c.name.clone());

    let opening_schedule = place.hours.as_ref().and_then(decode_schedule);

    let attribution = Attribution {
        text: ATTRIBUTION_TEXT.to_string(),
        url: profile_url(&id),
        icon_url: ctx.attribution_icon_url.map(str::to_owned),
    };

    Ok(Location {
        address: normalize_address(place.location.unwrap_or_default()),
        latitude,
        longitude,
        phone_number: place.tel,
        website_url: place.website,
        user_rating: place.rating.map(|r| r / RATING_SCALE),
        attribution,
        icon,
        category,
        opening_schedule,
        id,
        label,
    })
}

/// Public profile page of a place.
#[must_use]
pub fn profile_url(place_id: &str) -> String {
    format!("{PROFILE_URL_BASE}{place_id}")
}

fn normalize_address(location: RawPlaceLocation) -> Address {
    Address {
        address: location.address,
        formatted_address: location.formatted_address,
        country: location.country,
        state: location.region,
        city: location.locality,
        postal_code: location.postcode,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
