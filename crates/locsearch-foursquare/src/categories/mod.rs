//! Category -> icon classification.
//!
//! Two taxonomies are supported: the current API's opaque string category ids
//! (exact-match table in [`place_ids`]) and the older API's numeric codes
//! (ordered rule table in [`legacy`]).

pub mod legacy;
mod place_ids;

use std::collections::HashMap;
use std::sync::LazyLock;

use locsearch_core::LocationIcon;

use crate::types::RawCategory;

pub use legacy::{classify_with, icon_for_legacy_code, CategoryRule, LEGACY_CATEGORY_RULES};

static PLACE_ID_INDEX: LazyLock<HashMap<&'static str, LocationIcon>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(place_ids::PLACE_CATEGORY_ICONS.len());
    for (id, icon) in place_ids::PLACE_CATEGORY_ICONS {
        index.entry(*id).or_insert(*icon);
    }
    index
});

/// Looks up the icon for a string category id.
#[must_use]
pub fn icon_for_category_id(category_id: &str) -> Option<LocationIcon> {
    PLACE_ID_INDEX.get(category_id).copied()
}

/// Classifies a raw category, preferring the string id and falling back to
/// the legacy numeric code.
#[must_use]
pub fn classify_category(category: &RawCategory) -> Option<LocationIcon> {
    if let Some(id) = category.fsq_category_id.as_deref() {
        if let Some(icon) = icon_for_category_id(id) {
            return Some(icon);
        }
    }
    category.id.and_then(icon_for_legacy_code)
}

/// Number of entries in the string-id table.
#[must_use]
pub fn category_id_count() -> usize {
    PLACE_ID_INDEX.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(fsq_category_id: Option<&str>, id: Option<i64>) -> RawCategory {
        RawCategory {
            fsq_category_id: fsq_category_id.map(str::to_owned),
            id,
            ..RawCategory::default()
        }
    }

    #[test]
    fn known_string_ids_resolve() {
        assert_eq!(
            icon_for_category_id("4bf58dd8d48988d16c941735"),
            Some(LocationIcon::Burger)
        );
        assert_eq!(
            icon_for_category_id("4bf58dd8d48988d1ca941735"),
            Some(LocationIcon::Pizza)
        );
        assert_eq!(
            icon_for_category_id("4cce455aebf7b749d5e191f5"),
            Some(LocationIcon::Soccer)
        );
        assert_eq!(
            icon_for_category_id("52f2ab2ebcbc57f1066b8b56"),
            Some(LocationIcon::Atm)
        );
    }

    #[test]
    fn unknown_string_id_has_no_icon() {
        assert_eq!(icon_for_category_id("000000000000000000000000"), None);
        assert_eq!(icon_for_category_id(""), None);
    }

    #[test]
    fn lookup_is_exact_not_prefix() {
        assert_eq!(icon_for_category_id("4bf58dd8d48988d16c94173"), None);
        assert_eq!(icon_for_category_id("4BF58DD8D48988D16C941735"), None);
    }

    #[test]
    fn table_has_no_duplicate_ids() {
        assert_eq!(category_id_count(), place_ids::PLACE_CATEGORY_ICONS.len());
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let first: Vec<_> = place_ids::PLACE_CATEGORY_ICONS
            .iter()
            .map(|(id, _)| icon_for_category_id(id))
            .collect();
        let second: Vec<_> = place_ids::PLACE_CATEGORY_ICONS
            .iter()
            .rev()
            .map(|(id, _)| icon_for_category_id(id))
            .collect();
        assert!(first.iter().eq(second.iter().rev()));
        for ((_, icon), found) in place_ids::PLACE_CATEGORY_ICONS.iter().zip(&first) {
            assert_eq!(Some(*icon), *found);
        }
    }

    #[test]
    fn classify_prefers_string_id() {
        let cat = category(Some("4bf58dd8d48988d1ca941735"), Some(13031));
        assert_eq!(classify_category(&cat), Some(LocationIcon::Pizza));
    }

    #[test]
    fn classify_falls_back_to_numeric_code() {
        let cat = category(Some("ffffffffffffffffffffffff"), Some(13031));
        assert_eq!(classify_category(&cat), Some(LocationIcon::Burger));

        let cat = category(None, Some(18039));
        assert_eq!(classify_category(&cat), Some(LocationIcon::Soccer));
    }

    #[test]
    fn classify_without_ids_is_none() {
        assert_eq!(classify_category(&category(None, None)), None);
    }
}
