//! Decoding of compact weekly opening hours.
//!
//! The API encodes each interval as a day number (1 = Monday .. 7 = Sunday),
//! an open time `"HHMM"` and a close time `"HHMM"`. A close time written as
//! `"+HHMM"` falls on the next day.

use chrono::{NaiveTime, TimeDelta, Weekday};
use locsearch_core::{OpeningHours, OpeningSchedule};
use thiserror::Error;

use crate::types::{RawHours, RawRegularHours};

/// Why a single hours entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHours {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("day {0} is outside 1..=7")]
    DayOutOfRange(i64),

    #[error("malformed {field} time \"{value}\"")]
    Malformed { field: &'static str, value: String },

    #[error("{field} time \"{value}\" is not a valid time of day")]
    OutOfRange { field: &'static str, value: String },
}

/// Decodes one regular-hours entry.
///
/// The duration is `close - open` as a time-of-day difference, plus one day
/// when the close time carries the `+` marker. A close time earlier than the
/// open time without the marker is kept as a negative duration.
///
/// # Errors
///
/// Returns [`InvalidHours`] when a field is missing, the day is outside
/// `1..=7`, a time is not exactly four digits (five with the `+` prefix for
/// `close`), or a time is not a valid hour/minute.
pub fn decode_regular_hours(entry: &RawRegularHours) -> Result<OpeningHours, InvalidHours> {
    let day = entry.day.ok_or(InvalidHours::Missing("day"))?;
    let open = entry.open.as_deref().ok_or(InvalidHours::Missing("open"))?;
    let close = entry.close.as_deref().ok_or(InvalidHours::Missing("close"))?;
    decode_hours(day, open, close)
}

/// Decodes a `(day, open, close)` triple. See [`decode_regular_hours`].
///
/// # Errors
///
/// Same as [`decode_regular_hours`].
pub fn decode_hours(day: i64, open: &str, close: &str) -> Result<OpeningHours, InvalidHours> {
    let day_of_week = weekday_from_number(day).ok_or(InvalidHours::DayOutOfRange(day))?;

    let start_time = parse_hhmm("open", open)?;

    let (closes_next_day, close_digits) = match close.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, close),
    };
    let close_time = parse_hhmm("close", close_digits).map_err(|err| match err {
        InvalidHours::Malformed { field, .. } => InvalidHours::Malformed {
            field,
            value: close.to_string(),
        },
        InvalidHours::OutOfRange { field, .. } => InvalidHours::OutOfRange {
            field,
            value: close.to_string(),
        },
        other => other,
    })?;

    let mut duration = close_time.signed_duration_since(start_time);
    if closes_next_day {
        duration += TimeDelta::days(1);
    }

    Ok(OpeningHours {
        day_of_week,
        start_time,
        duration,
    })
}

/// Decodes every regular entry of `hours`, dropping the ones that fail.
///
/// Returns `None` when there is no regular-hours list at all.
#[must_use]
pub fn decode_schedule(hours: &RawHours) -> Option<OpeningSchedule> {
    let regular = hours.regular.as_ref()?;
    let opening_hours = regular
        .iter()
        .filter_map(|entry| {
            decode_regular_hours(entry)
                .map_err(|e| {
                    tracing::debug!(error = %e, ?entry, "skipping malformed opening hours entry");
                })
                .ok()
        })
        .collect();
    Some(OpeningSchedule { opening_hours })
}

fn weekday_from_number(day: i64) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parses exactly four ASCII digits as `HHMM`.
fn parse_hhmm(field: &'static str, value: &str) -> Result<NaiveTime, InvalidHours> {
    let malformed = || InvalidHours::Malformed {
        field,
        value: value.to_string(),
    };
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let hh: u32 = value[..2].parse().map_err(|_| malformed())?;
    let mm: u32 = value[2..].parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hh, mm, 0).ok_or_else(|| InvalidHours::OutOfRange {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: i64, open: &str, close: &str) -> RawRegularHours {
        RawRegularHours {
            day: Some(day),
            open: Some(open.to_string()),
            close: Some(close.to_string()),
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn decodes_same_day_interval() {
        let hours = decode_hours(1, "0900", "1700").unwrap();
        assert_eq!(hours.day_of_week, Weekday::Mon);
        assert_eq!(hours.start_time, time(9, 0));
        assert_eq!(hours.duration, TimeDelta::hours(8));
    }

    #[test]
    fn next_day_close_adds_a_day() {
        let hours = decode_hours(5, "2200", "+0200").unwrap();
        assert_eq!(hours.day_of_week, Weekday::Fri);
        assert_eq!(hours.start_time, time(22, 0));
        assert_eq!(hours.duration, TimeDelta::hours(4));
    }

    #[test]
    fn close_earlier_than_open_without_marker_is_negative() {
        let hours = decode_hours(2, "1000", "0800").unwrap();
        assert_eq!(hours.duration, TimeDelta::hours(-2));
    }

    #[test]
    fn minutes_are_respected() {
        let hours = decode_hours(7, "0830", "1215").unwrap();
        assert_eq!(hours.day_of_week, Weekday::Sun);
        assert_eq!(hours.start_time, time(8, 30));
        assert_eq!(hours.duration, TimeDelta::minutes(225));
    }

    #[test]
    fn open_all_night_until_next_midnight() {
        let hours = decode_hours(3, "0000", "+0000").unwrap();
        assert_eq!(hours.duration, TimeDelta::days(1));
    }

    #[test]
    fn rejects_day_out_of_range() {
        assert_eq!(
            decode_hours(8, "0900", "1700"),
            Err(InvalidHours::DayOutOfRange(8))
        );
        assert_eq!(
            decode_hours(0, "0900", "1700"),
            Err(InvalidHours::DayOutOfRange(0))
        );
    }

    #[test]
    fn rejects_non_digit_open() {
        assert!(matches!(
            decode_hours(1, "25AB", "1700"),
            Err(InvalidHours::Malformed { field: "open", .. })
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(decode_hours(1, "900", "1700").is_err());
        assert!(decode_hours(1, "09000", "1700").is_err());
        assert!(decode_hours(1, "0900", "+17000").is_err());
        assert!(decode_hours(1, "0900", "+").is_err());
    }

    #[test]
    fn rejects_signed_segments() {
        assert!(decode_hours(1, "+900", "1700").is_err());
        assert!(decode_hours(1, "0900", "-700").is_err());
    }

    #[test]
    fn rejects_invalid_time_of_day() {
        assert!(matches!(
            decode_hours(1, "2500", "2600"),
            Err(InvalidHours::OutOfRange { field: "open", .. })
        ));
        assert!(matches!(
            decode_hours(1, "0900", "+0960"),
            Err(InvalidHours::OutOfRange { field: "close", ref value }) if value == "+0960"
        ));
    }

    #[test]
    fn missing_fields_are_invalid() {
        let raw = RawRegularHours {
            day: Some(1),
            open: None,
            close: Some("1700".to_string()),
        };
        assert_eq!(
            decode_regular_hours(&raw),
            Err(InvalidHours::Missing("open"))
        );
    }

    #[test]
    fn schedule_keeps_only_valid_entries() {
        let hours = RawHours {
            regular: Some(vec![
                entry(1, "0900", "1700"),
                entry(8, "0900", "1700"),
                entry(2, "25AB", "1700"),
                entry(5, "2200", "+0200"),
            ]),
            ..RawHours::default()
        };
        let schedule = decode_schedule(&hours).unwrap();
        assert_eq!(schedule.opening_hours.len(), 2);
        assert_eq!(schedule.opening_hours[0].day_of_week, Weekday::Mon);
        assert_eq!(schedule.opening_hours[1].day_of_week, Weekday::Fri);
    }

    #[test]
    fn schedule_absent_without_regular_list() {
        let hours = RawHours {
            display: Some("Mon-Fri 9:00-17:00".to_string()),
            ..RawHours::default()
        };
        assert!(decode_schedule(&hours).is_none());
    }

    #[test]
    fn schedule_present_but_empty_when_all_entries_fail() {
        let hours = RawHours {
            regular: Some(vec![entry(9, "0900", "1700")]),
            ..RawHours::default()
        };
        let schedule = decode_schedule(&hours).unwrap();
        assert!(schedule.opening_hours.is_empty());
    }
}
