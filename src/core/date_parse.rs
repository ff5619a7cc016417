use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

use super::calendar_date::start_of_day;

/// Which stage of the fallback chain accepted a date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormatKind {
    Iso8601,
    Rfc2822,
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub instant: NaiveDateTime,
    pub format: DateFormatKind,
}

const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const PERMISSIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%a %b %d %Y %H:%M:%S",
];

const PERMISSIVE_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A, %B %d, %Y",
];

/// Parses a raw date value through the fallback chain:
/// ISO 8601, then RFC 2822 / HTTP-date, then a permissive set of common
/// layouts (including unix milliseconds).
///
/// Offsets are dropped after parsing: the wall-clock time as written is kept.
#[must_use]
pub fn parse_date_value(input: &str) -> Option<ParsedDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(instant) = parse_iso8601(trimmed) {
        return Some(ParsedDate {
            instant,
            format: DateFormatKind::Iso8601,
        });
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(ParsedDate {
            instant: parsed.naive_local(),
            format: DateFormatKind::Rfc2822,
        });
    }

    parse_permissive(trimmed).map(|instant| ParsedDate {
        instant,
        format: DateFormatKind::Permissive,
    })
}

/// Parses a configuration date (constraint bound, start date, selected date)
/// and truncates it to its calendar day.
pub fn parse_calendar_date(input: &str) -> CalendarResult<NaiveDate> {
    parse_date_value(input)
        .map(|parsed| parsed.instant.date())
        .ok_or_else(|| CalendarError::InvalidData(format!("unparsable date value `{input}`")))
}

/// Interprets a unix timestamp in milliseconds as UTC wall-clock time.
#[must_use]
pub fn instant_from_unix_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|value| value.naive_utc())
}

fn parse_iso8601(input: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_local());
    }
    for format in ISO_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }

    let is_ascii_digits = |value: &str| value.bytes().all(|byte| byte.is_ascii_digit());
    // Calendar month (`2024-03`) and basic calendar date (`20240315`).
    if input.len() == 7 && input.as_bytes()[4] == b'-' {
        let (year, month) = (&input[..4], &input[5..]);
        if is_ascii_digits(year) && is_ascii_digits(month) {
            return date_from_parts(year, month, "1").map(start_of_day);
        }
    }
    if input.len() == 8 && is_ascii_digits(input) {
        return date_from_parts(&input[..4], &input[4..6], &input[6..]).map(start_of_day);
    }
    None
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_permissive(input: &str) -> Option<NaiveDateTime> {
    for format in PERMISSIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }
    for format in PERMISSIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(start_of_day(date));
        }
    }

    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.len() >= 9 && digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return input
            .parse::<i64>()
            .ok()
            .and_then(instant_from_unix_millis);
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{DateFormatKind, parse_calendar_date, parse_date_value};

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("date")
            .and_hms_opt(h, min, s)
            .expect("time")
    }

    #[test]
    fn iso_calendar_date_resolves_to_midnight() {
        let parsed = parse_date_value("2024-03-10").expect("iso date");
        assert_eq!(parsed.instant, ymd_hms(2024, 3, 10, 0, 0, 0));
        assert_eq!(parsed.format, DateFormatKind::Iso8601);
    }

    #[test]
    fn iso_datetime_with_offset_keeps_wall_clock() {
        let parsed = parse_date_value("2024-03-10T15:30:00+02:00").expect("rfc3339");
        assert_eq!(parsed.instant, ymd_hms(2024, 3, 10, 15, 30, 0));
    }

    #[test]
    fn iso_month_and_basic_forms_are_accepted() {
        let month = parse_date_value("2024-03").expect("month");
        assert_eq!(month.instant, ymd_hms(2024, 3, 1, 0, 0, 0));
        let basic = parse_date_value("20240315").expect("basic");
        assert_eq!(basic.instant, ymd_hms(2024, 3, 15, 0, 0, 0));
    }

    #[test]
    fn http_date_falls_back_to_rfc2822() {
        let parsed = parse_date_value("Sun, 10 Mar 2024 08:49:37 GMT").expect("http date");
        assert_eq!(parsed.format, DateFormatKind::Rfc2822);
        assert_eq!(parsed.instant, ymd_hms(2024, 3, 10, 8, 49, 37));
    }

    #[test]
    fn permissive_layouts_are_last_resort() {
        let slashed = parse_date_value("03/10/2024").expect("us date");
        assert_eq!(slashed.format, DateFormatKind::Permissive);
        assert_eq!(slashed.instant, ymd_hms(2024, 3, 10, 0, 0, 0));

        let spelled = parse_date_value("March 10, 2024").expect("long date");
        assert_eq!(spelled.instant, ymd_hms(2024, 3, 10, 0, 0, 0));

        let millis = parse_date_value("1710028800000").expect("unix millis");
        assert_eq!(millis.instant, ymd_hms(2024, 3, 10, 0, 0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date_value("").is_none());
        assert!(parse_date_value("next tuesday-ish").is_none());
        assert!(parse_date_value("2024-13-45").is_none());
        assert!(parse_calendar_date("not a date").is_err());
    }
}
