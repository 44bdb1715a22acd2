//! Time and calendar helpers shared by every level of the document tree

use crate::error::{OrgcalError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// ISO 8601 (year, week, weekday) coordinate of a date.
///
/// `weekday` is 1-based with Monday = 1, as in ISO 8601. Use
/// [`IsoCoordinate::weekday_index`] for the 0-based index used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCoordinate {
    pub year: i32,
    pub week: u32,
    pub weekday: u32,
}

impl IsoCoordinate {
    /// Monday-origin weekday index (0..=6)
    pub fn weekday_index(&self) -> u32 {
        self.weekday - 1
    }

    pub fn week_key(&self) -> WeekKey {
        WeekKey {
            year: self.year,
            week: self.week,
        }
    }
}

/// Key of a week inside a calendar year: the ISO week-year and week number.
///
/// The ISO week-year differs from the calendar year for the few days around
/// new year that belong to week 1 or week 52/53 of the neighbouring year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Parse a `YYYY-MM-DD` date string.
///
/// The shape is checked before chrono sees it: chrono alone accepts
/// unpadded fields, leading whitespace and signed years, none of which the
/// day heading can be read back from.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    if !date_regex().is_match(date) {
        return Err(OrgcalError::MalformedDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| OrgcalError::MalformedDate(date.to_string()))
}

/// Decompose a `YYYY-MM-DD` date into its ISO calendar coordinate
pub fn iso_calendar(date: &str) -> Result<IsoCoordinate> {
    let parsed = parse_date(date)?;
    let week = parsed.iso_week();
    Ok(IsoCoordinate {
        year: week.year(),
        week: week.week(),
        weekday: parsed.weekday().number_from_monday(),
    })
}

/// Full English weekday name for a Monday-origin index
pub fn weekday_name(index: u32) -> &'static str {
    WEEKDAY_NAMES[index as usize % 7]
}

/// Two-letter abbreviation, derived from the full name
pub fn weekday_abbrev(index: u32) -> &'static str {
    &weekday_name(index)[..2]
}

/// A wall-clock time as written in the document.
///
/// Neither field is range-checked: `25:70` is carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        ClockTime { hours, minutes }
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = String;

    /// Parse an `HH:MM` string
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid clock time: '{}'", s))?;
        let hours = hours
            .parse()
            .map_err(|_| format!("Invalid clock hours: '{}'", s))?;
        let minutes = minutes
            .parse()
            .map_err(|_| format!("Invalid clock minutes: '{}'", s))?;
        Ok(ClockTime { hours, minutes })
    }
}

/// Parse a four-digit `HHMM` string (no separator) into a clock time
pub fn parse_clock_digits(raw: &str) -> Result<ClockTime> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrgcalError::MalformedRecord(format!(
            "clock time must be four digits (HHMM), got '{}'",
            raw
        )));
    }
    // Both halves are ASCII digits, so the parses cannot fail.
    let hours = raw[..2].parse().unwrap_or_default();
    let minutes = raw[2..].parse().unwrap_or_default();
    Ok(ClockTime::new(hours, minutes))
}

/// Format a minute count as `HH:MM`.
///
/// Hours are zero-padded to at least two digits and never wrap at 24.
/// Negative input is not rejected: hours truncate toward zero and minutes
/// are taken modulo 60.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes.rem_euclid(60);
    format!("{:02}:{:02}", hours, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_calendar_monday() {
        let coord = iso_calendar("2024-01-01").unwrap();
        assert_eq!(coord.year, 2024);
        assert_eq!(coord.week, 1);
        assert_eq!(coord.weekday, 1);
        assert_eq!(coord.weekday_index(), 0);
    }

    #[test]
    fn test_iso_calendar_year_boundary() {
        // December 30, 2024 is in 2025-W01 (ISO week date)
        let coord = iso_calendar("2024-12-30").unwrap();
        assert_eq!(coord.week_key(), WeekKey { year: 2025, week: 1 });

        // January 1, 2021 is a Friday in 2020-W53
        let coord = iso_calendar("2021-01-01").unwrap();
        assert_eq!(coord.week_key(), WeekKey { year: 2020, week: 53 });
        assert_eq!(coord.weekday_index(), 4);
    }

    #[test]
    fn test_iso_calendar_invalid() {
        assert!(matches!(
            iso_calendar("2024-13-01"),
            Err(OrgcalError::MalformedDate(_))
        ));
        assert!(iso_calendar("2024/01/01").is_err());
        assert!(iso_calendar("").is_err());
    }

    #[test]
    fn test_parse_date_requires_padded_fields() {
        for raw in ["2024-1-5", "2024-01-5", " 2024-01-15", "2024-01-15 ", "+12345-01-01"] {
            assert!(
                matches!(parse_date(raw), Err(OrgcalError::MalformedDate(ref d)) if d == raw),
                "accepted {:?}",
                raw
            );
        }
        assert_eq!(
            parse_date("2024-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(0), "Monday");
        assert_eq!(weekday_abbrev(0), "Mo");
        assert_eq!(weekday_name(6), "Sunday");
        assert_eq!(weekday_abbrev(3), "Th");
    }

    #[test]
    fn test_week_key_display() {
        assert_eq!(WeekKey { year: 2024, week: 3 }.to_string(), "2024-W03");
        assert_eq!(WeekKey { year: 2020, week: 53 }.to_string(), "2020-W53");
    }

    #[test]
    fn test_parse_clock_digits() {
        assert_eq!(parse_clock_digits("0930").unwrap().to_string(), "09:30");
        // No range validation
        assert_eq!(parse_clock_digits("2575").unwrap().to_string(), "25:75");
        assert!(parse_clock_digits("930").is_err());
        assert!(parse_clock_digits("09:30").is_err());
        assert!(parse_clock_digits("ab12").is_err());
    }

    #[test]
    fn test_clock_time_from_str() {
        let time: ClockTime = "23:45".parse().unwrap();
        assert_eq!(time, ClockTime::new(23, 45));
        assert_eq!(time.minutes_since_midnight(), 23 * 60 + 45);
        assert!("2345".parse::<ClockTime>().is_err());
        assert!("aa:bb".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_ordering() {
        assert!(ClockTime::new(9, 0) < ClockTime::new(10, 0));
        assert!(ClockTime::new(9, 59) < ClockTime::new(10, 0));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(90), "01:30");
        assert_eq!(format_duration(45), "00:45");
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(25 * 60), "25:00");
        assert_eq!(format_duration(100 * 60 + 5), "100:05");
    }

    #[test]
    fn test_format_duration_negative_is_permissive() {
        assert_eq!(format_duration(-30), "00:30");
        assert_eq!(format_duration(-90), "-1:30");
    }
}
