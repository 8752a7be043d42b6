//! Calendar utilities.
//!
//! Thin helpers over chrono used by the parser and the occurrence generator.
//! Month lengths, leap years and weekday math all come from chrono; nothing
//! here re-derives calendar arithmetic by hand.

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serializer;
use tracing::warn;

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// Calendar-invalid dates such as `2024-02-30` are rejected rather than
/// rolled over into the following month.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Parse a reference date string.
///
/// Accepts a plain ISO date or an ISO date-time (`2024-01-01T09:30:00`,
/// `2024-01-01 09:30`); only the calendar date part is kept.
#[must_use]
pub fn parse_reference_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.len() == 10 {
        return parse_iso_date(input);
    }
    let (date_part, rest) = (input.get(..10)?, input.get(10..)?);
    if rest.starts_with('T') || rest.starts_with(' ') {
        parse_iso_date(date_part)
    } else {
        None
    }
}

/// Add `days` to a date without mutating it, saturating at chrono's range.
#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the month `months` after the month containing `date`.
#[must_use]
pub fn month_start_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(months))
}

/// Format as `YYYY-MM-DD`.
#[must_use]
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short weekday/day label, e.g. `Fri 5`.
#[must_use]
pub fn short_label(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

/// Long calendar label, e.g. `Friday, January 5, 2024`.
#[must_use]
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Medium label used in summaries, e.g. `Fri Jan 5, 2024`.
#[must_use]
pub fn medium_label(date: NaiveDate) -> String {
    date.format("%a %b %-d, %Y").to_string()
}

/// 24-hour `HH:MM` label.
#[must_use]
pub fn time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Weekday index with Sunday as 0 and Saturday as 6.
#[must_use]
pub fn weekday_index(weekday: Weekday) -> u8 {
    // num_days_from_sunday is always < 7
    u8::try_from(weekday.num_days_from_sunday()).unwrap_or(0)
}

/// Map a weekday word or abbreviation to a [`Weekday`].
///
/// Accepts full names, plurals and the usual abbreviations (`tue`, `tues`,
/// `thur`, `thurs`, ...). Matching is case-insensitive and keyed on the
/// first three letters, so callers pass tokens already matched as weekdays.
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lower = name.trim().trim_end_matches('.').to_lowercase();
    match lower.get(..3)? {
        "sun" => Some(Weekday::Sun),
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Parse month name to number.
#[must_use]
pub fn month_from_name(input: &str) -> Option<u32> {
    match input.trim().trim_end_matches('.').to_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse an ordinal word (`first`..`fifth`, `1st`..`5th`).
#[must_use]
pub fn ordinal_from_word(input: &str) -> Option<u8> {
    match input.trim().to_lowercase().as_str() {
        "first" | "1st" => Some(1),
        "second" | "2nd" => Some(2),
        "third" | "3rd" => Some(3),
        "fourth" | "4th" => Some(4),
        "fifth" | "5th" => Some(5),
        _ => None,
    }
}

/// English ordinal suffix for a day number (`1st`, `2nd`, `11th`, `23rd`).
#[must_use]
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Next date on or after `date` falling on `weekday`.
#[must_use]
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let delta = (weekday.num_days_from_sunday() + 7 - date.weekday().num_days_from_sunday()) % 7;
    add_days(date, u64::from(delta))
}

/// Next date strictly after `date` falling on `weekday`.
#[must_use]
pub fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    next_weekday_on_or_after(add_days(date, 1), weekday)
}

/// The `n`-th `weekday` of the given month, if the month has one.
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// The date a phrase is interpreted against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDate {
    Date(NaiveDate),
    /// `YYYY-MM-DD` or an ISO date-time; validated on use.
    Iso(String),
}

impl ReferenceDate {
    fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Iso(text) => parse_reference_date(text),
        }
    }
}

impl From<NaiveDate> for ReferenceDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for ReferenceDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Date(datetime.date())
    }
}

impl From<&str> for ReferenceDate {
    fn from(text: &str) -> Self {
        Self::Iso(text.to_string())
    }
}

impl From<String> for ReferenceDate {
    fn from(text: String) -> Self {
        Self::Iso(text)
    }
}

/// Resolve the reference date: explicit reference, then the fallback ISO
/// string, then today. Unparsable values are logged and skipped.
#[must_use]
pub fn resolve_reference(reference: Option<&ReferenceDate>, fallback_iso: Option<&str>) -> NaiveDate {
    if let Some(reference) = reference {
        match reference.to_date() {
            Some(date) => return date,
            None => warn!(?reference, "ignoring unparsable reference date"),
        }
    }
    if let Some(fallback) = fallback_iso {
        match parse_reference_date(fallback) {
            Some(date) => return date,
            None => warn!(fallback, "ignoring unparsable fallback date"),
        }
    }
    today()
}

/// Serialize an optional time of day as `HH:MM`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize_hhmm<S: Serializer>(
    value: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(time) => serializer.serialize_str(&time_label(*time)),
        None => serializer.serialize_none(),
    }
}
