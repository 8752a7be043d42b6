//! Ordered heuristic matchers.
//!
//! Each group is a slice of plain functions tried left to right; the first
//! one that produces a hit wins. Priority lives in slice order, so it can be
//! read (and tested) in one place.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::scan::{Hit, Scan};
use super::types::Intent;
use crate::core::calendar::{
    add_days, month_from_name, next_weekday_after, next_weekday_on_or_after, ordinal_from_word,
    parse_iso_date, weekday_from_name,
};
use crate::features::recurrence::{generate_occurrences, RecurrenceRule};

/// A matcher inspects the unclaimed parts of the phrase relative to a
/// reference date.
pub type Matcher<T> = fn(&Scan<'_>, NaiveDate) -> Option<Hit<T>>;

/// Try `matchers` in order and return the first hit.
pub fn first_hit<T>(matchers: &[Matcher<T>], scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<T>> {
    matchers.iter().find_map(|matcher| matcher(scan, reference))
}

// Weekday token: full names, abbreviations and plurals.
const WEEKDAY: &str = r"(?:sun(?:day)?|mon(?:day)?|tue(?:s(?:day)?)?|wed(?:nesday)?|thu(?:r(?:s(?:day)?)?)?|fri(?:day)?|sat(?:urday)?)s?\b";
const LIST_SEPARATOR: &str = r"(?:\s*,\s*(?:and\s+)?|\s+(?:and|&)\s+)";
const ORDINAL: &str = r"(?:first|second|third|fourth|fifth|1st|2nd|3rd|4th|5th)";

fn compile(pattern: &str, what: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid {what} regex: {e}"))
}

// ===================
// Time of day
// ===================

const CLOCK_BONUS: f64 = 0.2;
const KEYWORD_TIME_BONUS: f64 = 0.1;

static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:at\s+)?(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b",
        "clock time",
    )
});

static TIME_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:at\s+|in\s+the\s+)?(noon|midnight|morning|afternoon|evening|tonight)\b",
        "time keyword",
    )
});

/// Time-of-day matchers, explicit clock times first.
pub const TIME_MATCHERS: &[Matcher<NaiveTime>] = &[clock_time, time_keyword];

fn clock_time(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<NaiveTime>> {
    scan.find("clock-time", &CLOCK_TIME, CLOCK_BONUS, clock_from_captures)
}

/// Normalize `H[:MM] [am|pm]`; bare hours without minutes or a suffix are
/// not times ("in 3 days").
fn clock_from_captures(caps: &Captures<'_>) -> Option<NaiveTime> {
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2);
    let suffix = caps.get(3).map(|m| m.as_str().to_lowercase());
    if minutes.is_none() && suffix.is_none() {
        return None;
    }
    let minute: u32 = match minutes {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let hour = match suffix.as_deref() {
        Some("am") if (1..=12).contains(&hour) => hour % 12,
        Some("pm") if (1..=12).contains(&hour) => hour % 12 + 12,
        Some(_) => return None,
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn time_keyword(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<NaiveTime>> {
    scan.find("time-keyword", &TIME_KEYWORD, KEYWORD_TIME_BONUS, |caps| {
        let (hour, minute) = match caps.get(1)?.as_str().to_lowercase().as_str() {
            "noon" => (12, 0),
            "midnight" => (0, 0),
            "morning" => (9, 0),
            "afternoon" => (14, 0),
            "evening" => (18, 0),
            "tonight" => (20, 0),
            _ => return None,
        };
        NaiveTime::from_hms_opt(hour, minute, 0)
    })
}

// ===================
// Explicit dates
// ===================

const EXPLICIT_DATE_BONUS: f64 = 0.25;

/// How many years forward a yearless date may roll looking for a valid day
/// (covers Feb 29).
const MAX_YEAR_ROLL: i32 = 8;

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:on\s+)?(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b(?:,?\s+(\d{4})\b|,\s*(\d{2})(?:$|[^:\w]))?",
        "month day",
    )
});

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?:on\s+)?(\d{4}-\d{2}-\d{2})\b", "iso date"));

static SLASH_DATE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:on\s+)?(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b",
        "slash date",
    )
});

/// Calendar dates written out explicitly, month names first.
pub const EXPLICIT_DATE_MATCHERS: &[Matcher<NaiveDate>] = &[month_day, iso_date, slash_date];

fn month_day(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("month-day", &MONTH_DAY, EXPLICIT_DATE_BONUS, |caps| {
        let month = month_from_name(caps.get(1)?.as_str())?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        // Two-digit years need a comma ("dec 24, 25") and never precede a
        // clock time ("dec 24, 10:30").
        match caps.get(3).or_else(|| caps.get(4)) {
            Some(year) => NaiveDate::from_ymd_opt(full_year(year.as_str())?, month, day),
            None => infer_year(reference, month, day),
        }
    })
}

/// Expand a written year, reading two digits as `20YY`.
fn full_year(text: &str) -> Option<i32> {
    let year: i32 = text.parse().ok()?;
    Some(if year < 100 { 2000 + year } else { year })
}

fn iso_date(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("iso-date", &ISO_DATE, EXPLICIT_DATE_BONUS, |caps| {
        parse_iso_date(caps.get(1)?.as_str())
    })
}

fn slash_date(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("slash-date", &SLASH_DATE, EXPLICIT_DATE_BONUS, |caps| {
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        match caps.get(3) {
            Some(year) => NaiveDate::from_ymd_opt(full_year(year.as_str())?, month, day),
            None => infer_year(reference, month, day),
        }
    })
}

/// Resolve a yearless month/day to its next occurrence on or after
/// `reference`. Never infers a past year.
fn infer_year(reference: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    // Reject days that exist in no year at all (Feb 30, Apr 31).
    NaiveDate::from_ymd_opt(2000, month, day)?;
    (0..=MAX_YEAR_ROLL)
        .filter_map(|offset| NaiveDate::from_ymd_opt(reference.year() + offset, month, day))
        .find(|date| *date >= reference)
}

// ===================
// Relative dates
// ===================

const RELATIVE_DATE_BONUS: f64 = 0.2;

static DAY_AFTER_TOMORROW: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:the\s+)?day\s+after\s+tomorrow\b",
        "day after tomorrow",
    )
});
static TOMORROW: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btomorrow\b", "tomorrow"));
static TODAY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btoday\b", "today"));
static IN_DAYS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\bin\s+(\d{1,4})\s+days?\b", "in n days"));
static IN_WEEKS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\bin\s+(\d{1,3})\s+weeks?\b", "in n weeks"));

/// Relative dates. "day after tomorrow" must precede "tomorrow".
pub const RELATIVE_DATE_MATCHERS: &[Matcher<NaiveDate>] =
    &[day_after_tomorrow, tomorrow, today, in_days, in_weeks];

fn day_after_tomorrow(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("day-after-tomorrow", &DAY_AFTER_TOMORROW, RELATIVE_DATE_BONUS, |_| {
        Some(add_days(reference, 2))
    })
}

fn tomorrow(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("tomorrow", &TOMORROW, RELATIVE_DATE_BONUS, |_| {
        Some(add_days(reference, 1))
    })
}

fn today(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("today", &TODAY, RELATIVE_DATE_BONUS, |_| Some(reference))
}

fn in_days(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("in-days", &IN_DAYS, RELATIVE_DATE_BONUS, |caps| {
        let days: u64 = caps.get(1)?.as_str().parse().ok()?;
        Some(add_days(reference, days))
    })
}

fn in_weeks(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("in-weeks", &IN_WEEKS, RELATIVE_DATE_BONUS, |caps| {
        let weeks: u64 = caps.get(1)?.as_str().parse().ok()?;
        Some(add_days(reference, weeks * 7))
    })
}

// ===================
// Intent
// ===================

const PROJECT_PREFIX_BONUS: f64 = 0.1;

static PROJECT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^(?:create\s+)?(?:new\s+)?project(?::\s*|\s+)",
        "project prefix",
    )
});

static PROJECT_CUE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\bproject\s+(?:named\s+)?[\w\s]+$", "project cue")
});

/// Intent matchers. A leading `project:` marks a project; a trailing
/// `project <name>` only names the project a task belongs to.
pub const INTENT_MATCHERS: &[Matcher<Intent>] = &[project_prefix, project_cue];

fn project_prefix(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<Intent>> {
    scan.find("project-prefix", &PROJECT_PREFIX, PROJECT_PREFIX_BONUS, |_| {
        Some(Intent::Project)
    })
}

fn project_cue(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<Intent>> {
    scan.find("project-cue", &PROJECT_CUE, 0.0, |_| Some(Intent::Task))
}

// ===================
// Recurrence
// ===================

/// A matched recurrence, possibly waiting on the final start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cadence {
    /// Fully specified rule.
    Fixed(RecurrenceRule),
    /// Weekly on the start date's weekday ("weekly", "every 2 weeks").
    AnchoredWeekly { interval: u32 },
    /// Monthly on the start date's day of month ("monthly").
    AnchoredMonthly { interval: u32 },
}

impl Cadence {
    /// Turn the cadence into a concrete rule once the start date is known.
    pub fn anchor(self, start: NaiveDate) -> RecurrenceRule {
        match self {
            Self::Fixed(rule) => rule,
            Self::AnchoredWeekly { interval } => RecurrenceRule::weekly(interval, &[start.weekday()]),
            Self::AnchoredMonthly { interval } => RecurrenceRule::monthly_on_day(interval, start.day()),
        }
    }

    /// Weekly rule with explicit days, if this is one.
    pub fn weekly_rule(&self) -> Option<&RecurrenceRule> {
        match self {
            Self::Fixed(rule @ RecurrenceRule::Weekly { days, .. }) if !days.is_empty() => Some(rule),
            _ => None,
        }
    }
}

/// How a recurrence proposes a start date when the phrase gave none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartHint {
    /// Leave it to the fallback rules.
    None,
    /// Next occurrence of this weekday, today included.
    Weekday(Weekday),
    /// First occurrence of the rule on or after the reference date.
    FirstOccurrence,
}

/// Result of a recurrence matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceMatch {
    pub cadence: Cadence,
    pub hint: StartHint,
}

impl RecurrenceMatch {
    const fn new(cadence: Cadence, hint: StartHint) -> Self {
        Self { cadence, hint }
    }

    /// Start date implied by the recurrence itself.
    pub fn start_hint(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match (self.hint, &self.cadence) {
            (StartHint::Weekday(day), _) => Some(next_weekday_on_or_after(reference, day)),
            (StartHint::FirstOccurrence, Cadence::Fixed(rule)) => {
                generate_occurrences(reference, Some(rule), 1).first().copied()
            },
            _ => None,
        }
    }
}

static DAILY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:daily|every\s+day|each\s+day)\b", "daily"));

static EVERY_INTERVAL: Lazy<Regex> = Lazy::new(|| {
    compile(
        &format!(
            r"(?i)\b(?:every|each)\s+(\d{{1,2}}|other)\s+(day|week|month)s?\b(?:\s+on\s+({WEEKDAY}(?:{LIST_SEPARATOR}{WEEKDAY})*))?"
        ),
        "every interval",
    )
});

static WORKWEEK: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:(?:every|each)\s+weekdays?|(?:on\s+)?weekdays)\b",
        "weekdays",
    )
});

static WEEKEND: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:(?:every|each)\s+weekends?|(?:on\s+)?weekends)\b",
        "weekends",
    )
});

static WEEKLY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(?:weekly|every\s+week|each\s+week)\b", "weekly"));

static EVERY_WEEKDAY_LIST: Lazy<Regex> = Lazy::new(|| {
    compile(
        &format!(r"(?i)\b(?:every|each)\s+({WEEKDAY}(?:{LIST_SEPARATOR}{WEEKDAY})*)"),
        "weekday list",
    )
});

static WEEKDAY_TOKEN: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{WEEKDAY}"), "weekday token"));

static EVERY_ORDINAL_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    compile(
        &format!(
            r"(?i)\b(?:every|each)\s+({ORDINAL})\s+({WEEKDAY})(?:\s+of\s+(?:the|each|every)\s+month\b)?"
        ),
        "every ordinal weekday",
    )
});

static ORDINAL_WEEKDAY_OF_MONTH: Lazy<Regex> = Lazy::new(|| {
    compile(
        &format!(
            r"(?i)\b(?:on\s+)?the\s+({ORDINAL})\s+({WEEKDAY})\s+of\s+(?:each|every)\s+month\b"
        ),
        "ordinal weekday of month",
    )
});

static DAY_OF_EACH_MONTH: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:on\s+)?the\s+(\d{1,2})(?:st|nd|rd|th)\s+(?:of\s+)?(?:each|every)\s+month\b",
        "day of each month",
    )
});

static MONTHLY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:monthly|every\s+month|each\s+month)\b(?:\s+on\s+the\s+(\d{1,2})(?:st|nd|rd|th)?\b)?",
        "monthly",
    )
});

/// Recurrence matchers in priority order. At most one rule per phrase.
pub const RECURRENCE_MATCHERS: &[Matcher<RecurrenceMatch>] = &[
    daily,
    every_interval,
    every_weekday,
    every_weekend,
    weekly,
    every_weekday_list,
    every_ordinal_weekday,
    ordinal_weekday_of_month,
    day_of_each_month,
    monthly,
];

fn daily(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("daily", &DAILY, 0.25, |_| {
        Some(RecurrenceMatch::new(
            Cadence::Fixed(RecurrenceRule::daily(1)),
            StartHint::None,
        ))
    })
}

fn every_interval(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("every-interval", &EVERY_INTERVAL, 0.25, |caps| {
        let interval = match caps.get(1)?.as_str().to_lowercase().as_str() {
            "other" => 2,
            n => n.parse::<u32>().ok()?.max(1),
        };
        let unit = caps.get(2)?.as_str().to_lowercase();
        let matched = match (unit.as_str(), caps.get(3)) {
            ("day", _) => RecurrenceMatch::new(
                Cadence::Fixed(RecurrenceRule::daily(interval)),
                StartHint::None,
            ),
            ("week", Some(list)) => RecurrenceMatch::new(
                Cadence::Fixed(RecurrenceRule::weekly(interval, &weekday_list(list.as_str()))),
                StartHint::FirstOccurrence,
            ),
            ("week", None) => {
                RecurrenceMatch::new(Cadence::AnchoredWeekly { interval }, StartHint::None)
            },
            ("month", _) => {
                RecurrenceMatch::new(Cadence::AnchoredMonthly { interval }, StartHint::None)
            },
            _ => return None,
        };
        Some(matched)
    })
}

fn every_weekday(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("every-weekday", &WORKWEEK, 0.25, |_| {
        Some(RecurrenceMatch::new(
            Cadence::Fixed(RecurrenceRule::workweek()),
            StartHint::None,
        ))
    })
}

fn every_weekend(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("every-weekend", &WEEKEND, 0.25, |_| {
        Some(RecurrenceMatch::new(
            Cadence::Fixed(RecurrenceRule::weekend()),
            StartHint::None,
        ))
    })
}

fn weekly(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("weekly", &WEEKLY, 0.2, |_| {
        Some(RecurrenceMatch::new(
            Cadence::AnchoredWeekly { interval: 1 },
            StartHint::None,
        ))
    })
}

fn every_weekday_list(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("every-weekday-list", &EVERY_WEEKDAY_LIST, 0.3, |caps| {
        let days = weekday_list(caps.get(1)?.as_str());
        let first = *days.first()?;
        Some(RecurrenceMatch::new(
            Cadence::Fixed(RecurrenceRule::weekly(1, &days)),
            StartHint::Weekday(first),
        ))
    })
}

fn every_ordinal_weekday(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("every-ordinal-weekday", &EVERY_ORDINAL_WEEKDAY, 0.3, ordinal_weekday)
}

fn ordinal_weekday_of_month(
    scan: &Scan<'_>,
    _reference: NaiveDate,
) -> Option<Hit<RecurrenceMatch>> {
    scan.find("ordinal-weekday-of-month", &ORDINAL_WEEKDAY_OF_MONTH, 0.3, ordinal_weekday)
}

fn ordinal_weekday(caps: &Captures<'_>) -> Option<RecurrenceMatch> {
    let ordinal = ordinal_from_word(caps.get(1)?.as_str())?;
    let weekday = weekday_from_name(caps.get(2)?.as_str())?;
    Some(RecurrenceMatch::new(
        Cadence::Fixed(RecurrenceRule::monthly_on_weekday(1, ordinal, weekday)),
        StartHint::FirstOccurrence,
    ))
}

fn day_of_each_month(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    scan.find("day-of-each-month", &DAY_OF_EACH_MONTH, 0.25, |caps| {
        monthly_on_day(caps.get(1)?.as_str())
    })
}

fn monthly(scan: &Scan<'_>, _reference: NaiveDate) -> Option<Hit<RecurrenceMatch>> {
    // Bonus depends on whether a day was given, so find first and adjust.
    let mut hit = scan.find("monthly", &MONTHLY, 0.2, |caps| match caps.get(1) {
        Some(day) => monthly_on_day(day.as_str()),
        None => Some(RecurrenceMatch::new(
            Cadence::AnchoredMonthly { interval: 1 },
            StartHint::None,
        )),
    })?;
    if matches!(hit.value.cadence, Cadence::Fixed(_)) {
        hit.confidence = 0.25;
    }
    Some(hit)
}

fn monthly_on_day(day: &str) -> Option<RecurrenceMatch> {
    let day: u32 = day.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(RecurrenceMatch::new(
        Cadence::Fixed(RecurrenceRule::monthly_on_day(1, day)),
        StartHint::FirstOccurrence,
    ))
}

/// Unique weekdays of a list phrase, in the order written.
fn weekday_list(text: &str) -> Vec<Weekday> {
    let mut days = Vec::new();
    for token in WEEKDAY_TOKEN.find_iter(text) {
        if let Some(day) = weekday_from_name(token.as_str()) {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}

// ===================
// Bare weekdays
// ===================

const WEEKDAY_NAME_BONUS: f64 = 0.2;

static WEEKDAY_NAME: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(?:(next|this|on)\s+)?(sunday|monday|tuesday|wednesday|thursday|friday|saturday)\b",
        "weekday name",
    )
});

/// Fallback start-date matchers used when nothing else set a date.
pub const WEEKDAY_MATCHERS: &[Matcher<NaiveDate>] = &[weekday_name];

/// "friday", "on friday", "this friday" (today allowed), "next friday"
/// (strictly after today).
fn weekday_name(scan: &Scan<'_>, reference: NaiveDate) -> Option<Hit<NaiveDate>> {
    scan.find("weekday-name", &WEEKDAY_NAME, WEEKDAY_NAME_BONUS, |caps| {
        let weekday = weekday_from_name(caps.get(2)?.as_str())?;
        let is_next = caps
            .get(1)
            .is_some_and(|m| m.as_str().eq_ignore_ascii_case("next"));
        Some(if is_next {
            next_weekday_after(reference, weekday)
        } else {
            next_weekday_on_or_after(reference, weekday)
        })
    })
}
