//! Planner phrase parser.
//!
//! Parses strings like "daily standup at 9am" or "every first friday review"
//! into a title, a start date, an optional time, an optional recurrence rule
//! and the first few occurrences.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::matchers::{
    first_hit, RecurrenceMatch, EXPLICIT_DATE_MATCHERS, INTENT_MATCHERS, RECURRENCE_MATCHERS,
    RELATIVE_DATE_MATCHERS, TIME_MATCHERS, WEEKDAY_MATCHERS,
};
use super::scan::Scan;
use super::types::{Intent, ParseOptions, ParseResult};
use crate::features::recurrence::generate_occurrences;

/// Confidence every non-empty phrase starts with.
const BASE_CONFIDENCE: f64 = 0.4;

static FILLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:on|at|every|each|next|this|for|the|a|an)\b")
        .unwrap_or_else(|e| panic!("Invalid filler regex: {e}"))
});

/// Parse a planner phrase relative to the options' reference date.
///
/// Returns `None` only when the phrase is empty or whitespace. Anything else
/// yields a result, falling back to the reference date and the phrase itself
/// as title when nothing is recognised.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use planwise::{parse_planner_phrase, ParseOptions};
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let options = ParseOptions::default().with_reference(monday);
///
/// let result = parse_planner_phrase("every first friday review", &options).unwrap();
/// assert_eq!(result.title, "review");
/// assert_eq!(result.start_date_iso(), "2024-01-05");
/// assert!(result.is_recurring());
///
/// assert!(parse_planner_phrase("   ", &options).is_none());
/// ```
#[must_use]
pub fn parse_planner_phrase(phrase: &str, options: &ParseOptions) -> Option<ParseResult> {
    let text = phrase.trim();
    if text.is_empty() {
        return None;
    }

    let reference = options.reference_date();
    let mut scan = Scan::new(text, BASE_CONFIDENCE);

    let hit = first_hit(TIME_MATCHERS, &scan, reference);
    let time = scan.accept(hit);

    let hit = first_hit(EXPLICIT_DATE_MATCHERS, &scan, reference);
    let mut start = scan.accept(hit);
    if start.is_none() {
        let hit = first_hit(RELATIVE_DATE_MATCHERS, &scan, reference);
        start = scan.accept(hit);
    }

    let hit = first_hit(RECURRENCE_MATCHERS, &scan, reference);
    let recurrence = scan.accept(hit);
    if start.is_none() {
        start = recurrence.as_ref().and_then(|m| m.start_hint(reference));
    }

    let start_date = match start {
        Some(date) => date,
        None => fallback_start(&mut scan, reference, recurrence.as_ref()),
    };

    // Intent runs last so a trailing project name never swallows scheduling words.
    let hit = first_hit(INTENT_MATCHERS, &scan, reference);
    let intent = scan.accept(hit).unwrap_or_default();

    let rule = recurrence.map(|m| m.cadence.anchor(start_date));
    let occurrences = generate_occurrences(start_date, rule.as_ref(), options.max_occurrences);
    let title = derive_title(&scan.remainder(), text);
    let confidence = scan.confidence().clamp(0.0, 1.0);

    debug!(%start_date, ?rule, confidence, "parsed planner phrase");

    Some(ParseResult {
        title,
        intent,
        start_date,
        time,
        recurrence: rule,
        occurrences,
        confidence,
    })
}

/// Start date when neither a date nor the recurrence pinned one down.
fn fallback_start(
    scan: &mut Scan<'_>,
    reference: NaiveDate,
    recurrence: Option<&RecurrenceMatch>,
) -> NaiveDate {
    let hit = first_hit(WEEKDAY_MATCHERS, scan, reference);
    if let Some(date) = scan.accept(hit) {
        return date;
    }
    recurrence
        .and_then(|m| m.cadence.weekly_rule())
        .and_then(|rule| generate_occurrences(reference, Some(rule), 1).first().copied())
        .unwrap_or(reference)
}

/// Strip filler words from what is left of the phrase.
fn derive_title(remainder: &str, phrase: &str) -> String {
    let stripped = FILLER_PATTERN.replace_all(remainder, " ");
    let collapsed = stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" ,", ",");
    let title = collapsed.trim_matches(|c: char| c == ',' || c.is_whitespace());
    if title.is_empty() {
        phrase.to_string()
    } else {
        title.to_string()
    }
}
