//! Occurrence generation.
//!
//! Expands a [`RecurrenceRule`] from a start date into concrete dates. The
//! parser and the template builder both go through [`generate_occurrences`].

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::rule::{MonthlyPattern, RecurrenceRule};
use crate::core::calendar::{month_start_after, weekday_index};

/// Upper bound on months scanned for a monthly rule (100 years).
const MAX_MONTHS_SCANNED: u32 = 1200;

/// Generate up to `count` occurrences of `rule` starting at `start`.
///
/// - No rule yields `[start]` whatever the count.
/// - Every returned date is `>= start` and the list is strictly ascending.
/// - The list is never empty; a rule that cannot produce any date within the
///   scan window falls back to `[start]`.
/// - A `count` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use planwise::{generate_occurrences, RecurrenceRule};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let dates = generate_occurrences(start, Some(&RecurrenceRule::daily(2)), 3);
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
/// ```
#[must_use]
pub fn generate_occurrences(
    start: NaiveDate,
    rule: Option<&RecurrenceRule>,
    count: usize,
) -> Vec<NaiveDate> {
    let count = count.max(1);
    let Some(rule) = rule else {
        return vec![start];
    };

    let occurrences = match rule {
        RecurrenceRule::Daily { interval } => daily(start, *interval, count),
        RecurrenceRule::Weekly { interval, days } => weekly(start, *interval, days, count),
        RecurrenceRule::Monthly { interval, pattern } => monthly(start, *interval, pattern, count),
    };

    if occurrences.is_empty() {
        vec![start]
    } else {
        occurrences
    }
}

fn daily(start: NaiveDate, interval: u32, count: usize) -> Vec<NaiveDate> {
    let step = Days::new(u64::from(interval.max(1)));
    std::iter::successors(Some(start), |d| d.checked_add_days(step))
        .take(count)
        .collect()
}

/// Walk day by day from `start`, keeping days in the rule's set.
///
/// With `interval > 1` the active weeks are Sunday-based calendar weeks
/// counted from the week containing `start`, not 7-day blocks counted from
/// `start` itself. Starting on a Wednesday every 2 weeks on Mon/Wed gives
/// Jan 3, 15, 17 rather than Jan 3, 17, 22.
fn weekly(start: NaiveDate, interval: u32, days: &[Weekday], count: usize) -> Vec<NaiveDate> {
    // Set semantics: order and repeats in `days` never matter.
    let mut active = [false; 7];
    if days.is_empty() {
        active[usize::from(weekday_index(start.weekday()))] = true;
    }
    for day in days {
        active[usize::from(weekday_index(*day))] = true;
    }

    let interval = i64::from(interval.max(1));
    let week_start = start
        .checked_sub_days(Days::new(u64::from(weekday_index(start.weekday()))))
        .unwrap_or(start);

    let mut occurrences = Vec::with_capacity(count);
    let mut cursor = start;
    while occurrences.len() < count {
        let week = (cursor - week_start).num_days() / 7;
        if week % interval == 0 && active[usize::from(weekday_index(cursor.weekday()))] {
            occurrences.push(cursor);
        }
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    occurrences
}

fn monthly(
    start: NaiveDate,
    interval: u32,
    pattern: &MonthlyPattern,
    count: usize,
) -> Vec<NaiveDate> {
    let step = interval.max(1);
    let mut occurrences = Vec::with_capacity(count);
    let mut offset = 0;
    while occurrences.len() < count && offset <= MAX_MONTHS_SCANNED {
        let Some(month) = month_start_after(start, offset) else {
            break;
        };
        if let Some(candidate) = pattern.resolve_in(month.year(), month.month()) {
            if candidate >= start {
                occurrences.push(candidate);
            }
        }
        offset += step;
    }
    occurrences
}
