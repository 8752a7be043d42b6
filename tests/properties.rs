//! Invariants checked over a corpus of phrases and reference dates.

use chrono::NaiveDate;
use planwise::{build_recurring_templates, parse_planner_phrase, ParseOptions, TemplateOptions};

const PHRASES: &[&str] = &[
    "daily standup at 9am",
    "Daily standup tomorrow at 9am",
    "every monday and wednesday gym",
    "every tue, thu & sat swim at 6:30am",
    "every first friday review",
    "book club on the 3rd thursday of every month",
    "every fifth friday party",
    "pay rent on the 3rd each month",
    "backup monthly",
    "backup monthly on the 31st",
    "weekly sync friday",
    "payroll every other week",
    "1:1 every 2 weeks on mon and wed",
    "water plants every 3 days",
    "standup every weekday",
    "hike on weekends",
    "dentist day after tomorrow at 3:15pm",
    "lunch at noon today",
    "party feb 29",
    "launch 12/25",
    "ship 2024-12-25",
    "review next monday",
    "in 10 days renew passport",
    "call mom, tomorrow",
    "just a plain title",
    "every",
    "at",
    "买牛奶 tomorrow",
];

fn references() -> Vec<NaiveDate> {
    [(2024, 1, 1), (2024, 2, 29), (2024, 12, 31), (2025, 6, 15)]
        .iter()
        .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        .collect()
}

fn each_result(max: usize, mut check: impl FnMut(&str, NaiveDate, &planwise::ParseResult)) {
    for reference in references() {
        let options = ParseOptions::default()
            .with_reference(reference)
            .with_max_occurrences(max);
        for phrase in PHRASES {
            let result = parse_planner_phrase(phrase, &options)
                .unwrap_or_else(|| panic!("no result for {phrase:?}"));
            check(phrase, reference, &result);
        }
    }
}

#[test]
fn test_parse_is_idempotent() {
    for reference in references() {
        let options = ParseOptions::default().with_reference(reference);
        for phrase in PHRASES {
            assert_eq!(
                parse_planner_phrase(phrase, &options),
                parse_planner_phrase(phrase, &options),
                "{phrase}"
            );
        }
    }
}

#[test]
fn test_occurrences_are_ascending_and_not_before_start() {
    each_result(6, |phrase, _, result| {
        assert!(
            result.occurrences.windows(2).all(|w| w[0] < w[1]),
            "{phrase}: {:?}",
            result.occurrences
        );
        assert!(
            result.occurrences.iter().all(|d| *d >= result.start_date),
            "{phrase}"
        );
    });
}

#[test]
fn test_occurrence_count_is_bounded() {
    for max in [0, 1, 3, 7] {
        each_result(max, |phrase, _, result| {
            let len = result.occurrences.len();
            assert!(len >= 1 && len <= max.max(1), "{phrase}: {len} with max {max}");
            if result.recurrence.is_none() {
                assert_eq!(len, 1, "{phrase}");
            }
        });
    }
}

#[test]
fn test_confidence_within_unit_interval() {
    each_result(4, |phrase, _, result| {
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "{phrase}: {}",
            result.confidence
        );
        assert!(result.confidence >= 0.4, "{phrase}");
    });
}

#[test]
fn test_title_is_never_empty() {
    each_result(4, |phrase, _, result| {
        assert!(!result.title.trim().is_empty(), "{phrase}");
    });
}

#[test]
fn test_start_date_is_not_before_reference() {
    each_result(4, |phrase, reference, result| {
        if phrase.contains("2024-12-25") {
            return;
        }
        assert!(result.start_date >= reference, "{phrase} @ {reference}");
    });
}

#[test]
fn test_templates_are_bounded_prefixes() {
    each_result(4, |phrase, _, result| {
        for max in [1, 2, 3, 4] {
            let templates =
                build_recurring_templates(result, &TemplateOptions::default().with_max_occurrences(max));
            let available = result.occurrences.len().min(max);
            if result.recurrence.is_none() || available < 2 {
                assert!(templates.is_empty(), "{phrase}");
                continue;
            }
            assert!(templates.len() <= available.min(3), "{phrase}");
            for template in &templates {
                assert!(!template.occurrences.is_empty());
                assert!(result.occurrences.starts_with(&template.occurrences), "{phrase}");
            }
        }
    });
}

#[test]
fn test_tomorrow_and_day_after_differ_by_one_day() {
    for reference in references() {
        let options = ParseOptions::default().with_reference(reference);
        let tomorrow = parse_planner_phrase("tomorrow", &options).unwrap();
        let after = parse_planner_phrase("day after tomorrow", &options).unwrap();
        assert_eq!((after.start_date - tomorrow.start_date).num_days(), 1);
    }
}
