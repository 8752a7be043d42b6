//! Quick-pick templates over a parse result.

use chrono::NaiveDate;

use super::types::{RecurringTemplate, TemplateId, TemplateOptions};
use crate::core::calendar::{long_label, short_label};
use crate::features::nlp::ParseResult;

/// Build the "single / two / three" templates for a recurring result.
///
/// Returns an empty list when the result has no recurrence or fewer than two
/// occurrences remain after slicing to `options.max_occurrences`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use planwise::{build_recurring_templates, parse_planner_phrase, ParseOptions, TemplateOptions};
///
/// let options = ParseOptions::default().with_reference(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let result = parse_planner_phrase("daily standup", &options).unwrap();
/// let templates = build_recurring_templates(&result, &TemplateOptions::default());
/// assert_eq!(templates.len(), 3);
/// assert_eq!(templates[0].label, "Mon 1");
/// ```
#[must_use]
pub fn build_recurring_templates(
    result: &ParseResult,
    options: &TemplateOptions,
) -> Vec<RecurringTemplate> {
    let Some(rule) = &result.recurrence else {
        return Vec::new();
    };
    let available = result.occurrences.len().min(options.max_occurrences);
    if available < 2 {
        return Vec::new();
    }
    let source = &result.occurrences[..available];
    let rule_label = rule.to_string();

    TemplateId::ALL
        .iter()
        .filter(|id| id.count() <= available)
        .map(|&id| {
            let occurrences = source[..id.count()].to_vec();
            RecurringTemplate {
                id,
                label: label_for(id, &occurrences),
                description: description_for(id, &occurrences, &rule_label),
                occurrences,
            }
        })
        .collect()
}

fn label_for(id: TemplateId, occurrences: &[NaiveDate]) -> String {
    match (id, occurrences.first()) {
        (TemplateId::Single, Some(first)) => short_label(*first),
        _ => format!("Next {}", id.count()),
    }
}

fn description_for(id: TemplateId, occurrences: &[NaiveDate], rule_label: &str) -> String {
    let dates = match id {
        TemplateId::Single => occurrences.iter().copied().map(long_label).collect::<Vec<_>>(),
        TemplateId::Two | TemplateId::Three => {
            occurrences.iter().copied().map(short_label).collect::<Vec<_>>()
        },
    };
    format!("{} · {rule_label}", dates.join(", "))
}
