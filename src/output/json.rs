//! JSON output formatting for planwise.

use chrono::NaiveDate;
use serde_json::json;

use crate::error::PlannerError;
use crate::features::nlp::ParseResult;
use crate::features::recurrence::RecurrenceRule;
use crate::features::templates::RecurringTemplate;

/// Format a parse result as JSON, with a `templates` field when given
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_parse_json(
    result: &ParseResult,
    templates: Option<&[RecurringTemplate]>,
) -> Result<String, PlannerError> {
    let mut output = serde_json::to_value(result)?;
    if let Some(templates) = templates {
        output["templates"] = serde_json::to_value(templates)?;
    }
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format templates as JSON
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_templates_json(templates: &[RecurringTemplate]) -> Result<String, PlannerError> {
    let output = json!({
        "count": templates.len(),
        "items": templates
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format occurrences as JSON
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_occurrences_json(
    dates: &[NaiveDate],
    rule: Option<&RecurrenceRule>,
) -> Result<String, PlannerError> {
    let output = json!({
        "recurrence": rule,
        "label": rule.map(ToString::to_string),
        "count": dates.len(),
        "items": dates
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
