//! Output formatting for planwise.
//!
//! This module provides formatters for displaying parse results, templates
//! and occurrence lists in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::PlannerError;
use crate::features::nlp::ParseResult;
use crate::features::recurrence::RecurrenceRule;
use crate::features::templates::RecurringTemplate;

pub use json::*;
pub use pretty::*;

/// Format a parse result, optionally with its templates.
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_parse(
    result: &ParseResult,
    templates: Option<&[RecurringTemplate]>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_pretty(result, templates)),
        OutputFormat::Json => format_parse_json(result, templates),
    }
}

/// Format recurring templates
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_templates(
    templates: &[RecurringTemplate],
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_templates_pretty(templates)),
        OutputFormat::Json => format_templates_json(templates),
    }
}

/// Format an occurrence list generated from `rule`
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_occurrences(
    dates: &[NaiveDate],
    rule: Option<&RecurrenceRule>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_occurrences_pretty(dates, rule)),
        OutputFormat::Json => format_occurrences_json(dates, rule),
    }
}
