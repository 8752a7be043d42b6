use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use crate::core::calendar::{medium_label, short_label, to_iso_date};
use crate::features::nlp::{Intent, ParseResult};
use crate::features::recurrence::RecurrenceRule;
use crate::features::templates::RecurringTemplate;

fn confidence_badge(confidence: f64) -> ColoredString {
    let text = format!("{:.0}%", confidence * 100.0);
    if confidence >= 0.75 {
        text.green()
    } else if confidence >= 0.5 {
        text.yellow()
    } else {
        text.red()
    }
}

fn occurrence_line(date: NaiveDate) -> String {
    format!("    • {}  {}\n", to_iso_date(date), short_label(date).dimmed())
}

/// Format a parse result as pretty output
pub fn format_parse_pretty(result: &ParseResult, templates: Option<&[RecurringTemplate]>) -> String {
    let mut output = format!("{}\n", result.title.bold());
    if result.intent == Intent::Project {
        output.push_str(&format!("  {}: {}\n", "Intent".dimmed(), "project".magenta()));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Start".dimmed(),
        medium_label(result.start_date).yellow()
    ));

    if let Some(time) = result.time_label() {
        output.push_str(&format!("  {}: {}\n", "Time".dimmed(), time.yellow()));
    }

    if let Some(rule) = &result.recurrence {
        output.push_str(&format!(
            "  {}: {}\n",
            "Repeats".dimmed(),
            rule.to_string().cyan()
        ));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Confidence".dimmed(),
        confidence_badge(result.confidence)
    ));

    output.push_str(&format!("  {}:\n", "Occurrences".dimmed()));
    for date in &result.occurrences {
        output.push_str(&occurrence_line(*date));
    }

    if let Some(templates) = templates {
        output.push('\n');
        output.push_str(&format_templates_pretty(templates));
    }

    output
}

/// Format recurring templates as pretty output
pub fn format_templates_pretty(templates: &[RecurringTemplate]) -> String {
    if templates.is_empty() {
        return "Templates (0)\n  Not a recurring phrase".to_string();
    }

    let mut output = format!("Templates ({})\n", templates.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for template in templates {
        output.push_str(&format!(
            "{:<6} {}  {}\n",
            template.id.to_string().cyan(),
            template.label.bold(),
            template.description.dimmed()
        ));
    }

    output
}

/// Format an occurrence list as pretty output
pub fn format_occurrences_pretty(dates: &[NaiveDate], rule: Option<&RecurrenceRule>) -> String {
    let heading = rule.map_or_else(|| "Once".to_string(), ToString::to_string);
    let mut output = format!("{} ({})\n", heading.bold(), dates.len());
    for date in dates {
        output.push_str(&occurrence_line(*date));
    }
    output
}
