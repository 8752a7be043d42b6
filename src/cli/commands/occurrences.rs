//! Occurrences command implementation.

use crate::cli::args::{join_phrase, OccurrencesArgs, OutputFormat};
use crate::config::Config;
use crate::core::calendar::parse_iso_date;
use crate::error::PlannerError;
use crate::features::nlp::parse_planner_phrase;
use crate::features::recurrence::generate_occurrences;
use crate::output::format_occurrences;

/// Execute the occurrences command.
///
/// The phrase is parsed against `--start` to find its recurrence; occurrences
/// are then generated from `--start` itself.
///
/// # Errors
///
/// Returns an error if `--start` is not a valid date, the phrase is empty, or
/// output formatting fails.
pub fn occurrences(
    args: OccurrencesArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let start = parse_iso_date(&args.start).ok_or_else(|| {
        PlannerError::invalid_input(format!(
            "Invalid start date: {} (expected YYYY-MM-DD)",
            args.start
        ))
    })?;
    let phrase = join_phrase(&args.phrase);
    let options = config.parse_options().with_reference(start);
    let result = parse_planner_phrase(&phrase, &options)
        .ok_or_else(|| PlannerError::invalid_input("Phrase is empty"))?;

    let count = args.count.unwrap_or(config.parser.max_occurrences);
    let dates = generate_occurrences(start, result.recurrence.as_ref(), count);
    format_occurrences(&dates, result.recurrence.as_ref(), format)
}
