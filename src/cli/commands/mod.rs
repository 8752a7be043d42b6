//! Command implementations for planwise.
//!
//! This module contains the implementation of all CLI commands. Each command
//! returns the text to print so it can be tested without a terminal.

mod config;
mod occurrences;
mod parse;
mod shell;

pub use config::config;
pub use occurrences::occurrences;
pub use parse::{parse, templates};
pub use shell::completions;

use crate::core::calendar::parse_reference_date;
use crate::error::PlannerError;
use crate::features::nlp::ParseOptions;

/// Validate a `--reference` flag and fold it into parser options.
fn with_reference(
    options: ParseOptions,
    reference: Option<&str>,
) -> Result<ParseOptions, PlannerError> {
    match reference {
        None => Ok(options),
        Some(text) => {
            let date = parse_reference_date(text).ok_or_else(|| {
                PlannerError::invalid_input(format!(
                    "Invalid reference date: {text} (expected YYYY-MM-DD)"
                ))
            })?;
            Ok(options.with_reference(date))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_with_reference() {
        let options = with_reference(ParseOptions::default(), Some("2024-01-01")).unwrap();
        assert_eq!(
            options.reference_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_with_reference_rejects_bad_dates() {
        let err = with_reference(ParseOptions::default(), Some("2024-02-30")).unwrap_err();
        assert!(err.to_string().contains("2024-02-30"));
    }

    #[test]
    fn test_without_reference_keeps_options() {
        let options = with_reference(ParseOptions::default(), None).unwrap();
        assert_eq!(options, ParseOptions::default());
    }
}
