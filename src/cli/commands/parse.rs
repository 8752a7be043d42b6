//! Parse and templates command implementations.
//!
//! This module implements `planwise parse` and `planwise templates`.

use tracing::debug;

use super::with_reference;
use crate::cli::args::{join_phrase, OutputFormat, ParseArgs, TemplatesArgs};
use crate::config::Config;
use crate::error::PlannerError;
use crate::features::nlp::{parse_planner_phrase, ParseOptions, ParseResult};
use crate::features::templates::build_recurring_templates;
use crate::output::{format_parse, format_templates};

/// Parse a phrase, turning "nothing to parse" into a CLI error.
fn parse_phrase(phrase: &str, options: &ParseOptions) -> Result<ParseResult, PlannerError> {
    parse_planner_phrase(phrase, options)
        .ok_or_else(|| PlannerError::invalid_input("Phrase is empty"))
}

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if the phrase is empty, `--reference` is not a valid
/// date, or output formatting fails.
pub fn parse(args: ParseArgs, config: &Config, format: OutputFormat) -> Result<String, PlannerError> {
    let phrase = join_phrase(&args.phrase);
    let mut options = with_reference(config.parse_options(), args.reference.as_deref())?;
    if let Some(max) = args.max {
        options = options.with_max_occurrences(max);
    }
    debug!(%phrase, max = options.max_occurrences, "parse command");

    let result = parse_phrase(&phrase, &options)?;
    let templates = args
        .templates
        .then(|| build_recurring_templates(&result, &config.template_options()));

    format_parse(&result, templates.as_deref(), format)
}

/// Execute the templates command.
///
/// # Errors
///
/// Returns an error if the phrase is empty, `--reference` is not a valid
/// date, or output formatting fails.
pub fn templates(
    args: TemplatesArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let phrase = join_phrase(&args.phrase);
    let options = with_reference(config.parse_options(), args.reference.as_deref())?;
    let mut template_options = config.template_options();
    if let Some(max) = args.max {
        template_options = template_options.with_max_occurrences(max);
    }
    // Parse at least as many occurrences as the templates may use.
    let max = options.max_occurrences.max(template_options.max_occurrences);
    let options = options.with_max_occurrences(max);

    let result = parse_phrase(&phrase, &options)?;
    let templates = build_recurring_templates(&result, &template_options);
    format_templates(&templates, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(phrase: &str) -> ParseArgs {
        ParseArgs {
            phrase: phrase.split(' ').map(str::to_string).collect(),
            reference: Some("2024-01-01".to_string()),
            max: None,
            templates: false,
        }
    }

    fn templates_args(phrase: &str) -> TemplatesArgs {
        TemplatesArgs {
            phrase: vec![phrase.to_string()],
            reference: Some("2024-01-01".to_string()),
            max: None,
        }
    }

    #[test]
    fn test_parse_json() {
        let output = parse(parse_args("daily standup at 9am"), &Config::default(), OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "standup");
        assert_eq!(value["time"], "09:00");
        assert_eq!(value["occurrences"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_parse_max_flag_overrides_config() {
        let mut args = parse_args("daily standup");
        args.max = Some(2);
        let mut config = Config::default();
        config.parser.max_occurrences = 9;
        let output = parse(args, &config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["occurrences"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_uses_config_max() {
        let mut config = Config::default();
        config.parser.max_occurrences = 6;
        let output = parse(parse_args("daily standup"), &config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["occurrences"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_parse_with_templates() {
        let mut args = parse_args("every first friday review");
        args.templates = true;
        let output = parse(args, &Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["templates"].as_array().unwrap().len(), 3);
        assert_eq!(value["templates"][0]["label"], "Fri 5");
    }

    #[test]
    fn test_parse_empty_phrase_is_error() {
        let err = parse(parse_args("  "), &Config::default(), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_bad_reference_is_error() {
        let mut args = parse_args("tomorrow");
        args.reference = Some("yesterday".to_string());
        assert!(parse(args, &Config::default(), OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_templates_json() {
        let output =
            templates(templates_args("every monday and wednesday gym"), &Config::default(), OutputFormat::Json)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["items"][0]["id"], "single");
        assert_eq!(value["items"][2]["occurrences"][2], "2024-01-08");
    }

    #[test]
    fn test_templates_non_recurring_is_empty() {
        let output =
            templates(templates_args("dentist tomorrow"), &Config::default(), OutputFormat::Json)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn test_templates_parse_enough_occurrences() {
        let mut config = Config::default();
        config.parser.max_occurrences = 2;
        let output =
            templates(templates_args("daily standup"), &config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["items"][2]["occurrences"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_templates_respects_max() {
        let mut args = templates_args("daily standup");
        args.max = Some(2);
        let output = templates(args, &Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
    }
}
