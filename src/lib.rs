//! planwise - natural language planner phrases
//!
//! This crate parses short scheduling phrases such as "daily standup at 9am"
//! or "every first friday review" into a start date, an optional time, an
//! optional recurrence rule and its next occurrences, and offers quick-pick
//! templates over recurring results.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::calendar::ReferenceDate;
pub use error::PlannerError;
pub use features::nlp::{parse_planner_phrase, Intent, ParseOptions, ParseResult};
pub use features::recurrence::{
    generate_occurrences, MonthlyPattern, RecurrenceFrequency, RecurrenceRule,
};
pub use features::templates::{
    build_recurring_templates, RecurringTemplate, TemplateId, TemplateOptions,
};
