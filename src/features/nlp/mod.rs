//! Natural language parsing for planner phrases.
//!
//! This module turns free text like:
//! - "daily standup at 9am"
//! - "every monday and wednesday gym"
//! - "pay rent on the 3rd each month"
//!
//! into a [`ParseResult`] with a start date, optional time and recurrence.

mod matchers;
mod parser;
mod scan;
mod types;

pub use parser::parse_planner_phrase;
pub use types::{Intent, ParseOptions, ParseResult, DEFAULT_MAX_OCCURRENCES};
