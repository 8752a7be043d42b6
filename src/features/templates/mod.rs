//! Recurring templates for planwise.
//!
//! Given a recurring [`ParseResult`](crate::features::nlp::ParseResult), this
//! module offers up to three quick-pick choices: just the first occurrence,
//! the next two, or the next three.

mod builder;
mod types;

pub use builder::build_recurring_templates;
pub use types::{RecurringTemplate, TemplateId, TemplateOptions, DEFAULT_TEMPLATE_OCCURRENCES};
