//! Recurrence rules and occurrence generation.

mod occurrences;
mod rule;

pub use occurrences::generate_occurrences;
pub use rule::{MonthlyPattern, RecurrenceFrequency, RecurrenceRule};
