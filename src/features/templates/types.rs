//! Recurring template data types.

use chrono::NaiveDate;
use serde::Serialize;

/// Default number of source occurrences considered when building templates.
pub const DEFAULT_TEMPLATE_OCCURRENCES: usize = 4;

/// Which quick-pick a template represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Just the first occurrence.
    Single,
    /// The next two occurrences.
    Two,
    /// The next three occurrences.
    Three,
}

impl TemplateId {
    /// Number of occurrences the template covers.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// All ids in emission order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Two, Self::Three];
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Two => "two",
            Self::Three => "three",
        })
    }
}

/// A labeled prefix of a parse result's occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringTemplate {
    pub id: TemplateId,
    /// Short display text, e.g. `Fri 5`.
    pub label: String,
    /// Longer display text including the recurrence label.
    pub description: String,
    /// Non-empty prefix of the source occurrences.
    pub occurrences: Vec<NaiveDate>,
}

/// Options for [`build_recurring_templates`](super::build_recurring_templates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Source occurrences are sliced to this many before building.
    pub max_occurrences: usize,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_TEMPLATE_OCCURRENCES,
        }
    }
}

impl TemplateOptions {
    #[must_use]
    pub const fn with_max_occurrences(mut self, max: usize) -> Self {
        self.max_occurrences = max;
        self
    }
}
