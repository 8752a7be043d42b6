//! Parser inputs and outputs.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::core::calendar::{
    medium_label, resolve_reference, serialize_hhmm, time_label, to_iso_date, ReferenceDate,
};
use crate::features::recurrence::RecurrenceRule;

/// Default number of occurrences computed per parse.
pub const DEFAULT_MAX_OCCURRENCES: usize = 4;

/// Options for [`parse_planner_phrase`](super::parse_planner_phrase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Date the phrase is interpreted against. Defaults to today.
    pub reference: Option<ReferenceDate>,
    /// ISO date used when `reference` is missing or unparsable.
    pub fallback_iso: Option<String>,
    /// Upper bound on generated occurrences. Values below 1 act as 1.
    pub max_occurrences: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reference: None,
            fallback_iso: None,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<ReferenceDate>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[must_use]
    pub fn with_fallback_iso(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_iso = Some(fallback.into());
        self
    }

    #[must_use]
    pub const fn with_max_occurrences(mut self, max: usize) -> Self {
        self.max_occurrences = max;
        self
    }

    /// The calendar date phrases are resolved against.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        resolve_reference(self.reference.as_ref(), self.fallback_iso.as_deref())
    }
}

/// What the phrase asks to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Task,
    /// Phrase opened with `project:`, `new project ...` or similar.
    Project,
}

/// Structured interpretation of a planner phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Phrase with scheduling words removed. Never empty.
    pub title: String,
    pub intent: Intent,
    pub start_date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: Option<NaiveTime>,
    pub recurrence: Option<RecurrenceRule>,
    /// Ascending, non-empty, all on or after `start_date`.
    pub occurrences: Vec<NaiveDate>,
    /// Heuristic score in `[0, 1]`.
    pub confidence: f64,
}

impl ParseResult {
    #[must_use]
    pub fn start_date_iso(&self) -> String {
        to_iso_date(self.start_date)
    }

    #[must_use]
    pub fn time_label(&self) -> Option<String> {
        self.time.map(time_label)
    }

    #[must_use]
    pub fn occurrences_iso(&self) -> Vec<String> {
        self.occurrences.iter().copied().map(to_iso_date).collect()
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// One-line description such as `Fri Jan 5, 2024 at 09:00 • 1st Friday each month`.
    ///
    /// Project phrases are prefixed with `Project • `.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = match self.intent {
            Intent::Project => "Project • ".to_string(),
            Intent::Task => String::new(),
        };
        out.push_str(&medium_label(self.start_date));
        if let Some(time) = self.time {
            out.push_str(" at ");
            out.push_str(&time_label(time));
        }
        if let Some(rule) = &self.recurrence {
            out.push_str(" • ");
            out.push_str(&rule.to_string());
        }
        out
    }
}
