//! Segment bookkeeping for a single parse.
//!
//! Matchers search the phrase through a [`Scan`]; accepted hits claim a
//! [`Segment`] that later matchers can no longer touch and that is struck out
//! of the title at the end.

use regex::{Captures, Regex};
use tracing::debug;

/// Half-open byte range into the trimmed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    const fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A successful matcher result.
#[derive(Debug, Clone)]
pub struct Hit<T> {
    /// Matcher name, for tracing.
    pub name: &'static str,
    pub value: T,
    pub segment: Segment,
    /// Confidence bonus earned by this hit.
    pub confidence: f64,
}

/// Parse state: the phrase, claimed segments and accumulated confidence.
#[derive(Debug)]
pub struct Scan<'a> {
    text: &'a str,
    segments: Vec<Segment>,
    confidence: f64,
}

impl<'a> Scan<'a> {
    pub const fn new(text: &'a str, base_confidence: f64) -> Self {
        Self {
            text,
            segments: Vec::new(),
            confidence: base_confidence,
        }
    }

    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    fn is_free(&self, segment: Segment) -> bool {
        !self.segments.iter().any(|s| s.overlaps(segment))
    }

    /// Find the leftmost match of `pattern` that avoids claimed segments and
    /// that `accept` turns into a value.
    ///
    /// Rejected candidates do not hide matches that start later, so a
    /// pattern is retried one character past each rejected start.
    pub fn find<T>(
        &self,
        name: &'static str,
        pattern: &Regex,
        confidence: f64,
        mut accept: impl FnMut(&Captures<'a>) -> Option<T>,
    ) -> Option<Hit<T>> {
        let mut pos = 0;
        while pos <= self.text.len() {
            let caps = pattern.captures_at(self.text, pos)?;
            let whole = caps.get(0)?;
            let segment = Segment {
                start: whole.start(),
                end: whole.end(),
            };
            if segment.end > segment.start && self.is_free(segment) {
                if let Some(value) = accept(&caps) {
                    return Some(Hit {
                        name,
                        value,
                        segment,
                        confidence,
                    });
                }
            }
            let step = self.text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            pos = whole.start() + step;
        }
        None
    }

    /// Claim a hit's segment and bank its confidence.
    pub fn accept<T>(&mut self, hit: Option<Hit<T>>) -> Option<T> {
        let hit = hit?;
        debug!(
            matcher = hit.name,
            text = &self.text[hit.segment.start..hit.segment.end],
            bonus = hit.confidence,
            "phrase segment matched"
        );
        self.segments.push(hit.segment);
        self.confidence += hit.confidence;
        Some(hit.value)
    }

    /// The phrase with every claimed segment replaced by a space.
    ///
    /// Segments are removed in one pass from the back so earlier offsets stay
    /// valid.
    pub fn remainder(&self) -> String {
        let mut segments = self.segments.clone();
        segments.sort_by(|a, b| b.start.cmp(&a.start));
        let mut out = self.text.to_string();
        for segment in segments {
            out.replace_range(segment.start..segment.end, " ");
        }
        out
    }
}
