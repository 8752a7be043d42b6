//! Core abstractions for planwise.
//!
//! This module provides the calendar layer shared by the parser, the
//! occurrence generator and the output formatters.

pub mod calendar;

pub use calendar::{
    add_days, long_label, parse_iso_date, parse_reference_date, resolve_reference, short_label,
    time_label, to_iso_date, today, weekday_index, ReferenceDate,
};
