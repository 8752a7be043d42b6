//! Feature implementations for planwise.
//!
//! This module contains:
//! - Natural language phrase parsing
//! - Recurrence rules and occurrence generation
//! - Recurring quick-pick templates
//! - Shell integration

pub mod nlp;
pub mod recurrence;
pub mod shell;
pub mod templates;
