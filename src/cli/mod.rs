//! Command-line interface for planwise.

pub mod args;
pub mod commands;
