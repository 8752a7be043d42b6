//! Shell integration features.
//!
//! Currently just completion script generation.

pub mod completions;

pub use completions::{completion_install_instructions, generate_completions, shell_from_str};
