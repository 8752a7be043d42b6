//! Error types for planwise.
//!
//! The parsing core never fails on scheduling input; these errors cover the
//! surfaces around it (configuration, CLI arguments, serialization).

use thiserror::Error;

/// Errors produced by the planwise CLI and configuration layers.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration could not be read, written, or located.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line argument was rejected before reaching the parser.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PlannerError {
    /// Shorthand for an [`PlannerError::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
