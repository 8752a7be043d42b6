//! Configuration settings for planwise.
//!
//! Settings are loaded from `~/.planwise/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PlannerError;
use crate::features::nlp::{ParseOptions, DEFAULT_MAX_OCCURRENCES};
use crate::features::templates::{TemplateOptions, DEFAULT_TEMPLATE_OCCURRENCES};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Phrase parser settings.
    pub parser: ParserConfig,
    /// Recurring template settings.
    pub templates: TemplatesConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Phrase parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Occurrences generated per parse.
    #[serde(default = "default_parser_occurrences")]
    pub max_occurrences: usize,
}

/// Recurring template settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Occurrences considered when building templates.
    #[serde(default = "default_template_occurrences")]
    pub max_occurrences: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_parser_occurrences() -> usize {
    DEFAULT_MAX_OCCURRENCES
}

const fn default_template_occurrences() -> usize {
    DEFAULT_TEMPLATE_OCCURRENCES
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_occurrences: default_parser_occurrences(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            max_occurrences: default_template_occurrences(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PlannerError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PlannerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PlannerError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PlannerError> {
        let contents = self.to_yaml()?;
        std::fs::write(path, contents).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PlannerError> {
        serde_yaml::to_string(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {e}")))
    }

    /// Parser options seeded from this configuration.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_max_occurrences(self.parser.max_occurrences)
    }

    /// Template options seeded from this configuration.
    #[must_use]
    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions::default().with_max_occurrences(self.templates.max_occurrences)
    }
}
