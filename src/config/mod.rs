//! Configuration management for planwise.
//!
//! This module handles loading and saving configuration from `~/.planwise/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ParserConfig, TemplatesConfig};
