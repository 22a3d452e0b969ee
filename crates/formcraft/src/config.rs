// File: src/config.rs
// Purpose: Configuration parsing from formcraft.toml

use crate::validation::{PatternPolicy, ValidatorOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormcraftConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Validation engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// What an invalid `pattern` means: "skip" the check or "reject" values
    #[serde(default)]
    pub pattern_policy: PatternPolicy,

    /// Treat whitespace-only values as empty (default: true)
    #[serde(default = "default_true")]
    pub trim_values: bool,
}

/// HTML rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_form_method")]
    pub form_method: String,

    #[serde(default)]
    pub form_action: Option<String>,

    /// Class of the message element beneath an invalid control
    #[serde(default = "default_error_class")]
    pub error_class: String,

    /// Emit resolved field styling as inline `style` attributes
    #[serde(default = "default_true")]
    pub inline_styles: bool,
}

/// Logging settings, read by hosts that install a subscriber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_form_method() -> String {
    "post".to_string()
}

fn default_error_class() -> String {
    "field-error".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pattern_policy: PatternPolicy::default(),
            trim_values: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            form_method: default_form_method(),
            form_action: None,
            error_class: default_error_class(),
            inline_styles: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl From<&ValidationConfig> for ValidatorOptions {
    fn from(config: &ValidationConfig) -> Self {
        ValidatorOptions {
            pattern_policy: config.pattern_policy,
            trim_values: config.trim_values,
        }
    }
}

impl FormcraftConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormcraftConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./formcraft.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formcraft.toml")
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions::from(&self.validation)
    }
}
