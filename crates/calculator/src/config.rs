use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for calculator behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Delimiters that are always active
    pub default_delimiters: Vec<String>,

    /// Marker that opens a custom delimiter header line
    pub header_marker: String,

    /// Largest value that still counts towards the sum (inclusive)
    pub max_value: i64,

    /// Turn the two-character sequence `\n` into a real newline before parsing
    pub unescape_newlines: bool,

    /// Strip one leading and one trailing double quote before parsing
    pub strip_quotes: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_delimiters: vec![",".to_string(), "\n".to_string()],
            header_marker: "//".to_string(),
            max_value: 1000,
            unescape_newlines: true,
            strip_quotes: true,
        }
    }
}

impl CalculatorConfig {
    /// Parse a config from TOML; missing fields fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded calculator config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_delimiters.is_empty() {
            return Err(CalculatorError::invalid_config(
                "default_delimiters must contain at least one delimiter",
            ));
        }

        if let Some(pos) = self.default_delimiters.iter().position(String::is_empty) {
            return Err(CalculatorError::invalid_config(format!(
                "default_delimiters[{pos}] is empty"
            )));
        }

        if self.header_marker.is_empty() {
            return Err(CalculatorError::invalid_config(
                "header_marker must not be empty",
            ));
        }

        if self.max_value < 0 {
            return Err(CalculatorError::invalid_config(format!(
                "max_value ({}) must be >= 0",
                self.max_value
            )));
        }

        Ok(())
    }
}
