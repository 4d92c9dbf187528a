use thiserror::Error;

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Errors that can occur while configuring or running the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// One or more negative values were present in the input
    #[error("Negative numbers not allowed: {}", join_values(.0))]
    NegativeNumbers(Vec<i64>),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for the config schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalculatorError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Offending values when this is a negative-number rejection
    #[must_use]
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Self::NegativeNumbers(values) => Some(values),
            _ => None,
        }
    }
}

pub(crate) fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
