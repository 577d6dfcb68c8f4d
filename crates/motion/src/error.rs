//! # Errors
//!
//! Error types for configuration loading and section lookup.
//! Nothing in the animation paths fails: missing targets are no-ops.

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config document: {0}")]
    Parse(String),

    #[error("Empty range for {field}: {min}..{max}")]
    EmptySpan { field: &'static str, min: f64, max: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in [0, 1], got {value}")]
    NotUnit { field: &'static str, value: f64 },

    #[error("Range for {field} is not finite: {min}..{max}")]
    Unbounded { field: &'static str, min: f64, max: f64 },

    #[error("{field} must be at most {limit}, got {value}")]
    TooLarge { field: &'static str, value: usize, limit: usize },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Section lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("Unknown section: {0}")]
    Unknown(String),
}
