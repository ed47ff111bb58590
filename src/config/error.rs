//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading schema configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
