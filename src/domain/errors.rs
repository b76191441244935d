//! Domain error types
//!
//! This module defines the error hierarchy for Prompt Shield.
//! Analysis itself never fails; every variant here is raised while building
//! configuration, compiling recognizers, or resolving input.

use thiserror::Error;

/// Main Prompt Shield error type
#[derive(Debug, Error)]
pub enum ShieldError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No prompt text could be resolved from any input source
    #[error("Input error: {0}")]
    InputResolution(String),

    /// Invalid recognizer definition
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ShieldError {
    fn from(err: std::io::Error) -> Self {
        ShieldError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShieldError {
    fn from(err: serde_json::Error) -> Self {
        ShieldError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShieldError {
    fn from(err: toml::de::Error) -> Self {
        ShieldError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<regex::Error> for ShieldError {
    fn from(err: regex::Error) -> Self {
        ShieldError::Pattern(err.to_string())
    }
}
