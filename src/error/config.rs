//! Configuration error module.
//!
//! Errors raised while loading, parsing or validating Lanai configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration could not be parsed or deserialized.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value failed validation.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric value is outside its allowed range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// Dotted path of the offending value
        key: String,
        /// Description of the valid range
        message: String,
    },
}
