/*!
 * Error types for the scenesmith application.
 *
 * The engine itself cannot fail. These errors cover everything around it:
 * configuration, reading scripts and writing rendered output.
 */

use thiserror::Error;

/// Errors found while validating configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric or enumerated setting is out of range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Configuration key
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The prompt template lacks a placeholder every prompt needs
    #[error("Prompt template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering scenes to an output format failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
