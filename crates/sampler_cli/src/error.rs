//! Error types for the sampler CLI.

use sampler_core::chart::ChartError;
use sampler_core::SamplerError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation, generation or summary failure
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chart could not be built
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Request file could not be read or parsed
    #[error("Request file '{path}': {message}")]
    RequestFile {
        /// Path of the request file
        path: String,
        /// What went wrong
        message: String,
    },

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
