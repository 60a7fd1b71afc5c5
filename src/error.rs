//! Error types for has-flag.
//!
//! Checking a flag never fails. These errors come from reading the process
//! arguments strictly and from the CLI and benchmark layers.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error)]
pub enum HasFlagError {
    /// A process argument was not valid UTF-8.
    #[error("Argument {index} is not valid UTF-8: {lossy}")]
    NonUtf8Argument { index: usize, lossy: String },

    /// Benchmark settings are out of range.
    #[error("Invalid benchmark configuration: {message}")]
    InvalidBenchConfig { message: String },

    /// No benchmark scenario matched the requested name.
    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for has-flag operations.
pub type Result<T> = std::result::Result<T, HasFlagError>;
