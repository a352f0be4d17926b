//! Error types for hashbench

use thiserror::Error;

/// Result type alias for hashbench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Error types for hashbench operations
#[derive(Error, Debug)]
pub enum BenchError {
    /// Input file (or timing log) could not be opened or read
    #[error("Cannot open file '{path}': {reason}")]
    InputNotFound { path: String, reason: String },

    /// External hash executable could not be started or exited non-zero
    #[error("External hash tool '{name}' failed: {reason}")]
    ExternalToolFailure {
        name: String,
        exit_code: Option<i32>,
        reason: String,
    },

    /// A line printed by a hash executable or a timing log could not be parsed
    #[error("Malformed record: '{line}'")]
    MalformedRecord { line: String },

    /// Timing log held no usable samples, throughput would be undefined
    #[error("No timing samples for hash '{hash_name}'")]
    NoTimingSamples { hash_name: String },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

impl BenchError {
    /// Build an `InputNotFound` from a path and the underlying I/O error
    pub fn input_not_found(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        BenchError::InputNotFound {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}
