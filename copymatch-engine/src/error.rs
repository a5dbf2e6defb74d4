//! Layered error types
//!
//! The matching core itself is infallible; errors here come from reading
//! documents, validating configuration and running the worker pool.

use copymatch_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core precondition violated
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

/// API-level errors (Public Interface Layer)
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason why the input is invalid
        reason: String,
    },

    /// Configuration error with path information
    #[error("configuration error in {path}: {error}")]
    ConfigurationError {
        /// The configuration file path
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// Engine layer error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
