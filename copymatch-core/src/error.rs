//! Core error types (deterministic only)

use thiserror::Error;

/// Precondition violations detected by [`validate_sequence`](crate::validate_sequence)
///
/// Building and scanning never fail; these errors exist so callers that
/// receive tokens from an untrusted tokenizer can check them up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A token with empty text was found
    #[error("token at index {index} has empty text")]
    EmptyToken {
        /// Index of the offending token in its sequence
        index: usize,
    },

    /// Positions are not strictly increasing
    #[error("token at index {index} has position {found}, expected more than {previous}")]
    PositionOrder {
        /// Index of the offending token in its sequence
        index: usize,
        /// Position of the preceding token
        previous: usize,
        /// Position found at `index`
        found: usize,
    },

    /// Window size must be at least one token
    #[error("window size must be at least 1")]
    InvalidWindowSize,
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
