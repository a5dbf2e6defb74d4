//! Error types for the copymatch command line

use std::fmt;
use std::path::PathBuf;

/// Failures the CLI reports before or around a match run
#[derive(Debug)]
pub enum CliError {
    /// Suspect, source or word list does not exist
    FileNotFound(PathBuf),
    /// Source pattern is not a valid glob
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// What the glob parser rejected
        reason: String,
    },
    /// Patterns matched files, but none of them plain text
    NoTextSources {
        /// Number of files skipped for their extension
        skipped: usize,
    },
    /// Configuration file or flag combination rejected
    ConfigError(String),
    /// The engine failed while matching a suspect
    MatchFailed {
        /// Label of the suspect document
        suspect: String,
        /// Engine error message
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid file pattern '{pattern}': {reason}")
            }
            CliError::NoTextSources { skipped } => write!(
                f,
                "No plain-text source files found ({skipped} other files skipped)"
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MatchFailed { suspect, reason } => {
                write!(f, "Matching {suspect} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound(PathBuf::from("essay.txt")).to_string(),
            "File not found: essay.txt"
        );
        assert_eq!(
            CliError::InvalidPattern {
                pattern: "[oops".to_string(),
                reason: "invalid range pattern".to_string(),
            }
            .to_string(),
            "Invalid file pattern '[oops': invalid range pattern"
        );
        assert_eq!(
            CliError::NoTextSources { skipped: 2 }.to_string(),
            "No plain-text source files found (2 other files skipped)"
        );
        assert_eq!(
            CliError::ConfigError("window_size must be at least 1".to_string()).to_string(),
            "Configuration error: window_size must be at least 1"
        );
    }

    #[test]
    fn test_match_failure_names_the_suspect() {
        let err = CliError::MatchFailed {
            suspect: "essay.txt".to_string(),
            reason: "engine error: I/O error: permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Matching essay.txt failed: engine error: I/O error: permission denied"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound(PathBuf::from("x.txt")).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
