//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use copymatch_engine::DEFAULT_WINDOW_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Text preparation configuration
    #[serde(default)]
    pub text: TextConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load and check a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Parse and check TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), CliError> {
        if self.matching.window_size == 0 {
            return Err(CliError::ConfigError(
                "matching.window_size must be at least 1".to_string(),
            ));
        }
        if crate::output::OutputFormat::from_name(&self.output.default_format).is_none() {
            return Err(CliError::ConfigError(format!(
                "unknown output.default_format: {}",
                self.output.default_format
            )));
        }
        Ok(())
    }
}

/// Matching-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum run length in tokens
    pub window_size: usize,

    /// Per-token edit distance (0 = exact)
    pub distance: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            distance: 0,
        }
    }
}

/// Text preparation configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Rejoin words broken by a hyphen at a line end
    pub merge_hyphenated: bool,

    /// Word list deciding which halves form a word
    pub vocabulary: Option<PathBuf>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            merge_hyphenated: true,
            vocabulary: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Longest excerpt shown in text output, in characters (0 = no limit)
    pub context_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            context_chars: 80,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Always scan sources in parallel
    pub parallel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.matching.window_size, 8);
        assert!(config.text.merge_hyphenated);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::parse(
            r#"
[matching]
distance = 2

[performance]
parallel = true
"#,
        )
        .unwrap();
        assert_eq!(config.matching.window_size, 8);
        assert_eq!(config.matching.distance, 2);
        assert!(config.performance.parallel);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_rejects_zero_window() {
        let err = CliConfig::parse("[matching]\nwindow_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = CliConfig::parse("[output]\ndefault_format = \"pdf\"\n").unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(CliConfig::parse("[matching\n").is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[output]\ncontext_chars = 20\n").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.context_chars, 20);

        let err = CliConfig::load(Path::new("/nonexistent/copymatch.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
