//! Matching configuration
//!
//! The public configuration surface: minimum run length, per-token edit
//! tolerance, text preparation and execution preferences.

use crate::{
    error::{EngineError, Result},
    executor::ExecutionMode,
};
use copymatch_core::text::{NormalizationOptions, Vocabulary};
use copymatch_core::{Equivalence, DEFAULT_WINDOW_SIZE};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Total source bytes above which adaptive mode scans in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256 * 1024;

/// Matching configuration
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum number of consecutive tokens that must match
    pub window_size: usize,
    /// Maximum per-token edit distance (0 = exact)
    pub equivalence_threshold: u8,
    /// Normalization applied to every word
    pub normalization: NormalizationOptions,
    /// Word list used to rejoin hyphen-broken words (None = no merging)
    pub vocabulary: Option<Arc<Vocabulary>>,
    /// Execution mode preference
    pub execution_mode: ExecutionMode,
    /// Thread count override (None = rayon default)
    pub thread_count: Option<usize>,
    /// Total source bytes at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            equivalence_threshold: 0,
            normalization: NormalizationOptions::default(),
            vocabulary: None,
            execution_mode: ExecutionMode::Adaptive,
            thread_count: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Exact matching with the given window size
    pub fn exact(window_size: usize) -> Self {
        Self {
            window_size,
            ..Default::default()
        }
    }

    /// Tolerate one edit per token
    pub fn lenient(window_size: usize) -> Self {
        Self {
            window_size,
            equivalence_threshold: 1,
            ..Default::default()
        }
    }

    /// The configured window size, checked
    pub fn window(&self) -> Result<NonZeroUsize> {
        Ok(copymatch_core::window_size(self.window_size)?)
    }

    /// The equivalence strategy implied by the threshold
    pub fn equivalence(&self) -> Equivalence {
        Equivalence::from_threshold(self.equivalence_threshold)
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        self.window()?;
        if self.thread_count == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for MatchConfig
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum run length
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Set the per-token edit distance
    pub fn equivalence_threshold(mut self, threshold: u8) -> Self {
        self.config.equivalence_threshold = threshold;
        self
    }

    /// Set the normalization steps
    pub fn normalization(mut self, options: NormalizationOptions) -> Self {
        self.config.normalization = options;
        self
    }

    /// Enable hyphen merging against a vocabulary
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = Some(Arc::new(vocabulary));
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.thread_count = count;
        self
    }

    /// Set the adaptive parallel threshold, in source bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
