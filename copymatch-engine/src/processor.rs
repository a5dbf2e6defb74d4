//! Main match processor and builder

use crate::{
    config::{MatchConfig, MatchConfigBuilder},
    document::TextPreparer,
    error::{ApiError, ApiResult},
    executor::{auto_select, ExecutionMode, Executor, ProgressFn, SequentialExecutor},
    index::{LoadedSource, SuspectIndex},
    input::{Input, SourceInput},
    report::{MatchReport, ProcessingMetadata},
};
use copymatch_core::text::Vocabulary;
use log::{debug, info, warn};
use std::time::Instant;

/// Main match processor
///
/// Entry point for passage detection: builds the suspect automaton once and
/// scans every source against it.
#[derive(Debug, Clone)]
pub struct MatchProcessor {
    config: MatchConfig,
}

impl MatchProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> ApiResult<Self> {
        Self::with_config(MatchConfig::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: MatchConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Read and compile the suspect document
    pub fn index(&self, suspect: SourceInput) -> ApiResult<SuspectIndex> {
        let window = self.config.window()?;
        let preparer = TextPreparer::from_config(&self.config);
        let text = suspect.input.to_text()?;
        let document = preparer.prepare(suspect.label, text);
        if document.tokens.len() < window.get() {
            warn!(
                "{} has {} tokens, fewer than the window size {}; nothing can match",
                document.label,
                document.tokens.len(),
                window
            );
        }
        Ok(SuspectIndex::build(
            document,
            window,
            preparer,
            self.config.equivalence(),
        ))
    }

    /// Match a suspect document against its sources
    pub fn process(&self, suspect: SourceInput, sources: Vec<SourceInput>) -> ApiResult<MatchReport> {
        self.process_with_progress(suspect, sources, &|_| {})
    }

    /// Like [`process`](Self::process), reporting each finished source
    pub fn process_with_progress(
        &self,
        suspect: SourceInput,
        sources: Vec<SourceInput>,
        progress: ProgressFn<'_>,
    ) -> ApiResult<MatchReport> {
        let start = Instant::now();
        let index = self.index(suspect)?;

        let mut loaded = Vec::with_capacity(sources.len());
        for source in sources {
            let text = source.input.to_text()?;
            loaded.push(LoadedSource {
                label: source.label,
                text,
            });
        }

        let mode = self.resolve_mode(&loaded);
        debug!("matching {} sources in {:?} mode", loaded.len(), mode);
        let reports = self.executor(mode).execute(&index, &loaded, progress)?;

        let automaton = index.automaton();
        let report = MatchReport {
            suspect: index.label().to_string(),
            suspect_tokens: index.token_count(),
            sources: reports,
            metadata: ProcessingMetadata {
                execution_mode: mode,
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
                window_size: automaton.window_size(),
                equivalence_threshold: self.config.equivalence_threshold,
                automaton_nodes: automaton.node_count(),
                distinct_windows: automaton.terminal_count(),
            },
        };
        info!(
            "{}: {} of {} sources matched, {:.1}% covered",
            report.suspect,
            report.matched_sources().count(),
            report.sources.len(),
            report.total_coverage() * 100.0
        );
        Ok(report)
    }

    /// Process text strings directly (convenience method)
    pub fn process_text(&self, suspect: &str, sources: &[(&str, &str)]) -> ApiResult<MatchReport> {
        let sources = sources
            .iter()
            .map(|(label, text)| SourceInput::labeled(*label, Input::from_text(*text)))
            .collect();
        self.process(
            SourceInput::labeled("suspect", Input::from_text(suspect)),
            sources,
        )
    }

    fn resolve_mode(&self, sources: &[LoadedSource]) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => {
                let bytes = sources.iter().map(|s| s.text.len()).sum();
                auto_select(sources.len(), bytes, self.config.parallel_threshold)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                warn!("built without the parallel feature; running sequentially");
                ExecutionMode::Sequential
            }
            mode => mode,
        }
    }

    fn executor(&self, mode: ExecutionMode) -> Box<dyn Executor> {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(crate::executor::ParallelExecutor::new(
                self.config.thread_count,
            )),
            _ => Box::new(SequentialExecutor),
        }
    }
}

/// Builder for MatchProcessor
///
/// Provides a fluent interface for configuring the processor.
pub struct MatchProcessorBuilder {
    config_builder: MatchConfigBuilder,
}

impl Default for MatchProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config_builder: MatchConfigBuilder::new(),
        }
    }

    /// Set the minimum run length
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config_builder = self.config_builder.window_size(window_size);
        self
    }

    /// Set the per-token edit distance
    pub fn equivalence_threshold(mut self, threshold: u8) -> Self {
        self.config_builder = self.config_builder.equivalence_threshold(threshold);
        self
    }

    /// Enable hyphen merging against a vocabulary
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config_builder = self.config_builder.vocabulary(vocabulary);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config_builder = self.config_builder.execution_mode(mode);
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.threads(count);
        self
    }

    /// Build the processor
    pub fn build(self) -> ApiResult<MatchProcessor> {
        let config = self.config_builder.build().map_err(ApiError::Engine)?;
        MatchProcessor::with_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    const SUSPECT: &str = "It was the best of times, it was the worst of times.";

    #[test]
    fn test_process_text_reports_each_source() {
        let processor = MatchProcessorBuilder::new().window_size(4).build().unwrap();
        let report = processor
            .process_text(
                SUSPECT,
                &[
                    ("dickens", "it was the worst of times indeed"),
                    ("unrelated", "call me ishmael"),
                ],
            )
            .unwrap();

        assert_eq!(report.suspect_tokens, 12);
        assert_eq!(report.sources.len(), 2);
        assert_eq!(report.sources[0].label, "dickens");
        let positions: Vec<usize> = report.sources[0]
            .matches
            .iter()
            .map(|t| t.position())
            .collect();
        assert_eq!(positions, vec![6, 7, 8, 9, 10, 11]);
        assert!(report.sources[1].is_empty());
        assert_eq!(report.metadata.window_size, 4);
    }

    #[test]
    fn test_window_larger_than_suspect() {
        let processor = MatchProcessorBuilder::new().window_size(50).build().unwrap();
        let report = processor.process_text(SUSPECT, &[("same", SUSPECT)]).unwrap();
        assert!(report.sources[0].is_empty());
        assert_eq!(report.metadata.distinct_windows, 0);
    }

    #[test]
    fn test_explicit_sequential_mode() {
        let processor = MatchProcessorBuilder::new()
            .window_size(3)
            .execution_mode(ExecutionMode::Sequential)
            .build()
            .unwrap();
        let report = processor.process_text(SUSPECT, &[("same", SUSPECT)]).unwrap();
        assert_eq!(report.metadata.execution_mode, ExecutionMode::Sequential);
        assert_eq!(report.sources[0].matched_tokens(), 12);
    }

    #[test]
    fn test_unreadable_source_fails() {
        let processor = MatchProcessor::new().unwrap();
        let err = processor
            .process(
                SourceInput::new(Input::from_text(SUSPECT)),
                vec![SourceInput::new(Input::from_file("/nonexistent/source.txt"))],
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Engine(EngineError::IoError(_))));
    }

    #[test]
    fn test_progress_called_per_source() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let processor = MatchProcessorBuilder::new().window_size(2).build().unwrap();
        let seen = AtomicUsize::new(0);
        processor
            .process_with_progress(
                SourceInput::new(Input::from_text(SUSPECT)),
                vec![
                    SourceInput::labeled("a", Input::from_text("best of")),
                    SourceInput::labeled("b", Input::from_text("worst of")),
                ],
                &|_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                },
            )
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
