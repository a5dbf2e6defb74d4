//! Match reports handed to annotators and formatters

use crate::executor::ExecutionMode;
use copymatch_core::text::TextToken;
use copymatch_core::{group_spans, MatchSpan};
use std::collections::BTreeSet;

/// What one source reproduces of the suspect document
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceReport {
    /// Source label
    pub label: String,
    /// Number of tokens in the source
    pub source_tokens: usize,
    /// Matched suspect tokens, ordered by position and unique
    pub matches: Vec<TextToken>,
    /// Matches grouped into contiguous suspect spans
    pub spans: Vec<MatchSpan>,
    /// Share of suspect tokens matched by this source (0.0 to 1.0)
    pub coverage: f64,
}

impl SourceReport {
    /// Build a report from an aggregated match list
    pub fn new(
        label: impl Into<String>,
        source_tokens: usize,
        suspect_tokens: usize,
        matches: Vec<TextToken>,
    ) -> Self {
        let spans = group_spans(&matches);
        let coverage = ratio(matches.len(), suspect_tokens);
        Self {
            label: label.into(),
            source_tokens,
            matches,
            spans,
            coverage,
        }
    }

    /// Number of matched suspect tokens
    pub fn matched_tokens(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Processing metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Minimum run length
    pub window_size: usize,
    /// Per-token edit distance
    pub equivalence_threshold: u8,
    /// Automaton size, root included
    pub automaton_nodes: usize,
    /// Distinct windows in the suspect document
    pub distinct_windows: usize,
}

/// Result of matching one suspect document against its sources
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchReport {
    /// Suspect label
    pub suspect: String,
    /// Number of tokens in the suspect document
    pub suspect_tokens: usize,
    /// One report per source, in input order
    pub sources: Vec<SourceReport>,
    /// Processing metadata and performance metrics
    pub metadata: ProcessingMetadata,
}

impl MatchReport {
    /// Sources with at least one match
    pub fn matched_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|source| !source.is_empty())
    }

    /// Share of suspect tokens matched by any source
    pub fn total_coverage(&self) -> f64 {
        let covered: BTreeSet<usize> = self
            .sources
            .iter()
            .flat_map(|source| source.matches.iter().map(|t| t.position()))
            .collect();
        ratio(covered.len(), self.suspect_tokens)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copymatch_core::text::{tokenize, NormalizationOptions};

    fn metadata() -> ProcessingMetadata {
        ProcessingMetadata {
            execution_mode: ExecutionMode::Sequential,
            processing_time_ms: 0.0,
            window_size: 2,
            equivalence_threshold: 0,
            automaton_nodes: 1,
            distinct_windows: 0,
        }
    }

    #[test]
    fn test_source_report_spans_and_coverage() {
        let tokens = tokenize("a b c d", &NormalizationOptions::default());
        let report = SourceReport::new("src", 10, tokens.len(), tokens[..2].to_vec());
        assert_eq!(report.matched_tokens(), 2);
        assert_eq!(report.spans.len(), 1);
        assert!((report.coverage - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_coverage_is_a_union() {
        let tokens = tokenize("a b c d", &NormalizationOptions::default());
        let report = MatchReport {
            suspect: "suspect".into(),
            suspect_tokens: 4,
            sources: vec![
                SourceReport::new("one", 3, 4, tokens[0..2].to_vec()),
                SourceReport::new("two", 3, 4, tokens[1..3].to_vec()),
                SourceReport::new("three", 3, 4, Vec::new()),
            ],
            metadata: metadata(),
        };
        assert!((report.total_coverage() - 0.75).abs() < f64::EPSILON);
        assert_eq!(report.matched_sources().count(), 2);
    }

    #[test]
    fn test_empty_suspect_has_zero_coverage() {
        let report = SourceReport::new("src", 0, 0, Vec::new());
        assert_eq!(report.coverage, 0.0);
    }
}
