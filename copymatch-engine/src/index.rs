//! A suspect document compiled into a reusable automaton

use crate::document::{PreparedDocument, TextPreparer};
use crate::report::SourceReport;
use copymatch_core::text::{TextToken, WordSpan};
use copymatch_core::{aggregate_owned, emit_push, Automaton, Equivalence, Oracle, Scanner};
use log::{debug, trace};
use std::num::NonZeroUsize;

/// A source document read into memory but not yet tokenized
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Name used in reports
    pub label: String,
    /// Raw text
    pub text: String,
}

/// Suspect automaton plus everything needed to match sources against it
///
/// Built once, then shared read-only between workers.
#[derive(Debug)]
pub struct SuspectIndex {
    label: String,
    text: String,
    automaton: Automaton<WordSpan>,
    preparer: TextPreparer,
    oracle: Oracle,
}

impl SuspectIndex {
    /// Compile a prepared suspect document
    pub fn build(
        document: PreparedDocument,
        window_size: NonZeroUsize,
        preparer: TextPreparer,
        equivalence: Equivalence,
    ) -> Self {
        let PreparedDocument {
            label,
            text,
            tokens,
        } = document;
        let automaton = Automaton::build(tokens, window_size);
        debug!(
            "indexed {label}: {} tokens, {} nodes, {} distinct windows",
            automaton.tokens().len(),
            automaton.node_count(),
            automaton.terminal_count()
        );
        Self {
            label,
            text,
            automaton,
            preparer,
            oracle: Oracle::new(equivalence),
        }
    }

    /// Suspect label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw suspect text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Underlying automaton
    pub fn automaton(&self) -> &Automaton<WordSpan> {
        &self.automaton
    }

    /// Equivalence strategy every source is scanned with
    pub fn equivalence(&self) -> Equivalence {
        self.oracle.equivalence()
    }

    /// Number of suspect tokens
    pub fn token_count(&self) -> usize {
        self.automaton.tokens().len()
    }

    /// Suspect tokens reproduced by an already tokenized candidate
    pub fn match_tokens<Q>(&self, candidates: &[copymatch_core::Token<Q>]) -> Vec<TextToken> {
        let mut raw = Vec::new();
        let mut scanner = Scanner::with_oracle(&self.automaton, self.oracle);
        for candidate in candidates {
            scanner.step(candidate.text(), &mut emit_push(&mut raw));
        }
        trace!("{} raw matches over {} steps", raw.len(), scanner.steps());
        aggregate_owned(raw)
    }

    /// Tokenize a source and report what it reproduces
    pub fn match_source(&self, source: &LoadedSource) -> SourceReport {
        let candidates = self.preparer.tokens(&source.text);
        let matches = self.match_tokens(&candidates);
        debug!(
            "{}: {} of {} suspect tokens matched",
            source.label,
            matches.len(),
            self.token_count()
        );
        SourceReport::new(
            source.label.clone(),
            candidates.len(),
            self.token_count(),
            matches,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(suspect: &str, window: usize, threshold: u8) -> SuspectIndex {
        let preparer = TextPreparer::default();
        let document = preparer.prepare("suspect", suspect.to_string());
        SuspectIndex::build(
            document,
            NonZeroUsize::new(window).unwrap(),
            preparer,
            Equivalence::from_threshold(threshold),
        )
    }

    fn source(text: &str) -> LoadedSource {
        LoadedSource {
            label: "source".into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_match_source_finds_shared_run() {
        let index = index("The quick brown fox jumps over the lazy dog.", 3, 0);
        let report = index.match_source(&source("A QUICK brown fox, they said."));
        let words: Vec<&str> = report.matches.iter().map(|t| t.text()).collect();
        assert_eq!(words, vec!["quick", "brown", "fox"]);
        assert_eq!(report.spans.len(), 1);
        assert_eq!(
            report.spans[0].excerpt(index.text()),
            "quick brown fox"
        );
        assert_eq!(report.source_tokens, 6);
    }

    #[test]
    fn test_match_source_tolerates_typos() {
        let index = index("The quick brown fox jumps over the lazy dog.", 4, 1);
        let report = index.match_source(&source("the quikc brown fox jumps"));
        assert!(report.matches.is_empty());

        let report = index.match_source(&source("the quick brwn fox jumps"));
        assert_eq!(report.matched_tokens(), 5);
    }

    #[test]
    fn test_one_oracle_serves_every_source() {
        let index = index("The quick brown fox jumps over the lazy dog.", 4, 3);
        assert_eq!(index.equivalence(), Equivalence::BoundedEditDistance(3));

        let noisy = source("the quack brawn fix jumps");
        let first = index.match_source(&noisy);
        assert_eq!(first.matched_tokens(), 5);
        let unrelated = source("zzzzzzzzz yyyyyyyyy xxxxxxxxx wwwwwwwww");
        assert!(index.match_source(&unrelated).is_empty());
        assert_eq!(index.match_source(&noisy).matches, first.matches);
    }

    #[test]
    fn test_short_source_matches_nothing() {
        let index = index("one two three four", 3, 0);
        let report = index.match_source(&source("one two"));
        assert!(report.is_empty());
        assert!(report.spans.is_empty());
    }
}
