//! Grouping matched tokens into contiguous spans
//!
//! The match list says which suspect tokens recur; annotators want ranges
//! to highlight. A span is a maximal run of consecutive positions.

use crate::text::{ByteRange, TextToken};
use crate::token::Token;

/// A contiguous run of matched suspect tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    /// Position of the first token
    pub first_position: usize,
    /// Position of the last token
    pub last_position: usize,
    /// Bytes covered in the suspect text, continuations included
    pub bytes: ByteRange,
    /// 1-based line of the first token
    pub start_line: usize,
    /// 1-based line of the last token
    pub end_line: usize,
}

impl MatchSpan {
    /// Number of tokens in the span
    pub fn token_count(&self) -> usize {
        self.last_position - self.first_position + 1
    }

    /// The raw suspect text covered by the span
    pub fn excerpt<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.bytes.as_range()).unwrap_or_default()
    }

    fn extend(&mut self, token: &TextToken) {
        let span = token.payload();
        self.last_position = token.position();
        self.bytes.end = self.bytes.end.max(span.end());
        self.end_line = span.end_line;
    }
}

impl From<&TextToken> for MatchSpan {
    fn from(token: &TextToken) -> Self {
        let span = token.payload();
        Self {
            first_position: token.position(),
            last_position: token.position(),
            bytes: ByteRange {
                start: span.bytes.start,
                end: span.end(),
            },
            start_line: span.line,
            end_line: span.end_line,
        }
    }
}

/// Collapse an ordered, deduplicated match list into spans
pub fn group_spans<'a, I>(matches: I) -> Vec<MatchSpan>
where
    I: IntoIterator<Item = &'a TextToken>,
{
    let mut spans: Vec<MatchSpan> = Vec::new();
    for token in matches {
        match spans.last_mut() {
            Some(span) if span.last_position + 1 == token.position() => span.extend(token),
            _ => spans.push(MatchSpan::from(token)),
        }
    }
    spans
}

/// Position ranges of consecutive runs, for payload-free tokens
pub fn group_positions<'a, P, I>(matches: I) -> Vec<(usize, usize)>
where
    I: IntoIterator<Item = &'a Token<P>>,
    P: 'a,
{
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for token in matches {
        let position = token.position();
        match runs.last_mut() {
            Some((_, last)) if *last + 1 == position => *last = position,
            _ => runs.push((position, position)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{merge_hyphenated, tokenize, NormalizationOptions, Vocabulary};

    #[test]
    fn test_consecutive_tokens_form_one_span() {
        let text = "alpha beta gamma delta epsilon";
        let tokens = tokenize(text, &NormalizationOptions::default());
        let spans = group_spans([&tokens[1], &tokens[2], &tokens[4]]);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].excerpt(text), "beta gamma");
        assert_eq!(spans[0].token_count(), 2);
        assert_eq!(spans[1].excerpt(text), "epsilon");
        assert_eq!(spans[1].first_position, 4);
    }

    #[test]
    fn test_span_covers_continuation() {
        let text = "a fine exam-\nple of it";
        let vocabulary = Vocabulary::from_words(["example"]);
        let tokens = merge_hyphenated(tokenize(text, &NormalizationOptions::default()), &vocabulary);
        let spans = group_spans(&tokens[1..3]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].excerpt(text), "fine exam-\nple");
        assert_eq!((spans[0].start_line, spans[0].end_line), (1, 2));
    }

    #[test]
    fn test_group_positions() {
        let tokens = Token::sequence(["a", "b", "c", "d", "e"]);
        let runs = group_positions([&tokens[0], &tokens[1], &tokens[3]]);
        assert_eq!(runs, vec![(0, 1), (3, 3)]);
    }

    #[test]
    fn test_no_matches() {
        let none: Vec<&TextToken> = Vec::new();
        assert!(group_spans(none).is_empty());
    }
}
