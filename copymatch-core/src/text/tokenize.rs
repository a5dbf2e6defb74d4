//! Plain-text tokenization with source locations

use super::normalize::{normalize_with, NormalizationOptions};
use crate::token::Token;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Half-open byte range into the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteRange {
    /// First byte
    pub start: usize,
    /// One past the last byte
    pub end: usize,
}

impl ByteRange {
    /// As a standard range, for slicing
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Where a word came from in a plain-text document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSpan {
    /// Bytes of the raw word
    pub bytes: ByteRange,
    /// Bytes of the second half of a word merged across a hyphen break
    pub continuation: Option<ByteRange>,
    /// 1-based line on which the word starts
    pub line: usize,
    /// 1-based line on which the word (or its continuation) ends
    pub end_line: usize,
    /// Raw word ended in a hyphen
    pub ended_in_hyphen: bool,
}

impl WordSpan {
    /// Last byte covered, continuation included
    pub fn end(&self) -> usize {
        self.continuation.map_or(self.bytes.end, |c| c.end)
    }
}

/// A token from a plain-text document
pub type TextToken = Token<WordSpan>;

const HYPHENS: [char; 3] = ['-', '\u{2010}', '\u{00AD}'];

/// Split `text` into normalized, located tokens
///
/// Words are maximal runs of non-whitespace word-boundary segments. Words
/// that normalize to nothing (stray punctuation) are dropped before
/// positions are assigned, so positions are dense from zero.
pub fn tokenize(text: &str, options: &NormalizationOptions) -> Vec<TextToken> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut word: Option<(usize, usize)> = None;

    let flush = |word: &mut Option<(usize, usize)>, line: usize, tokens: &mut Vec<TextToken>| {
        let Some((start, end)) = word.take() else {
            return;
        };
        let raw = &text[start..end];
        let normalized = normalize_with(raw, options);
        if normalized.is_empty() {
            return;
        }
        let span = WordSpan {
            bytes: ByteRange { start, end },
            continuation: None,
            line,
            end_line: line,
            ended_in_hyphen: raw.ends_with(&HYPHENS[..]),
        };
        let position = tokens.len();
        tokens.push(Token::with_payload(normalized, position, span));
    };

    for (offset, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            flush(&mut word, line, &mut tokens);
            line += segment.matches('\n').count();
            continue;
        }
        let end = offset + segment.len();
        word = match word {
            Some((start, _)) => Some((start, end)),
            None => Some((offset, end)),
        };
    }
    flush(&mut word, line, &mut tokens);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[TextToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_basic_sentence() {
        let tokens = tokenize("Hello, world and goodbye.", &NormalizationOptions::default());
        assert_eq!(texts(&tokens), vec!["hello", "world", "and", "goodbye"]);
        let positions: Vec<usize> = tokens.iter().map(|t| t.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_byte_ranges_point_at_raw_words() {
        let text = "Lorem  ipsum,\tdolor";
        let tokens = tokenize(text, &NormalizationOptions::default());
        let raw: Vec<&str> = tokens
            .iter()
            .map(|t| &text[t.payload().bytes.as_range()])
            .collect();
        assert_eq!(raw, vec!["Lorem", "ipsum,", "dolor"]);
    }

    #[test]
    fn test_stray_punctuation_is_dropped() {
        let tokens = tokenize("one - two -- three", &NormalizationOptions::default());
        assert_eq!(texts(&tokens), vec!["one", "two", "three"]);
        assert_eq!(tokens[2].position(), 2);
    }

    #[test]
    fn test_line_numbers() {
        let text = "first line\nsecond\r\n\nfourth";
        let tokens = tokenize(text, &NormalizationOptions::default());
        let lines: Vec<usize> = tokens.iter().map(|t| t.payload().line).collect();
        assert_eq!(lines, vec![1, 1, 2, 4]);
    }

    #[test]
    fn test_hyphen_flag() {
        let tokens = tokenize("exam-\nple", &NormalizationOptions::default());
        assert_eq!(texts(&tokens), vec!["exam", "ple"]);
        assert!(tokens[0].payload().ended_in_hyphen);
        assert!(!tokens[1].payload().ended_in_hyphen);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", &NormalizationOptions::default()).is_empty());
        assert!(tokenize("  \n\t ", &NormalizationOptions::default()).is_empty());
    }

    #[test]
    fn test_multibyte_words() {
        let text = "Ærø  Straße";
        let tokens = tokenize(text, &NormalizationOptions::default());
        assert_eq!(texts(&tokens), vec!["ærø", "strasse"]);
        assert_eq!(&text[tokens[1].payload().bytes.as_range()], "Straße");
    }
}
