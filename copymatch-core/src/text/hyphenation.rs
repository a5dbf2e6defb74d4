//! Rejoining words broken across lines by a hyphen

use super::normalize::normalize;
use super::tokenize::TextToken;
use crate::token::Token;
use std::collections::HashSet;

/// Reference word list deciding whether two halves form a real word
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build from raw words; each is normalized before insertion
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-separated word list; blank lines and `#` comments are skipped
    pub fn from_word_list(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Whether a normalized word is known
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Merge hyphen-broken word pairs the vocabulary recognizes
///
/// A token whose raw word ended in a hyphen is joined with its successor
/// when the concatenated text is a known word. The merged token keeps the
/// first half's location and records the second half as its continuation.
/// Positions are renumbered densely afterwards.
pub fn merge_hyphenated(tokens: Vec<TextToken>, vocabulary: &Vocabulary) -> Vec<TextToken> {
    let mut merged: Vec<TextToken> = Vec::with_capacity(tokens.len());
    let mut pending: Option<usize> = None;

    for token in tokens {
        if let Some(index) = pending.take() {
            let joined = format!("{}{}", merged[index].text(), token.text());
            if vocabulary.contains(&joined) {
                let position = merged[index].position();
                let first = *merged[index].payload();
                let second = *token.payload();
                let mut span = first;
                span.continuation = Some(second.bytes);
                span.end_line = second.end_line;
                span.ended_in_hyphen = false;
                merged[index] = Token::with_payload(joined, position, span);
                continue;
            }
        }

        if token.payload().ended_in_hyphen {
            pending = Some(merged.len());
        }
        merged.push(token);
    }

    merged
        .into_iter()
        .enumerate()
        .map(|(position, token)| token.renumbered(position))
        .collect()
}
