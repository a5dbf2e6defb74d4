//! Token values shared by the automaton and the scanner

use crate::error::{CoreError, Result};

/// A normalized word and its position in a document
///
/// `position` is the identity of a token: it orders the final match list and
/// is what duplicate emissions collapse on. The payload rides along for
/// collaborators (geometry, byte ranges) and is never inspected while
/// building or scanning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<P = ()> {
    text: String,
    position: usize,
    payload: P,
}

impl Token {
    /// Create a token without payload
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self::with_payload(text, position, ())
    }

    /// Number a sequence of words densely from zero
    ///
    /// ```
    /// use copymatch_core::Token;
    ///
    /// let tokens = Token::sequence(["hello", "world"]);
    /// assert_eq!(tokens[1].position(), 1);
    /// assert_eq!(tokens[1].text(), "world");
    /// ```
    pub fn sequence<I, S>(words: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words
            .into_iter()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect()
    }
}

impl<P> Token<P> {
    /// Create a token carrying a document-specific payload
    pub fn with_payload(text: impl Into<String>, position: usize, payload: P) -> Self {
        Self {
            text: text.into(),
            position,
            payload,
        }
    }

    /// Normalized token text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based position within the owning document
    pub fn position(&self) -> usize {
        self.position
    }

    /// Opaque payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Split into text, position and payload
    pub fn into_parts(self) -> (String, usize, P) {
        (self.text, self.position, self.payload)
    }

    /// Replace the position, keeping text and payload
    pub fn renumbered(self, position: usize) -> Self {
        Self { position, ..self }
    }
}

impl<P> AsRef<str> for Token<P> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Check the tokenizer contract: non-empty text, strictly increasing positions
pub fn validate_sequence<P>(tokens: &[Token<P>]) -> Result<()> {
    let mut previous: Option<usize> = None;
    for (index, token) in tokens.iter().enumerate() {
        if token.text.is_empty() {
            return Err(CoreError::EmptyToken { index });
        }
        if let Some(previous) = previous {
            if token.position <= previous {
                return Err(CoreError::PositionOrder {
                    index,
                    previous,
                    found: token.position,
                });
            }
        }
        previous = Some(token.position);
    }
    Ok(())
}
