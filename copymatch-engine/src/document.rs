//! Turning raw documents into token sequences

use crate::config::MatchConfig;
use copymatch_core::text::{merge_hyphenated, tokenize, NormalizationOptions, TextToken, Vocabulary};
use std::sync::Arc;

/// Text preparation settings shared by the suspect and every source
#[derive(Debug, Clone, Default)]
pub struct TextPreparer {
    normalization: NormalizationOptions,
    vocabulary: Option<Arc<Vocabulary>>,
}

impl TextPreparer {
    /// Preparer matching a configuration
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            normalization: config.normalization,
            vocabulary: config.vocabulary.clone(),
        }
    }

    /// Tokenize, normalize and (with a vocabulary) rejoin hyphenated words
    pub fn tokens(&self, text: &str) -> Vec<TextToken> {
        let tokens = tokenize(text, &self.normalization);
        match &self.vocabulary {
            Some(vocabulary) => merge_hyphenated(tokens, vocabulary),
            None => tokens,
        }
    }

    /// Prepare a labeled document
    pub fn prepare(&self, label: impl Into<String>, text: String) -> PreparedDocument {
        let tokens = self.tokens(&text);
        PreparedDocument {
            label: label.into(),
            text,
            tokens,
        }
    }
}

/// A document read into memory and tokenized
#[derive(Debug, Clone)]
pub struct PreparedDocument {
    /// Name used in reports
    pub label: String,
    /// The raw text, which token spans index into
    pub text: String,
    /// Normalized tokens with dense positions
    pub tokens: Vec<TextToken>,
}
