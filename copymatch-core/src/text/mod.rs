//! Turning plain text into token sequences
//!
//! These helpers sit in front of the matching core: they normalize raw
//! words, locate them in the source text and rejoin hyphen-broken words.
//! The automaton and scanner never look at any of this.

mod hyphenation;
mod normalize;
mod tokenize;

pub use hyphenation::{merge_hyphenated, Vocabulary};
pub use normalize::{normalize, normalize_with, NormalizationOptions};
pub use tokenize::{tokenize, ByteRange, TextToken, WordSpan};
