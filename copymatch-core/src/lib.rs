//! Fixed-window automaton matching for copied-passage detection
//!
//! This crate finds runs of at least N consecutive tokens that a *suspect*
//! document shares with a *source* document, optionally tolerating small
//! spelling differences per token.
//!
//! # Architecture
//!
//! - **Automaton**: a trie over every length-N window of the suspect tokens,
//!   stored as an index-addressed arena and immutable once built.
//! - **Equivalence**: exact or bounded-edit-distance transitions.
//! - **Scanner**: one forward pass over a source, tracking at most N partial
//!   windows at a time.
//! - **Aggregate**: deduplicates and orders the scanner's raw output.
//! - **Text** and **spans**: plain-text preparation in front of the core and
//!   span grouping behind it.
//!
//! # Example
//!
//! ```rust
//! use copymatch_core::{aggregate, scan, Automaton, Equivalence, Token};
//! use std::num::NonZeroUsize;
//!
//! let suspect = Token::sequence(["hello", "world", "and", "goodbye"]);
//! let automaton = Automaton::build(suspect, NonZeroUsize::new(2).unwrap());
//!
//! let source = Token::sequence(["this", "is", "the", "world", "and", "goodbye"]);
//! let matches = aggregate(scan(&automaton, &source, Equivalence::Exact));
//!
//! let positions: Vec<usize> = matches.iter().map(|t| t.position()).collect();
//! assert_eq!(positions, vec![1, 2, 3]);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod automaton;
pub mod equivalence;
pub mod error;
pub mod scanner;
pub mod spans;
pub mod text;
pub mod token;

pub use aggregate::{aggregate, aggregate_owned};
pub use automaton::{Automaton, Node, NodeId};
pub use equivalence::{bounded_levenshtein, Equivalence, Oracle, Probe};
pub use error::{CoreError, Result};
pub use scanner::{emit_push, scan, Scanner};
pub use spans::{group_positions, group_spans, MatchSpan};
pub use token::{validate_sequence, Token};

use std::num::NonZeroUsize;

/// Default minimum run length
pub const DEFAULT_WINDOW_SIZE: usize = 8;

/// Check a configured window size
pub fn window_size(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n).ok_or(CoreError::InvalidWindowSize)
}

/// Scan and aggregate in one call
pub fn find_matches<'a, P, Q>(
    automaton: &'a Automaton<P>,
    candidates: &[Token<Q>],
    equivalence: Equivalence,
) -> Vec<&'a Token<P>> {
    aggregate(scan(automaton, candidates, equivalence))
}
