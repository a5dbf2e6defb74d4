//! Token equivalence strategies
//!
//! A strategy decides, at each trie transition, whether a candidate token
//! may follow an edge. Exact matching is a hash lookup. Bounded edit
//! distance falls back to comparing the token against every edge key of the
//! node, using a Levenshtein DFA built once per candidate token.

use crate::automaton::{Automaton, NodeId};
use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, DFA};
use std::cell::OnceCell;
use std::sync::OnceLock;

/// Largest threshold served by a Levenshtein DFA; larger ones use the
/// banded dynamic program, since DFA construction grows steeply with distance.
pub const MAX_DFA_DISTANCE: u8 = 3;

/// Process-wide DFA builder for `distance`, constructed on first use
fn dfa_builder(distance: u8) -> Option<&'static LevenshteinAutomatonBuilder> {
    static BUILDERS: [OnceLock<LevenshteinAutomatonBuilder>; MAX_DFA_DISTANCE as usize] =
        [OnceLock::new(), OnceLock::new(), OnceLock::new()];
    let slot = BUILDERS.get(usize::from(distance).checked_sub(1)?)?;
    Some(slot.get_or_init(|| LevenshteinAutomatonBuilder::new(distance, false)))
}

/// How a candidate token is compared with automaton edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Equivalence {
    /// Token text must equal the edge key
    #[default]
    Exact,
    /// Token text may differ from the edge key by at most this many edits
    ///
    /// An exact edge always wins. Otherwise the edge with the lowest
    /// distance is taken, ties going to the lexicographically smallest key,
    /// so fuzzy scans are deterministic.
    BoundedEditDistance(u8),
}

impl Equivalence {
    /// Map a configured threshold to a strategy; 0 means exact
    pub fn from_threshold(threshold: u8) -> Self {
        match threshold {
            0 => Equivalence::Exact,
            d => Equivalence::BoundedEditDistance(d),
        }
    }

    /// The tolerated edit distance
    pub fn threshold(&self) -> u8 {
        match self {
            Equivalence::Exact => 0,
            Equivalence::BoundedEditDistance(d) => *d,
        }
    }

    /// One-off transition from `node` on `text`
    ///
    /// Scans should use an [`Oracle`] instead, which reuses one candidate
    /// DFA across every node advanced on the same token.
    pub fn next<P>(&self, automaton: &Automaton<P>, text: &str, node: NodeId) -> Option<NodeId> {
        Oracle::new(*self).probe(text).next(automaton, node)
    }
}

/// Reusable transition machinery for one strategy
///
/// Cheap to create and copy: DFA builders are shared by every oracle of the
/// same distance.
#[derive(Clone, Copy)]
pub struct Oracle {
    equivalence: Equivalence,
    builder: Option<&'static LevenshteinAutomatonBuilder>,
}

impl std::fmt::Debug for Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oracle")
            .field("equivalence", &self.equivalence)
            .field("dfa", &self.builder.is_some())
            .finish()
    }
}

impl Oracle {
    /// Prepare an oracle for the given strategy
    pub fn new(equivalence: Equivalence) -> Self {
        let builder = match equivalence {
            Equivalence::BoundedEditDistance(d) => dfa_builder(d),
            Equivalence::Exact => None,
        };
        Self {
            equivalence,
            builder,
        }
    }

    /// The strategy this oracle implements
    pub fn equivalence(&self) -> Equivalence {
        self.equivalence
    }

    /// Prepare to advance any number of nodes on one candidate token
    pub fn probe<'o, 't>(&'o self, text: &'t str) -> Probe<'o, 't> {
        Probe {
            oracle: self,
            text,
            dfa: OnceCell::new(),
        }
    }
}

/// A candidate token ready to be tested against trie edges
///
/// The Levenshtein DFA is only built the first time a node lacks an exact
/// edge for the token.
pub struct Probe<'o, 't> {
    oracle: &'o Oracle,
    text: &'t str,
    dfa: OnceCell<Option<DFA>>,
}

impl Probe<'_, '_> {
    /// Node reached from `node` on this token, if any
    pub fn next<P>(&self, automaton: &Automaton<P>, node: NodeId) -> Option<NodeId> {
        let state = automaton.node(node);
        if let Some(child) = state.child(self.text) {
            return Some(child);
        }

        let max = match self.oracle.equivalence {
            Equivalence::Exact => return None,
            Equivalence::BoundedEditDistance(d) => d,
        };

        let mut best: Option<(u8, &str, NodeId)> = None;
        for (key, child) in state.children() {
            let Some(distance) = self.distance(key, max) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((d, k, _)) => (distance, key) < (d, k),
            };
            if better {
                best = Some((distance, key, child));
            }
        }
        best.map(|(_, _, child)| child)
    }

    fn distance(&self, key: &str, max: u8) -> Option<u8> {
        let dfa = self.dfa.get_or_init(|| {
            self.oracle
                .builder
                .map(|builder| builder.build_dfa(self.text))
        });
        match dfa {
            Some(dfa) => match dfa.eval(key) {
                Distance::Exact(d) if d <= max => Some(d),
                _ => None,
            },
            None => bounded_levenshtein(self.text, key, max as usize).map(|d| d as u8),
        }
    }
}

/// Levenshtein distance between `a` and `b` if it does not exceed `max`
///
/// Character-based Wagner-Fischer, abandoned as soon as a whole row
/// exceeds the bound.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(a.len().max(b.len()));
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}
