//! Streaming scan of a candidate document against an automaton

use crate::automaton::{Automaton, NodeId};
use crate::equivalence::{Equivalence, Oracle};
use crate::token::Token;
use smallvec::SmallVec;

/// Single forward pass over a candidate token stream
///
/// The scanner keeps one active node per recent start position that is
/// still short of a full window, never more than N of them. Each
/// [`step`](Scanner::step) advances every active node on the next candidate
/// token and reports the suspect tokens of every window completed along the
/// way.
#[derive(Debug)]
pub struct Scanner<'a, P> {
    automaton: &'a Automaton<P>,
    oracle: Oracle,
    active: SmallVec<[NodeId; 8]>,
    next: SmallVec<[NodeId; 8]>,
    steps: usize,
}

impl<'a, P> Scanner<'a, P> {
    /// Start a scan with the given equivalence strategy
    pub fn new(automaton: &'a Automaton<P>, equivalence: Equivalence) -> Self {
        Self::with_oracle(automaton, Oracle::new(equivalence))
    }

    /// Start a scan with an oracle prepared by the caller
    pub fn with_oracle(automaton: &'a Automaton<P>, oracle: Oracle) -> Self {
        let mut active = SmallVec::new();
        active.push(automaton.root());
        Self {
            automaton,
            oracle,
            active,
            next: SmallVec::new(),
            steps: 0,
        }
    }

    /// Consume one candidate token
    ///
    /// Every suspect token of every captured run at a reached terminal is
    /// passed to `emit`; the same suspect token may be emitted many times.
    pub fn step<F>(&mut self, text: &str, emit: &mut F)
    where
        F: FnMut(&'a Token<P>),
    {
        let automaton = self.automaton;
        let probe = self.oracle.probe(text);

        self.next.clear();
        self.next.push(automaton.root());

        for &node in &self.active {
            let Some(reached) = probe.next(automaton, node) else {
                continue;
            };
            if automaton.is_terminal(reached) {
                for run in automaton.captured_runs(reached) {
                    run.iter().for_each(&mut *emit);
                }
            } else {
                self.next.push(reached);
            }
        }

        std::mem::swap(&mut self.active, &mut self.next);
        self.steps += 1;
    }

    /// Number of nodes currently tracking a partial window (root included)
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of candidate tokens consumed so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Scan a whole candidate sequence, returning raw (unaggregated) matches
    pub fn scan<Q>(mut self, candidates: &[Token<Q>]) -> Vec<&'a Token<P>> {
        let mut raw = Vec::new();
        for candidate in candidates {
            self.step(candidate.text(), &mut emit_push(&mut raw));
        }
        raw
    }
}

/// Emitter that appends every matched token to a vector
pub fn emit_push<'v, 'a, P>(out: &'v mut Vec<&'a Token<P>>) -> impl FnMut(&'a Token<P>) + 'v
where
    'a: 'v,
{
    move |token| out.push(token)
}

/// Scan `candidates` against `automaton` and return the raw matches
pub fn scan<'a, P, Q>(
    automaton: &'a Automaton<P>,
    candidates: &[Token<Q>],
    equivalence: Equivalence,
) -> Vec<&'a Token<P>> {
    Scanner::new(automaton, equivalence).scan(candidates)
}
