//! Fixed-window trie over a suspect document
//!
//! Every root-to-depth-N path spells one length-N window of the suspect
//! token stream. Nodes live in a flat arena and refer to their children by
//! index, so the finished automaton is plain data: immutable, `Send + Sync`,
//! and shareable across concurrent scans without locking.

use crate::token::Token;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Index of a node in the automaton arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, present in every automaton
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node
#[derive(Debug, Clone, Default)]
pub struct Node {
    children: HashMap<Box<str>, NodeId>,
    depth: usize,
    /// Start indices (into the suspect sequence) of the windows ending here
    runs: SmallVec<[usize; 1]>,
}

impl Node {
    /// Number of edges between the root and this node
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child reached by an exact token text
    pub fn child(&self, text: &str) -> Option<NodeId> {
        self.children.get(text).copied()
    }

    /// All outgoing edges, in no particular order
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(key, &id)| (key.as_ref(), id))
    }

    /// Number of outgoing edges
    pub fn branching(&self) -> usize {
        self.children.len()
    }
}

/// Immutable window automaton built from one suspect document
#[derive(Debug, Clone)]
pub struct Automaton<P = ()> {
    nodes: Vec<Node>,
    tokens: Vec<Token<P>>,
    window_size: NonZeroUsize,
}

/// A window walk that has not reached depth N yet
#[derive(Clone, Copy)]
struct Thread {
    node: NodeId,
    start: usize,
}

impl<P> Automaton<P> {
    /// Build the automaton for every length-`window_size` window of `tokens`
    ///
    /// One thread starts at the root on every token; each live thread
    /// consumes the token, creating the edge if needed, and retires once it
    /// reaches depth `window_size`, recording its window at that node. At
    /// most `window_size` threads are alive at once, so construction is
    /// O(L·N). A document shorter than the window yields no terminal nodes.
    pub fn build(tokens: Vec<Token<P>>, window_size: NonZeroUsize) -> Self {
        let n = window_size.get();
        let mut nodes = vec![Node::default()];
        let mut threads: SmallVec<[Thread; 8]> = SmallVec::new();
        let mut survivors: SmallVec<[Thread; 8]> = SmallVec::new();

        for (i, token) in tokens.iter().enumerate() {
            threads.push(Thread {
                node: NodeId::ROOT,
                start: i,
            });

            for thread in threads.drain(..) {
                let child = child_or_insert(&mut nodes, thread.node, token.text());
                if nodes[child.index()].depth == n {
                    nodes[child.index()].runs.push(thread.start);
                } else {
                    survivors.push(Thread {
                        node: child,
                        start: thread.start,
                    });
                }
            }

            std::mem::swap(&mut threads, &mut survivors);
        }

        Self {
            nodes,
            tokens,
            window_size,
        }
    }

    /// Root of the trie
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Window size N
    pub fn window_size(&self) -> usize {
        self.window_size.get()
    }

    /// True iff the node sits at depth N
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.node(id).depth == self.window_size.get()
    }

    /// The token runs recorded at a node, in suspect-document order
    ///
    /// Identical windows occurring at several places in the suspect document
    /// all end at the same terminal node, so a terminal may hold more than
    /// one run.
    pub fn captured_runs(&self, id: NodeId) -> impl Iterator<Item = &[Token<P>]> + '_ {
        let n = self.window_size.get();
        self.node(id)
            .runs
            .iter()
            .map(move |&start| &self.tokens[start..start + n])
    }

    /// The suspect token sequence the automaton was built from
    pub fn tokens(&self) -> &[Token<P>] {
        &self.tokens
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal nodes (distinct windows)
    pub fn terminal_count(&self) -> usize {
        let n = self.window_size.get();
        self.nodes.iter().filter(|node| node.depth == n).count()
    }
}

fn child_or_insert(nodes: &mut Vec<Node>, parent: NodeId, text: &str) -> NodeId {
    if let Some(child) = nodes[parent.index()].child(text) {
        return child;
    }
    let id = NodeId(nodes.len() as u32);
    let depth = nodes[parent.index()].depth + 1;
    nodes.push(Node {
        depth,
        ..Node::default()
    });
    nodes[parent.index()].children.insert(text.into(), id);
    id
}
