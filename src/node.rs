//! Arena storage for tree nodes.
//!
//! There is no explicit edge type: every node stores the half-open range
//! `[begin, end)` of the text labelling the edge from its parent. Leaf edges
//! are `EdgeEnd::Open` and resolve their end through the arena's shared
//! `leaf_end` counter, so bumping that counter once extends every leaf.

use std::collections::HashMap;

use crate::text::Text;
use crate::{CharType, IndexType, NodeID, INVALID, ROOT};

/// Right boundary of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeEnd {
    /// Leaf edge; the end is the arena's current `leaf_end`.
    Open,
    /// Internal edge with a fixed, exclusive end.
    Closed(IndexType),
}

#[derive(Debug)]
pub(crate) struct Node {
    /// Children keyed by the first character of their edge.
    pub(crate) transitions: HashMap<CharType, NodeID>,

    pub(crate) suffix_link: NodeID,

    pub(crate) begin: IndexType,
    pub(crate) end: EdgeEnd,

    /// Start position of the suffix spelled by a leaf, `INVALID` otherwise.
    pub(crate) suffix_start: IndexType,
}

impl Node {
    fn new(begin: IndexType, end: EdgeEnd, suffix_start: IndexType) -> Self {
        Self {
            transitions: HashMap::new(),
            suffix_link: INVALID,
            begin,
            end,
            suffix_start,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.end == EdgeEnd::Open
    }

    pub(crate) fn get_suffix_link(&self) -> NodeID {
        assert!(self.suffix_link != INVALID, "Invalid suffix link");
        self.suffix_link
    }
}

#[derive(Debug)]
pub(crate) struct Nodes {
    storage: Vec<Node>,
    /// Shared exclusive end of every open edge.
    leaf_end: IndexType,
}

impl Nodes {
    /// An arena holding only the root, whose edge label is empty.
    pub(crate) fn new() -> Self {
        Self {
            storage: vec![Node::new(0, EdgeEnd::Closed(0), INVALID)],
            leaf_end: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Self::new();
        nodes.storage.reserve(capacity.saturating_sub(1));
        nodes
    }

    pub(crate) fn len(&self) -> usize {
        self.storage.len()
    }

    pub(crate) fn get_node(&self, node_id: NodeID) -> &Node {
        &self.storage[node_id]
    }

    pub(crate) fn get_node_mut(&mut self, node_id: NodeID) -> &mut Node {
        &mut self.storage[node_id]
    }

    /// Extends every open edge by one character.
    pub(crate) fn advance_leaf_end(&mut self) {
        self.leaf_end += 1;
    }

    /// Allocates a leaf whose edge spans `[begin, leaf_end)`.
    pub(crate) fn create_leaf(&mut self, begin: IndexType, suffix_start: IndexType) -> NodeID {
        self.push(Node::new(begin, EdgeEnd::Open, suffix_start))
    }

    /// Inserts a new internal node `length` characters down the edge
    /// `parent -> child` and returns it. `child` keeps its own end, so an
    /// open leaf edge stays open.
    pub(crate) fn split_edge(
        &mut self,
        text: &Text,
        parent: NodeID,
        child: NodeID,
        length: IndexType,
    ) -> NodeID {
        debug_assert!(length > 0 && length < self.edge_length(child));

        let begin = self.get_node(child).begin;
        let split = self.push(Node::new(begin, EdgeEnd::Closed(begin + length), INVALID));
        self.get_node_mut(child).begin = begin + length;

        self.set_transition(parent, text.char_at(begin), split);
        self.set_transition(split, text.char_at(begin + length), child);
        split
    }

    /// Exclusive end of `node`'s edge, resolving open edges through `leaf_end`.
    pub(crate) fn edge_end(&self, node_id: NodeID) -> IndexType {
        match self.get_node(node_id).end {
            EdgeEnd::Open => self.leaf_end,
            EdgeEnd::Closed(end) => end.min(self.leaf_end),
        }
    }

    /// Always recomputed: `leaf_end` moves between calls.
    pub(crate) fn edge_length(&self, node_id: NodeID) -> IndexType {
        self.edge_end(node_id) - self.get_node(node_id).begin
    }

    pub(crate) fn transition(&self, node_id: NodeID, ch: CharType) -> NodeID {
        match self.get_node(node_id).transitions.get(&ch) {
            None => INVALID,
            Some(x) => *x,
        }
    }

    pub(crate) fn set_transition(&mut self, node_id: NodeID, ch: CharType, target: NodeID) {
        self.get_node_mut(node_id).transitions.insert(ch, target);
    }

    /// Children of `node_id` ordered by their first character.
    pub(crate) fn sorted_children(&self, node_id: NodeID) -> Vec<(CharType, NodeID)> {
        let mut children: Vec<(CharType, NodeID)> = self
            .get_node(node_id)
            .transitions
            .iter()
            .map(|(&ch, &target)| (ch, target))
            .collect();
        children.sort_unstable();
        children
    }

    fn push(&mut self, node: Node) -> NodeID {
        self.storage.push(node);
        let id = self.storage.len() - 1;
        debug_assert!(id != ROOT && id != INVALID);
        id
    }
}
