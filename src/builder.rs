//! Online construction with Ukkonen's algorithm.
//!
//! One phase runs per character of the terminated text. A phase first bumps
//! the shared leaf end, which extends every existing leaf at once, then
//! inserts the outstanding suffixes starting from the active point until
//! either all of them are in the tree or the next one is already present
//! (rule 3). Suffixes left over after a rule 3 stop are carried to the next
//! phase in `remaining`.

use log::{debug, trace};

use crate::node::Nodes;
use crate::text::Text;
use crate::{IndexType, NodeID, INVALID, ROOT};

/// Where the next suffix to extend currently ends in the tree.
///
/// The matched string is `text[edge..edge + length)` read downwards from
/// `node`. `edge` is meaningless while `length == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub(crate) node: NodeID,
    pub(crate) edge: IndexType,
    pub(crate) length: IndexType,
}

impl ActivePoint {
    const fn new() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
        }
    }
}

/// Outcome of a single extension step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extension {
    /// A leaf was added; more suffixes may be outstanding.
    Continue,
    /// The suffix already occurs in the tree; the phase is over.
    RuleThreeStop,
}

pub(crate) struct Builder {
    text: Text,
    nodes: Nodes,
    active: ActivePoint,
    /// Suffixes of the processed prefix that are not yet explicit leaves.
    remaining: IndexType,
    /// Internal node created in this phase that still waits for its suffix link.
    last_new_node: NodeID,
    leaf_count: usize,
}

impl Builder {
    pub(crate) fn new(text: Text) -> Self {
        // A suffix tree never has more than 2n nodes.
        let nodes = Nodes::with_capacity(2 * text.len());
        Self {
            text,
            nodes,
            active: ActivePoint::new(),
            remaining: 0,
            last_new_node: INVALID,
            leaf_count: 0,
        }
    }

    /// Runs every phase and hands the finished arena over.
    pub(crate) fn build(mut self) -> (Nodes, usize) {
        debug!("building suffix tree over {} characters", self.text.len());
        for i in 0..self.text.len() {
            self.execute_phase(i);
        }
        // The terminator occurs once, so the last phase cannot stop early.
        assert_eq!(self.remaining, 0, "suffixes left after the final phase");
        debug!(
            "suffix tree built: {} nodes, {} leaves",
            self.nodes.len(),
            self.leaf_count
        );
        (self.nodes, self.leaf_count)
    }

    fn execute_phase(&mut self, i: IndexType) {
        self.nodes.advance_leaf_end();
        self.remaining += 1;
        self.last_new_node = INVALID;

        while self.remaining > 0 {
            if self.extend(i) == Extension::RuleThreeStop {
                trace!("phase {i}: rule 3 with {} suffixes pending", self.remaining);
                break;
            }
        }
    }

    /// Inserts the longest outstanding suffix ending at `i`, or detects that
    /// it is already present.
    fn extend(&mut self, i: IndexType) -> Extension {
        let ch = self.text.char_at(i);
        if self.active.length == 0 {
            self.active.edge = i;
        }

        let next = loop {
            let next = self
                .nodes
                .transition(self.active.node, self.text.char_at(self.active.edge));
            if next == INVALID {
                debug_assert_eq!(self.active.length, 0, "active edge has no child");
                break INVALID;
            }
            if !self.walk_down(next) {
                break next;
            }
        };

        let suffix_start = i + 1 - self.remaining;
        if next == INVALID {
            // Rule 2 directly below the active node.
            let leaf = self.nodes.create_leaf(i, suffix_start);
            self.nodes.set_transition(self.active.node, ch, leaf);
            self.leaf_count += 1;
            let target = self.active.node;
            self.resolve_pending_link(target);
        } else {
            let offset = self.nodes.get_node(next).begin + self.active.length;
            if self.text.char_at(offset) == ch {
                if self.active.node != ROOT {
                    let target = self.active.node;
                    self.resolve_pending_link(target);
                }
                self.active.length += 1;
                return Extension::RuleThreeStop;
            }

            // Rule 2 in the middle of an edge.
            let split = self
                .nodes
                .split_edge(&self.text, self.active.node, next, self.active.length);
            trace!(
                "phase {i}: split node {next} at offset {}, new node {split}",
                self.active.length
            );
            let leaf = self.nodes.create_leaf(i, suffix_start);
            self.nodes.set_transition(split, ch, leaf);
            self.leaf_count += 1;

            // Relinked later in this phase if another internal node follows.
            self.nodes.get_node_mut(split).suffix_link = ROOT;
            self.resolve_pending_link(split);
            self.last_new_node = split;
        }

        self.remaining -= 1;
        self.advance_to_next_suffix(i);
        Extension::Continue
    }

    /// Moves the active point to `next` when the active length spans its
    /// whole edge. Returns whether it moved.
    fn walk_down(&mut self, next: NodeID) -> bool {
        let edge_length = self.nodes.edge_length(next);
        if self.active.length < edge_length {
            return false;
        }
        self.active.edge += edge_length;
        self.active.length -= edge_length;
        self.active.node = next;
        true
    }

    fn advance_to_next_suffix(&mut self, i: IndexType) {
        if self.active.node == ROOT {
            if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = i + 1 - self.remaining;
            }
        } else {
            self.active.node = self.nodes.get_node(self.active.node).get_suffix_link();
        }
    }

    fn resolve_pending_link(&mut self, target: NodeID) {
        if self.last_new_node == INVALID {
            return;
        }
        debug_assert_ne!(self.last_new_node, target, "suffix link to itself");
        self.nodes.get_node_mut(self.last_new_node).suffix_link = target;
        self.last_new_node = INVALID;
    }
}
