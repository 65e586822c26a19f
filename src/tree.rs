use std::fmt;
use std::str::FromStr;

use crate::builder::Builder;
use crate::config::TreeConfig;
use crate::error::{Result, SuffixTreeError};
use crate::node::Nodes;
use crate::text::Text;
use crate::{CharType, IndexType, NodeID, INVALID, ROOT};

/// A suffix tree over a single text, built with Ukkonen's algorithm.
///
/// Once built the tree is read-only and can be shared between threads.
///
/// # Examples
///
/// ```
/// use suffix_tree::SuffixTree;
/// let tree: SuffixTree = "banana".parse().unwrap();
/// assert!(tree.contains_str("ana"));
/// assert!(!tree.contains_str("nab"));
/// assert_eq!(tree.find_all_str("ana"), vec![1, 3]);
/// ```
#[derive(Debug)]
pub struct SuffixTree {
    text: Text,
    nodes: Nodes,
    leaf_count: usize,
    config: TreeConfig,
}

impl SuffixTree {
    /// Builds a tree over `text` with the default configuration.
    pub fn new(text: Vec<CharType>) -> Result<Self> {
        Self::with_config(text, TreeConfig::default())
    }

    pub fn with_config(text: Vec<CharType>, config: TreeConfig) -> Result<Self> {
        let text = Text::new(text, &config)?;
        let (nodes, leaf_count) = Builder::new(text.clone()).build();
        Ok(Self {
            text,
            nodes,
            leaf_count,
            config,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_config(bytes, TreeConfig::default())
    }

    pub fn from_bytes_with_config(bytes: &[u8], config: TreeConfig) -> Result<Self> {
        Self::with_config(config.map_bytes(bytes), config)
    }

    /// Length of the indexed text, not counting the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The indexed text, without the terminator.
    #[must_use]
    pub fn text(&self) -> &[CharType] {
        self.text.body()
    }

    #[must_use]
    pub fn terminator(&self) -> CharType {
        self.text.terminator()
    }

    #[must_use]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves; always `len() + 1`.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Checks whether `pattern` occurs contiguously in the text.
    #[must_use]
    pub fn contains_substring(&self, pattern: &[CharType]) -> bool {
        self.match_point(pattern).is_some()
    }

    #[must_use]
    pub fn contains_bytes(&self, pattern: &[u8]) -> bool {
        self.contains_substring(&self.config.map_bytes(pattern))
    }

    #[must_use]
    pub fn contains_str(&self, pattern: &str) -> bool {
        self.contains_bytes(pattern.as_bytes())
    }

    /// Checks whether `pattern` is a suffix of the text.
    #[must_use]
    pub fn is_suffix(&self, pattern: &[CharType]) -> bool {
        let Some((node, consumed)) = self.match_point(pattern) else {
            return false;
        };
        let terminator = self.terminator();
        if consumed < self.nodes.edge_length(node) {
            let begin = self.nodes.get_node(node).begin;
            self.text.char_at(begin + consumed) == terminator
        } else {
            self.nodes.transition(node, terminator) != INVALID
        }
    }

    #[must_use]
    pub fn is_suffix_str(&self, pattern: &str) -> bool {
        self.is_suffix(&self.config.map_bytes(pattern.as_bytes()))
    }

    /// Every start position of `pattern` in the text, ascending.
    #[must_use]
    pub fn find_all(&self, pattern: &[CharType]) -> Vec<usize> {
        let Some((node, _)) = self.match_point(pattern) else {
            return Vec::new();
        };

        let len = self.len();
        let mut positions = Vec::new();
        let mut stack = vec![node];
        while let Some(node_id) = stack.pop() {
            let node = self.nodes.get_node(node_id);
            if node.is_leaf() {
                // The terminator's own leaf only sits under the root.
                if node.suffix_start < len {
                    positions.push(node.suffix_start);
                }
            } else {
                stack.extend(node.transitions.values().copied());
            }
        }
        positions.sort_unstable();
        positions
    }

    #[must_use]
    pub fn find_all_str(&self, pattern: &str) -> Vec<usize> {
        self.find_all(&self.config.map_bytes(pattern.as_bytes()))
    }

    /// Every suffix of the terminated text, spelled out by walking from the
    /// root to each leaf. Siblings are visited in character order, so the
    /// result is sorted with the terminator ordered by its value.
    #[must_use]
    pub fn suffixes(&self) -> Vec<Vec<CharType>> {
        let mut results: Vec<Vec<CharType>> = Vec::with_capacity(self.leaf_count);
        let mut cur: Vec<CharType> = Vec::new();
        // (node, length of the path above its edge)
        let mut stack: Vec<(NodeID, usize)> = self.children_rev(ROOT, 0);

        while let Some((node_id, depth)) = stack.pop() {
            cur.truncate(depth);
            cur.extend_from_slice(self.edge_label(node_id));
            if self.nodes.get_node(node_id).is_leaf() {
                results.push(cur.clone());
            } else {
                stack.extend(self.children_rev(node_id, cur.len()));
            }
        }
        results
    }

    /// Prints the tree to stdout, one edge label per line.
    pub fn pretty_print(&self) {
        print!("{self}");
    }

    /// Walks `pattern` down from the root. Returns the node whose edge the
    /// walk ends on and how many characters of that edge were consumed.
    fn match_point(&self, pattern: &[CharType]) -> Option<(NodeID, IndexType)> {
        // The terminator is an implementation detail, never a match.
        if pattern.contains(&self.terminator()) {
            return None;
        }

        let mut node = ROOT;
        let mut consumed = 0;
        let mut index = 0;
        while index < pattern.len() {
            let target = self.nodes.transition(node, pattern[index]);
            if target == INVALID {
                return None;
            }
            consumed = 0;
            for &ch in self.edge_label(target) {
                if index == pattern.len() {
                    break;
                }
                if ch != pattern[index] {
                    return None;
                }
                index += 1;
                consumed += 1;
            }
            node = target;
        }
        Some((node, consumed))
    }

    fn edge_label(&self, node_id: NodeID) -> &[CharType] {
        let begin = self.nodes.get_node(node_id).begin;
        self.text.slice(begin, self.nodes.edge_end(node_id))
    }

    fn children_rev(&self, node_id: NodeID, depth: usize) -> Vec<(NodeID, usize)> {
        self.nodes
            .sorted_children(node_id)
            .into_iter()
            .rev()
            .map(|(_, child)| (child, depth))
            .collect()
    }
}

impl FromStr for SuffixTree {
    type Err = SuffixTreeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = self.children_rev(ROOT, 0);
        while let Some((node_id, indent)) = stack.pop() {
            writeln!(f, "{:width$}{:?}", "", self.edge_label(node_id), width = indent)?;
            stack.extend(self.children_rev(node_id, indent + 4));
        }
        Ok(())
    }
}
