//! A suffix tree implementation using Ukkonen's algorithm.
//!
//! The tree is built online, one character at a time, over a single text
//! terminated by a unique character. Edges are index ranges into the shared
//! text, and all leaf edges share one end counter, which keeps construction
//! linear in the length of the text.
//!
//! ```
//! use suffix_tree::{SuffixTree, TreeConfig};
//!
//! let tree = SuffixTree::new(vec![1, 2, 3, 1, 2]).unwrap();
//! assert!(tree.contains_substring(&[3, 1]));
//! assert_eq!(tree.find_all(&[1, 2]), vec![0, 3]);
//!
//! let config = TreeConfig::default().with_terminator(b'$' as u64);
//! assert!(SuffixTree::from_bytes_with_config(b"a$b", config).is_err());
//! ```
mod builder;
mod config;
mod error;
mod node;
mod text;
mod tree;

pub use config::TreeConfig;
pub use error::{Result, SuffixTreeError};
pub use tree::SuffixTree;

type NodeID = usize;
type IndexType = usize;
pub type CharType = u64;

// Special nodes.
const ROOT: NodeID = 0;
const INVALID: NodeID = NodeID::MAX;
