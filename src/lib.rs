//! Compacted suffix trees for finding repeats in one or more strings.
//!
//! A tree answers two queries:
//!
//! - the longest substring occurring at least twice;
//! - the maximal repeats, i.e. repeated substrings whose occurrences do not
//!   all share the same preceding character.
//!
//! Strings are framed by a sentinel before indexing. A single string is
//! indexed by inserting its suffixes straight into the compacted tree and
//! splitting edges as suffixes diverge. Several strings go through an
//! uncompacted [`SuffixTrie`] first, which is then compacted.
//!
//! # Examples
//!
//! ```
//! use repeat_suffix_tree::CompactSuffixTree;
//! let tree = CompactSuffixTree::new("aaaa").unwrap();
//! assert_eq!(tree.longest_repeated_string(), "aaa");
//! assert_eq!(tree.maximal_repeat_strings(), vec!["aaa", "aa", "a"]);
//!
//! let tree = CompactSuffixTree::from_strings(&["abc", "bcd"]).unwrap();
//! assert_eq!(tree.maximal_repeat_strings(), vec!["bc"]);
//! ```
mod compactor;
mod config;
mod error;
mod repeats;
mod text;
mod tree;
mod trie;

pub use config::{BuildStrategy, TreeConfig, DEFAULT_SENTINEL};
pub use error::{Error, Result};
pub use text::TextBuffer;
pub use tree::CompactSuffixTree;
pub use trie::SuffixTrie;

/// Index into a [`TextBuffer`].
pub type IndexType = u32;

type NodeID = u32;

// Both node arenas keep the root at slot 0.
const ROOT: NodeID = 0;
