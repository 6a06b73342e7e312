//! Build configuration.

use serde::{Deserialize, Serialize};

/// Sentinel used to frame `&str` input when no configuration is given.
pub const DEFAULT_SENTINEL: char = '$';

/// Which construction path builds the compacted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStrategy {
    /// Direct build for a single string, trie-then-compact for several.
    #[default]
    Auto,
    /// Insert every suffix straight into the compacted tree, splitting edges.
    Direct,
    /// Build the uncompacted suffix trie first, then compact it.
    Generalized,
}

impl BuildStrategy {
    /// Resolves `Auto` against the number of indexed strings.
    pub fn resolve(self, string_count: usize) -> BuildStrategy {
        match self {
            BuildStrategy::Auto if string_count > 1 => BuildStrategy::Generalized,
            BuildStrategy::Auto => BuildStrategy::Direct,
            other => other,
        }
    }
}

/// Configuration for building a tree from `&str` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Character placed before and after every string (default: `'$'`).
    /// Must not occur inside the strings.
    pub sentinel: char,
    /// Construction path (default: auto).
    pub strategy: BuildStrategy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            strategy: BuildStrategy::Auto,
        }
    }
}
