//! Bookkeeping for maximal repeats and the longest repeat, shared by both
//! construction paths.

use crate::{IndexType, NodeID};

#[derive(Debug, Default, Clone)]
pub(crate) struct RepeatTracker {
    /// Nodes flagged left-diverse, in the order they were flagged.
    maximals: Vec<NodeID>,

    /// Deepest branching node seen so far.
    node_longest_substring: Option<NodeID>,

    /// String depth of `node_longest_substring`.
    index_longest_substring: IndexType,
}

impl RepeatTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_maximal(&mut self, node: NodeID) {
        self.maximals.push(node);
    }

    /// Only a strictly deeper node replaces the current one, so the first
    /// node to reach a depth keeps it.
    pub(crate) fn offer_longest(&mut self, node: NodeID, depth: IndexType) -> bool {
        if depth <= self.index_longest_substring {
            return false;
        }
        self.index_longest_substring = depth;
        self.node_longest_substring = Some(node);
        true
    }

    pub(crate) fn maximals(&self) -> &[NodeID] {
        &self.maximals
    }

    pub(crate) fn longest(&self) -> Option<NodeID> {
        self.node_longest_substring
    }

    pub(crate) fn longest_depth(&self) -> IndexType {
        self.index_longest_substring
    }
}
