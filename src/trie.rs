//! Uncompacted suffix trie with one node per character.
//!
//! Construction is quadratic in the string length. The trie exists to feed
//! the compactor on the generalized path, where several strings are inserted
//! one after another before the tree is compacted.

use std::ops::Range;

use tracing::trace;

use crate::error::Result;
use crate::text::{suffix_starts, TextBuffer};
use crate::{IndexType, NodeID, ROOT};

/// A node spells the single character at `position`.
#[derive(Debug)]
pub(crate) struct TrieNode {
    pub(crate) position: IndexType,

    /// Start of the suffix that created this node.
    pub(crate) index_start_path: IndexType,

    pub(crate) is_left_diverse: bool,

    pub(crate) children: Vec<NodeID>,
}

impl TrieNode {
    fn new(position: IndexType, index_start_path: IndexType) -> Self {
        Self {
            position,
            index_start_path,
            is_left_diverse: false,
            children: Vec::new(),
        }
    }
}

/// Suffix trie over one or more framed strings.
///
/// # Examples
///
/// ```
/// use repeat_suffix_tree::{CompactSuffixTree, SuffixTrie};
/// let mut trie = SuffixTrie::new();
/// trie.add_string(&['a', 'b', 'c'], '$').unwrap();
/// trie.add_string(&['b', 'c', 'd'], '$').unwrap();
/// let tree = CompactSuffixTree::from_trie(&trie);
/// assert_eq!(tree.longest_repeated_string(), "bc");
/// ```
#[derive(Debug)]
pub struct SuffixTrie<C> {
    text: TextBuffer<C>,
    node_storage: Vec<TrieNode>,
}

impl<C: Copy + Eq> Default for SuffixTrie<C> {
    fn default() -> Self {
        Self::from_text(TextBuffer::new())
    }
}

impl<C: Copy + Eq> SuffixTrie<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trie holding the suffixes of every string already in `text`.
    pub fn from_text(text: TextBuffer<C>) -> Self {
        let strings = text.strings().to_vec();
        let mut trie = Self {
            text,
            node_storage: vec![TrieNode::new(0, 0)],
        };
        for string in strings {
            trie.insert_suffixes_of(string);
        }
        trie
    }

    /// Frames `body` with `sentinel` and inserts its suffixes.
    pub fn add_string(&mut self, body: &[C], sentinel: C) -> Result<()> {
        let string = self.text.push_framed(body, sentinel)?;
        self.insert_suffixes_of(string);
        Ok(())
    }

    /// Inserts the suffixes of a string the caller has already framed.
    pub fn add_framed(&mut self, framed: &[C]) -> Result<()> {
        let string = self.text.push_preframed(framed)?;
        self.insert_suffixes_of(string);
        Ok(())
    }

    pub fn text(&self) -> &TextBuffer<C> {
        &self.text
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_storage.len()
    }

    fn insert_suffixes_of(&mut self, string: Range<IndexType>) {
        let before = self.node_storage.len();
        for start in suffix_starts(&string) {
            self.insert_suffix(start, string.end);
        }
        trace!(
            begin = string.start,
            end = string.end,
            new_nodes = self.node_storage.len() - before,
            "inserted suffixes into trie"
        );
    }

    fn insert_suffix(&mut self, start: IndexType, string_end: IndexType) {
        let mut current = ROOT;
        let mut index = start;

        // Follow the characters already in the trie. Every node on the way
        // gains an occurrence whose left context may differ from its own.
        while index < string_end {
            match self.transition(current, index) {
                Some(child) => {
                    self.observe(child, start);
                    current = child;
                    index += 1;
                }
                None => break,
            }
        }

        for position in index..string_end {
            current = self.add_child(current, position, start);
        }
    }

    fn observe(&mut self, node: NodeID, start: IndexType) {
        let trie_node = self.get_node(node);
        if trie_node.is_left_diverse {
            return;
        }
        if self.text.left_context(trie_node.index_start_path) != self.text.left_context(start) {
            self.get_node_mut(node).is_left_diverse = true;
        }
    }

    /// Child of `node` holding the same symbol as `text[index]`.
    fn transition(&self, node: NodeID, index: IndexType) -> Option<NodeID> {
        self.get_node(node)
            .children
            .iter()
            .copied()
            .find(|&child| self.text.same_symbol(self.get_node(child).position, index))
    }

    fn add_child(&mut self, parent: NodeID, position: IndexType, start: IndexType) -> NodeID {
        self.node_storage.push(TrieNode::new(position, start));
        let child = (self.node_storage.len() - 1) as NodeID;
        self.get_node_mut(parent).children.push(child);
        child
    }

    pub(crate) fn get_node(&self, node_id: NodeID) -> &TrieNode {
        &self.node_storage[node_id as usize]
    }

    fn get_node_mut(&mut self, node_id: NodeID) -> &mut TrieNode {
        &mut self.node_storage[node_id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_by_char(trie: &SuffixTrie<char>, node: NodeID, ch: char) -> NodeID {
        trie.get_node(node)
            .children
            .iter()
            .copied()
            .find(|&child| trie.text().symbol_is(trie.get_node(child).position, ch))
            .unwrap()
    }

    #[test]
    fn banana_nodes_carry_left_diversity() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&"banana".chars().collect::<Vec<_>>(), '$').unwrap();

        // "a" is preceded by b and n.
        let a = child_by_char(&trie, ROOT, 'a');
        assert!(trie.get_node(a).is_left_diverse);

        // "an" and "ana" are preceded by b and n.
        let an = child_by_char(&trie, a, 'n');
        let ana = child_by_char(&trie, an, 'a');
        assert!(trie.get_node(an).is_left_diverse);
        assert!(trie.get_node(ana).is_left_diverse);

        // "n", "na" are always preceded by a.
        let n = child_by_char(&trie, ROOT, 'n');
        let na = child_by_char(&trie, n, 'a');
        assert!(!trie.get_node(n).is_left_diverse);
        assert!(!trie.get_node(na).is_left_diverse);
    }

    #[test]
    fn one_node_per_suffix_character() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&['a', 'b', 'c'], '$').unwrap();
        // "abc$", "bc$", "c$" share nothing: 4 + 3 + 2 nodes plus the root.
        assert_eq!(trie.node_count(), 10);
    }

    #[test]
    fn short_strings_insert_nothing() {
        let mut trie: SuffixTrie<char> = SuffixTrie::new();
        trie.add_framed(&['$', '$']).unwrap();
        trie.add_framed(&['$']).unwrap();
        trie.add_framed(&[]).unwrap();
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.text().string_count(), 3);
    }

    #[test]
    fn identical_suffixes_part_at_their_terminators() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&['x', 'a'], '$').unwrap();
        let nodes = trie.node_count();
        trie.add_string(&['y', 'a'], '$').unwrap();
        // "ya$" is new, and "a" gains a second terminator child.
        assert_eq!(trie.node_count(), nodes + 4);
        let a = child_by_char(&trie, ROOT, 'a');
        assert!(trie.get_node(a).is_left_diverse);
        assert_eq!(trie.get_node(a).children.len(), 2);
    }
}
