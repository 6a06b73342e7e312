//! Compacted suffix tree, its direct construction by edge splitting, and the
//! repeat queries.

use std::fmt;

use tracing::debug;

use crate::compactor;
use crate::config::{BuildStrategy, TreeConfig};
use crate::error::Result;
use crate::repeats::RepeatTracker;
use crate::text::{suffix_starts, TextBuffer};
use crate::trie::SuffixTrie;
use crate::{IndexType, NodeID, ROOT};

/// A node owns the label of its incoming edge, `text[begin..end)`.
///
/// The whole path label from the root is `text[index_start_path..end)`,
/// because `begin` and `end` always come from the suffix that started at
/// `index_start_path`.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) begin: IndexType,
    pub(crate) end: IndexType,
    pub(crate) is_left_diverse: bool,
    pub(crate) index_start_path: IndexType,
    pub(crate) children: Vec<NodeID>,
}

impl Node {
    fn new(begin: IndexType, end: IndexType, is_left_diverse: bool, index_start_path: IndexType) -> Self {
        Self {
            begin,
            end,
            is_left_diverse,
            index_start_path,
            children: Vec::new(),
        }
    }
}

/// Edge-compressed suffix tree over one or more framed strings, answering
/// longest-repeat and maximal-repeat queries.
///
/// The tree is built once and is read-only afterwards.
///
/// # Examples
///
/// ```
/// use repeat_suffix_tree::CompactSuffixTree;
/// let tree = CompactSuffixTree::new("banana").unwrap();
/// assert_eq!(tree.longest_repeated_string(), "ana");
/// assert!(tree.maximal_repeat_strings().contains(&"ana".to_string()));
/// assert!(tree.is_substr(&['n', 'a', 'n']));
/// ```
#[derive(Debug)]
pub struct CompactSuffixTree<C = char> {
    text: TextBuffer<C>,
    node_storage: Vec<Node>,
    repeats: RepeatTracker,
}

impl<C: Copy + Eq> CompactSuffixTree<C> {
    /// Tree with only a root, over `text`.
    pub(crate) fn empty(text: TextBuffer<C>) -> Self {
        Self {
            text,
            node_storage: vec![Node::new(0, 0, false, 0)],
            repeats: RepeatTracker::new(),
        }
    }

    /// Builds a tree over every string in `text` using `strategy`.
    pub fn build(text: TextBuffer<C>, strategy: BuildStrategy) -> Self {
        match strategy.resolve(text.string_count()) {
            BuildStrategy::Generalized => Self::from_trie(&SuffixTrie::from_text(text)),
            _ => Self::build_direct(text),
        }
    }

    /// Builds the tree by inserting every suffix straight into it,
    /// splitting edges where a suffix leaves an existing edge.
    pub fn build_direct(text: TextBuffer<C>) -> Self {
        debug!(
            strings = text.string_count(),
            symbols = text.len(),
            "building compacted suffix tree by edge splitting"
        );
        let strings = text.strings().to_vec();
        let mut tree = Self::empty(text);
        for string in strings {
            for start in suffix_starts(&string) {
                tree.insert_suffix(start, string.end);
            }
        }
        tree.log_summary();
        tree
    }

    /// Compacts chains of single-child nodes of `trie` into edges.
    pub fn from_trie(trie: &SuffixTrie<C>) -> Self {
        debug!(
            strings = trie.text().string_count(),
            trie_nodes = trie.node_count(),
            "compacting suffix trie"
        );
        let tree = compactor::compact(trie);
        tree.log_summary();
        tree
    }

    fn log_summary(&self) {
        debug!(
            nodes = self.node_storage.len(),
            maximal_repeats = self.repeats.maximals().len(),
            longest_repeat = self.repeats.longest_depth(),
            "compacted suffix tree ready"
        );
    }

    fn insert_suffix(&mut self, start: IndexType, string_end: IndexType) {
        let left = self.text.left_context(start);
        let mut parent = ROOT;
        let mut from = start;

        while from < string_end {
            let Some((slot, child)) = self.transition(parent, from) else {
                let leaf = self.create_node(from, string_end, false, start);
                self.attach(parent, leaf);
                return;
            };

            let matched = self.common_prefix_len(child, from, string_end);
            let node = self.get_node(child);
            let diverges = self.text.left_context(node.index_start_path) != left;

            if matched == node.end - node.begin {
                // Only inner edges are consumed whole: a leaf edge ends at a
                // terminator, which matches nothing.
                if diverges && !node.is_left_diverse {
                    self.get_node_mut(child).is_left_diverse = true;
                    self.repeats.record_maximal(child);
                }
                parent = child;
            } else {
                let is_left_diverse = node.is_left_diverse || diverges;
                let inner = self.create_node(from, from + matched, is_left_diverse, start);
                if is_left_diverse {
                    self.repeats.record_maximal(inner);
                }

                self.get_node_mut(child).begin += matched;
                self.get_node_mut(parent).children[slot] = inner;
                self.attach(inner, child);
                self.repeats.offer_longest(inner, from + matched - start);
                parent = inner;
            }
            from += matched;
        }
    }

    /// Number of symbols shared by the edge into `node` and
    /// `text[from..string_end)`.
    fn common_prefix_len(&self, node: NodeID, from: IndexType, string_end: IndexType) -> IndexType {
        let node = self.get_node(node);
        (0..node.end - node.begin)
            .take_while(|&k| from + k < string_end && self.text.same_symbol(node.begin + k, from + k))
            .count() as IndexType
    }

    /// Child of `node` whose edge starts with the symbol at `index`, with its
    /// slot in the child list.
    fn transition(&self, node: NodeID, index: IndexType) -> Option<(usize, NodeID)> {
        self.get_node(node)
            .children
            .iter()
            .enumerate()
            .find(|&(_, &child)| self.text.same_symbol(self.get_node(child).begin, index))
            .map(|(slot, &child)| (slot, child))
    }

    /// Child of `node` whose edge starts with `ch`.
    fn find_child(&self, node: NodeID, ch: C) -> Option<NodeID> {
        self.get_node(node)
            .children
            .iter()
            .copied()
            .find(|&child| self.text.symbol_is(self.get_node(child).begin, ch))
    }

    pub(crate) fn create_node(
        &mut self,
        begin: IndexType,
        end: IndexType,
        is_left_diverse: bool,
        index_start_path: IndexType,
    ) -> NodeID {
        self.node_storage.push(Node::new(begin, end, is_left_diverse, index_start_path));
        (self.node_storage.len() - 1) as NodeID
    }

    pub(crate) fn attach(&mut self, parent: NodeID, child: NodeID) {
        self.get_node_mut(parent).children.push(child);
    }

    pub(crate) fn repeats_mut(&mut self) -> &mut RepeatTracker {
        &mut self.repeats
    }

    fn get_node(&self, node_id: NodeID) -> &Node {
        &self.node_storage[node_id as usize]
    }

    fn get_node_mut(&mut self, node_id: NodeID) -> &mut Node {
        &mut self.node_storage[node_id as usize]
    }

    fn edge(&self, node_id: NodeID) -> &[C] {
        let node = self.get_node(node_id);
        self.text.slice(node.begin, node.end)
    }

    fn path_label(&self, node_id: NodeID) -> &[C] {
        let node = self.get_node(node_id);
        self.text.slice(node.index_start_path, node.end)
    }

    /// The longest substring occurring at least twice, or an empty slice when
    /// nothing repeats. Among equally long repeats the first one found during
    /// construction is returned.
    #[must_use]
    pub fn longest_repeated_substring(&self) -> &[C] {
        match self.repeats.longest() {
            Some(node) => self.path_label(node),
            None => &[],
        }
    }

    /// Every maximal repeat, in the order its node was flagged left-diverse.
    #[must_use]
    pub fn maximal_repeats(&self) -> Vec<&[C]> {
        self.repeats
            .maximals()
            .iter()
            .map(|&node| self.path_label(node))
            .collect()
    }

    /// Checks whether `pattern` occurs in any of the indexed strings.
    ///
    /// Closing sentinels match no pattern character, so a pattern running
    /// past the end of a string is not found.
    #[must_use]
    pub fn is_substr(&self, pattern: &[C]) -> bool {
        pattern.is_empty() || self.locate(pattern).is_some()
    }

    /// Number of occurrences of `pattern` across the indexed strings.
    #[must_use]
    pub fn count_occurrences(&self, pattern: &[C]) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        self.locate(pattern).map_or(0, |node| self.leaf_count(node))
    }

    /// The highest node whose path label starts with `pattern`.
    fn locate(&self, pattern: &[C]) -> Option<NodeID> {
        let mut node = ROOT;
        let mut index = 0;
        while index < pattern.len() {
            let child = self.find_child(node, pattern[index])?;
            let edge = self.get_node(child);
            for position in edge.begin..edge.end {
                if index == pattern.len() {
                    break;
                }
                if !self.text.symbol_is(position, pattern[index]) {
                    return None;
                }
                index += 1;
            }
            node = child;
        }
        Some(node)
    }

    fn leaf_count(&self, node: NodeID) -> usize {
        let mut leaves = 0;
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            let children = &self.get_node(node).children;
            if children.is_empty() {
                leaves += 1;
            }
            stack.extend(children.iter().copied());
        }
        leaves
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_storage.len()
    }

    pub fn string_count(&self) -> usize {
        self.text.string_count()
    }

    pub fn text(&self) -> &TextBuffer<C> {
        &self.text
    }
}

impl CompactSuffixTree<char> {
    /// Frames `word` with `'$'` and builds the tree directly.
    pub fn new(word: &str) -> Result<Self> {
        Self::with_config(&[word], &TreeConfig::default())
    }

    /// Frames every word with `'$'`. Several words go through the suffix
    /// trie and are compacted afterwards.
    pub fn from_strings<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        Self::with_config(words, &TreeConfig::default())
    }

    pub fn with_config<S: AsRef<str>>(words: &[S], config: &TreeConfig) -> Result<Self> {
        let mut text = TextBuffer::new();
        for word in words {
            let body: Vec<char> = word.as_ref().chars().collect();
            text.push_framed(&body, config.sentinel)?;
        }
        Ok(Self::build(text, config.strategy))
    }

    #[must_use]
    pub fn longest_repeated_string(&self) -> String {
        self.longest_repeated_substring().iter().collect()
    }

    #[must_use]
    pub fn maximal_repeat_strings(&self) -> Vec<String> {
        self.maximal_repeats()
            .into_iter()
            .map(|repeat| repeat.iter().collect())
            .collect()
    }
}

impl Default for CompactSuffixTree<char> {
    fn default() -> Self {
        Self::empty(TextBuffer::new())
    }
}

/// One edge label per line, children indented under their parent.
impl<C: Copy + Eq + fmt::Debug> fmt::Display for CompactSuffixTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(NodeID, usize)> = self
            .get_node(ROOT)
            .children
            .iter()
            .rev()
            .map(|&child| (child, 0))
            .collect();
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{:?}", "", self.edge(node), indent = depth * 4)?;
            stack.extend(self.get_node(node).children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}
