//! Turns an uncompacted suffix trie into a compacted suffix tree.

use crate::trie::SuffixTrie;
use crate::tree::CompactSuffixTree;
use crate::{IndexType, NodeID, ROOT};

/// Collapses every chain of single-child trie nodes into one edge.
///
/// A chain ending in a node with children is a branching point: it is
/// offered to the longest-repeat tracker with its string depth, and recorded
/// as a maximal repeat when left-diverse. Nodes are produced in preorder.
pub(crate) fn compact<C: Copy + Eq>(trie: &SuffixTrie<C>) -> CompactSuffixTree<C> {
    let mut tree = CompactSuffixTree::empty(trie.text().clone());

    // (first trie node of a chain, string depth above it, compact parent)
    let mut stack: Vec<(NodeID, IndexType, NodeID)> = trie
        .get_node(ROOT)
        .children
        .iter()
        .rev()
        .map(|&child| (child, 0, ROOT))
        .collect();

    while let Some((first, depth, parent)) = stack.pop() {
        let mut last = first;
        while let [only] = trie.get_node(last).children.as_slice() {
            last = *only;
        }

        let begin = trie.get_node(first).position;
        let tail = trie.get_node(last);
        let end = tail.position + 1;
        let node = tree.create_node(begin, end, tail.is_left_diverse, tail.index_start_path);
        tree.attach(parent, node);

        let depth = depth + (end - begin);
        if !tail.children.is_empty() {
            if tail.is_left_diverse {
                tree.repeats_mut().record_maximal(node);
            }
            tree.repeats_mut().offer_longest(node, depth);
        }

        stack.extend(tail.children.iter().rev().map(|&child| (child, depth, node)));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_become_single_edges() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&['a', 'b', 'c'], '$').unwrap();
        let tree = compact(&trie);
        // Root plus one leaf per suffix.
        assert_eq!(tree.node_count(), 4);
        assert!(tree.maximal_repeats().is_empty());
        assert!(tree.longest_repeated_substring().is_empty());
    }

    #[test]
    fn branching_chain_is_recorded() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&['a', 'b', 'c'], '$').unwrap();
        trie.add_string(&['b', 'c', 'd'], '$').unwrap();
        let tree = compact(&trie);
        assert_eq!(tree.maximal_repeats(), vec![&['b', 'c'][..]]);
        assert_eq!(tree.longest_repeated_substring(), &['b', 'c']);
    }

    #[test]
    fn shared_final_suffix_branches() {
        let mut trie = SuffixTrie::new();
        trie.add_string(&['a', 'b', 'c'], '$').unwrap();
        trie.add_string(&['x', 'b', 'c'], '$').unwrap();
        let tree = compact(&trie);
        assert_eq!(tree.maximal_repeats(), vec![&['b', 'c'][..]]);
        assert_eq!(tree.longest_repeated_substring(), &['b', 'c']);
        assert_eq!(tree.count_occurrences(&['c']), 2);
    }
}
