use log::{debug, trace};

use super::frequency::{build_frequency_table, FrequencyTable};
use super::min_heap::MinHeap;
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a symbol and its frequency.
    Leaf { symbol: char, weight: usize },
    /// An internal node owns both children and carries their combined frequency.
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the aggregate frequency of the node.
    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// True for nodes that carry a symbol.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Joins two subtrees under a new internal node; `left` is the lighter one.
    ///
    /// Fails with [`Error::WeightOverflow`] if the combined weight does not fit.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Result<HuffmanNode> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(Error::WeightOverflow {
                left: left.weight(),
                right: right.weight(),
            })?;
        Ok(HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// A complete code tree. Decoding must use the same tree that produced the codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Counts the symbols of `text` and builds their tree.
    pub fn from_text(text: &str) -> Result<Self> {
        build_huffman_tree(&build_frequency_table(text))
    }

    /// The root node; a leaf when the tree is degenerate.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight, i.e. the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// A tree with a single symbol has no internal node and needs a fallback code.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of distinct symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Symbols carried by the leaves, left to right.
    pub fn symbols(&self) -> Vec<char> {
        self.nodes()
            .filter_map(|(node, _)| match node {
                HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
                HuffmanNode::Internal { .. } => None,
            })
            .collect()
    }

    /// Checks that every internal node weighs exactly as much as its two children.
    pub fn is_weight_consistent(&self) -> bool {
        self.nodes().all(|(node, _)| match node {
            HuffmanNode::Leaf { weight, .. } => *weight > 0,
            HuffmanNode::Internal {
                weight,
                left,
                right,
            } => left.weight().checked_add(right.weight()) == Some(*weight),
        })
    }

    /// Pre-order walk yielding each node with its depth, left subtree first.
    fn nodes(&self) -> impl Iterator<Item = (&HuffmanNode, usize)> {
        let mut stack = vec![(&self.root, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let HuffmanNode::Internal { left, right, .. } = node {
                stack.push((&**right, depth + 1));
                stack.push((&**left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

/// Build the Huffman tree given a frequency table.
///
/// Leaves are queued in symbol order and the two lightest nodes are merged
/// until one remains; the first one extracted becomes the left child. Ties in
/// weight go to the node queued earlier, so the same table always yields the
/// same tree.
///
/// Returns [`Error::EmptyInput`] for an empty table,
/// [`Error::InvalidFrequency`] if any count is zero and
/// [`Error::WeightOverflow`] if the counts add up to more than `usize::MAX`.
pub fn build_huffman_tree(freq_table: &FrequencyTable) -> Result<HuffmanTree> {
    let mut heap = MinHeap::with_capacity(freq_table.len());
    for (&symbol, &weight) in freq_table {
        if weight == 0 {
            return Err(Error::InvalidFrequency { symbol });
        }
        heap.insert(weight, HuffmanNode::Leaf { symbol, weight });
    }

    loop {
        let left = heap.extract_min().ok_or(Error::EmptyInput)?;
        let Some(right) = heap.extract_min() else {
            let tree = HuffmanTree { root: left };
            debug!(
                "built huffman tree: {} symbols, weight {}, height {}",
                freq_table.len(),
                tree.weight(),
                tree.height()
            );
            return Ok(tree);
        };
        trace!("merging weights {} + {}", left.weight(), right.weight());
        let merged = HuffmanNode::merge(left, right)?;
        heap.insert(merged.weight(), merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: char, weight: usize) -> HuffmanNode {
        HuffmanNode::Leaf { symbol, weight }
    }

    fn join(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        HuffmanNode::merge(left, right).unwrap()
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        assert_eq!(
            build_huffman_tree(&FrequencyTable::new()),
            Err(Error::EmptyInput)
        );
        assert_eq!(HuffmanTree::from_text(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let freq = FrequencyTable::from([('a', 3), ('b', 0)]);
        assert_eq!(
            build_huffman_tree(&freq),
            Err(Error::InvalidFrequency { symbol: 'b' })
        );
    }

    #[test]
    fn test_single_symbol_is_degenerate_leaf() {
        let tree = HuffmanTree::from_text("aaaa").unwrap();
        assert!(tree.is_degenerate());
        assert_eq!(tree.root(), &leaf('a', 4));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_two_symbols_merge_under_root() {
        let tree = HuffmanTree::from_text("ab").unwrap();
        assert!(!tree.is_degenerate());
        assert_eq!(tree.root(), &join(leaf('a', 1), leaf('b', 1)));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_merge_order_and_shape() {
        // c:1 + d:1, then b:2 + r:2, then cd + br; a:5 joins last.
        let tree = HuffmanTree::from_text("abracadabra").unwrap();
        let cd = join(leaf('c', 1), leaf('d', 1));
        let br = join(leaf('b', 2), leaf('r', 2));
        let cdbr = join(cd, br);
        let expected = join(leaf('a', 5), cdbr);
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.symbols(), vec!['a', 'c', 'd', 'b', 'r']);
    }

    #[test]
    fn test_counts_too_large_to_sum() {
        let freq = FrequencyTable::from([('a', usize::MAX), ('b', 1)]);
        assert_eq!(
            build_huffman_tree(&freq),
            Err(Error::WeightOverflow {
                left: 1,
                right: usize::MAX
            })
        );
        assert!(HuffmanNode::merge(leaf('x', usize::MAX - 1), leaf('y', 1)).is_ok());
    }

    #[test]
    fn test_weight_conservation() {
        let input = "this is an example for huffman encoding";
        let tree = HuffmanTree::from_text(input).unwrap();
        assert!(tree.is_weight_consistent());
        assert_eq!(tree.weight(), input.chars().count());
        assert_eq!(tree.leaf_count(), build_frequency_table(input).len());
    }

    #[test]
    fn test_construction_is_reproducible() {
        let freq = build_frequency_table("mississippi river banks");
        let first = build_huffman_tree(&freq).unwrap();
        let second = build_huffman_tree(&freq).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_skewed_weights_build_deep_tree() {
        // Fibonacci counts force a chain: every merge takes the previous subtree.
        let mut freq = FrequencyTable::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in ('a'..='z').take(25) {
            freq.insert(symbol, a);
            (a, b) = (b, a + b);
        }
        let tree = build_huffman_tree(&freq).unwrap();
        assert_eq!(tree.height(), 24);
        assert!(tree.is_weight_consistent());
    }
}
