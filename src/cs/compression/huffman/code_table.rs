use std::collections::BTreeMap;

use bitvec::prelude::*;
use log::debug;

use super::bits::{to_bit_string, Bits};
use super::frequency::FrequencyTable;
use super::tree::{HuffmanNode, HuffmanTree};

/// Mapping from each symbol of a tree to its root-to-leaf path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Bits>,
}

impl CodeTable {
    /// The code assigned to `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    /// True if `symbol` has a code.
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice<u8, Msb0>)> {
        self.codes
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_bitslice()))
    }

    /// True when no code is a prefix of another (duplicates included).
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<String> = self.codes.values().map(|c| to_bit_string(c)).collect();
        codes.sort();
        codes.windows(2).all(|pair| !pair[1].starts_with(&pair[0]))
    }

    /// Number of bits needed to encode an input with these symbol counts, or
    /// `None` if some counted symbol has no code or the total overflows.
    pub fn encoded_len(&self, freq_table: &FrequencyTable) -> Option<usize> {
        freq_table.iter().try_fold(0usize, |total, (symbol, count)| {
            let code = self.codes.get(symbol)?;
            total.checked_add(code.len().checked_mul(*count)?)
        })
    }
}

/// Walk the tree and record the path to every leaf, '0' for left and '1' for right.
///
/// Uses an explicit stack, so arbitrarily deep trees are fine. A tree that is a
/// single leaf has an empty path; its symbol gets the one-bit code `0` instead.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut codes = BTreeMap::new();
    let mut stack: Vec<(&HuffmanNode, Bits)> = vec![(tree.root(), Bits::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                let code = if path.is_empty() { bitvec![u8, Msb0; 0] } else { path };
                codes.insert(*symbol, code);
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(true);
                stack.push((&**right, right_path));
                let mut left_path = path;
                left_path.push(false);
                stack.push((&**left, left_path));
            }
        }
    }

    debug!("built code table with {} entries", codes.len());
    CodeTable { codes }
}
