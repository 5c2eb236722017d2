use bitvec::prelude::*;
use log::debug;

use super::tree::{HuffmanNode, HuffmanTree};
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Decode an encoded bit sequence using the Huffman tree that produced it.
///
/// Each bit moves one step down the tree, `0` to the left and `1` to the right.
/// Reaching a leaf emits its symbol and restarts at the root. The bits must
/// end exactly on a symbol boundary, otherwise [`Error::TruncatedStream`].
///
/// A single-leaf tree decodes each `0` bit to its symbol; a `1` bit has no
/// child to follow and fails with [`Error::InvalidTraversal`].
pub fn decode(encoded: &BitSlice<u8, Msb0>, tree: &HuffmanTree) -> Result<String> {
    let mut result = String::new();

    let (root_left, root_right) = match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            if let Some(position) = encoded.first_one() {
                return Err(Error::InvalidTraversal { position });
            }
            result.extend(std::iter::repeat(*symbol).take(encoded.len()));
            return Ok(result);
        }
        HuffmanNode::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
    };

    // Children of the internal node the walk is currently standing on.
    let (mut left, mut right) = (root_left, root_right);
    let mut at_root = true;
    for bit in encoded.iter().by_vals() {
        let next = if bit { right } else { left };
        match next {
            HuffmanNode::Leaf { symbol, .. } => {
                result.push(*symbol);
                (left, right) = (root_left, root_right);
                at_root = true;
            }
            HuffmanNode::Internal {
                left: next_left,
                right: next_right,
                ..
            } => {
                (left, right) = (next_left.as_ref(), next_right.as_ref());
                at_root = false;
            }
        }
    }

    if !at_root {
        return Err(Error::TruncatedStream {
            consumed: encoded.len(),
        });
    }
    debug!(
        "decoded {} bits into {} symbols",
        encoded.len(),
        result.chars().count()
    );
    Ok(result)
}
