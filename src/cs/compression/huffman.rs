//! Huffman coding.
//!
//! Builds a minimum-redundancy prefix code for the characters of a string and
//! uses it to turn the string into a packed bit sequence and back.
//!
//! The pipeline runs in the classical order:
//!
//! 1. [`build_frequency_table`] counts each character.
//! 2. [`build_huffman_tree`] seeds a [`MinHeap`] with one leaf per character and
//!    merges the two lightest nodes until one tree remains.
//! 3. [`build_code_table`] records the root-to-leaf path of every character.
//! 4. [`encode`] concatenates the codes; [`decode`] walks the tree bit by bit.
//!
//! Decoding needs the tree itself, not just the code table, so callers must
//! keep the [`HuffmanTree`] (or a [`HuffmanCodec`]) around for as long as they
//! want to decode.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::huffman::{huffman_decode, huffman_encode, to_bit_string};
//!
//! let encoding = huffman_encode("abracadabra").unwrap();
//! assert_eq!(encoding.encoded.len(), 23);
//! assert_eq!(to_bit_string(&encoding.encoded), "01101110100010101101110");
//!
//! let decoded = huffman_decode(&encoding.encoded, &encoding.tree).unwrap();
//! assert_eq!(decoded, "abracadabra");
//! ```

use bitvec::prelude::*;

use crate::cs::compression::Result;

pub mod bits;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod min_heap;
pub mod tree;

pub use bits::{parse_bit_string, to_bit_string, Bits};
pub use code_table::{build_code_table, CodeTable};
pub use decoder::decode;
pub use encoder::encode;
pub use frequency::{build_frequency_table, FrequencyTable};
pub use min_heap::MinHeap;
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree};

/// Everything produced by a one-shot encode.
#[derive(Debug, Clone)]
pub struct HuffmanEncoding {
    /// Code of every distinct input symbol.
    pub codes: CodeTable,
    /// The input with each symbol replaced by its code.
    pub encoded: Bits,
    /// The tree the codes came from; required to decode `encoded`.
    pub tree: HuffmanTree,
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns the code table, the encoded bits and the tree needed to decode them.
pub fn huffman_encode(input: &str) -> Result<HuffmanEncoding> {
    let freq_table = build_frequency_table(input);
    let tree = build_huffman_tree(&freq_table)?;
    let codes = build_code_table(&tree);
    let encoded = encode(input, &codes)?;
    Ok(HuffmanEncoding {
        codes,
        encoded,
        tree,
    })
}

/// Convenience function: decodes encoded bits using the provided Huffman tree.
pub fn huffman_decode(encoded: &BitSlice<u8, Msb0>, tree: &HuffmanTree) -> Result<String> {
    decode(encoded, tree)
}

/// A tree paired with its code table, so whatever it encodes it can also decode.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCodec {
    /// Wraps an existing tree and derives its code table.
    pub fn new(tree: HuffmanTree) -> Self {
        let code_table = build_code_table(&tree);
        HuffmanCodec { tree, code_table }
    }

    /// Builds a codec fitted to the character counts of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        HuffmanTree::from_text(text).map(Self::new)
    }

    /// Builds a codec from precomputed symbol counts.
    pub fn from_frequencies(freq_table: &FrequencyTable) -> Result<Self> {
        build_huffman_tree(freq_table).map(Self::new)
    }

    /// The tree used for decoding.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The code of every symbol this codec can encode.
    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Encodes `input`; every character must be covered by this codec's table.
    pub fn encode(&self, input: &str) -> Result<Bits> {
        encode(input, &self.code_table)
    }

    /// Decodes bits produced by [`HuffmanCodec::encode`].
    pub fn decode(&self, encoded: &BitSlice<u8, Msb0>) -> Result<String> {
        decode(encoded, &self.tree)
    }
}
