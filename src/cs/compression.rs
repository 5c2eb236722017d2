//! Compression algorithms implementation.
//!
//! This module provides:
//! - Huffman coding: frequency analysis, code tree construction, code table
//!   derivation, encoding and decoding
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::{huffman_decode, huffman_encode};
//!
//! let encoding = huffman_encode("mississippi").unwrap();
//! let decoded = huffman_decode(&encoding.encoded, &encoding.tree).unwrap();
//! assert_eq!(decoded, "mississippi");
//! ```

use crate::cs::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, huffman_decode,
    huffman_encode, Bits, CodeTable, FrequencyTable, HuffmanCodec, HuffmanEncoding, HuffmanNode,
    HuffmanTree,
};
