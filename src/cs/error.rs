//! Error type shared by the coding algorithms.

use thiserror::Error;

/// Failures raised while building, applying or inverting a prefix code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// There were no symbols to build a code from.
    #[error("input is empty, no code tree can be built")]
    EmptyInput,

    /// A frequency table supplied by the caller contains a zero count.
    #[error("symbol {symbol:?} has a frequency of zero")]
    InvalidFrequency { symbol: char },

    /// The combined weight of two subtrees does not fit in a `usize`.
    #[error("weights {left} and {right} overflow when combined")]
    WeightOverflow { left: usize, right: usize },

    /// The symbol at `position` has no entry in the code table.
    #[error("symbol {symbol:?} at position {position} has no code")]
    SymbolNotCoded { symbol: char, position: usize },

    /// The bit at `position` asked for a child the current node does not have.
    #[error("bit {position} descends through a missing child")]
    InvalidTraversal { position: usize },

    /// The bits ran out partway through a code.
    #[error("encoded stream ends mid-code after {consumed} bits")]
    TruncatedStream { consumed: usize },

    /// A textual bit string contained something other than '0' or '1'.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
