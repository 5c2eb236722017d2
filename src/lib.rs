pub mod cs;

pub use cs::compression;
pub use cs::compression::huffman;
pub use cs::error::{Error, Result};
