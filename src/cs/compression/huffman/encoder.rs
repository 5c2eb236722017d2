use log::debug;

use super::bits::Bits;
use super::code_table::CodeTable;
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code, in input order.
///
/// Fails with [`Error::EmptyInput`] for an empty string and with
/// [`Error::SymbolNotCoded`] when the table was built for different text.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<Bits> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut encoded = Bits::new();
    for (position, symbol) in input.chars().enumerate() {
        let code = code_table
            .get(symbol)
            .ok_or(Error::SymbolNotCoded { symbol, position })?;
        encoded.extend_from_bitslice(code);
    }
    debug!(
        "encoded {} symbols into {} bits",
        input.chars().count(),
        encoded.len()
    );
    Ok(encoded)
}
