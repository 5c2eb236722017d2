//! Packed bit sequences and their '0'/'1' text form.

use bitvec::prelude::*;

use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Bits packed into bytes, most significant bit first.
pub type Bits = BitVec<u8, Msb0>;

/// Renders bits as a string of '0' and '1' characters.
pub fn to_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

/// Parses a string of '0' and '1' characters into packed bits.
pub fn parse_bit_string(text: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(text.len());
    for (position, found) in text.chars().enumerate() {
        match found {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::InvalidBit { found, position }),
        }
    }
    Ok(bits)
}
