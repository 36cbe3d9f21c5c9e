//! Row codec
//!
//! Maps one grid row to a short text token:
//! - `W` - every cell blank
//! - `B` - every cell inked
//! - `H<hex>` - mixed row, bits packed most-significant first (column 0 is the
//!   highest bit), zero-padded on the left to `ceil(width / 4)` hex digits
//!
//! Packing works nibble by nibble so any width is supported without a
//! big-integer type.

use crate::{GlyphError, Result};

/// Token for an all-blank row
pub const ALL_WHITE: &str = "W";

/// Token for an all-inked row
pub const ALL_BLACK: &str = "B";

/// Prefix for a mixed row
pub const MIXED_PREFIX: &str = "H";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of hex digits a mixed row of `width` cells packs into
pub fn hex_digits(width: usize) -> usize {
    width.div_ceil(4)
}

/// Encode one row
pub fn encode_row(bits: &[bool]) -> String {
    if bits.iter().all(|&b| !b) {
        return ALL_WHITE.to_string();
    }
    if bits.iter().all(|&b| b) {
        return ALL_BLACK.to_string();
    }

    let digits = hex_digits(bits.len());
    let pad = digits * 4 - bits.len();
    let mut token = String::with_capacity(MIXED_PREFIX.len() + digits);
    token.push_str(MIXED_PREFIX);

    let mut nibble = 0usize;
    let mut filled = 0;
    for bit in std::iter::repeat(false).take(pad).chain(bits.iter().copied()) {
        nibble = (nibble << 1) | usize::from(bit);
        filled += 1;
        if filled == 4 {
            token.push(HEX_DIGITS[nibble] as char);
            nibble = 0;
            filled = 0;
        }
    }
    token
}

/// Decode one row of `width` cells
pub fn decode_row(token: &str, width: usize) -> Result<Vec<bool>> {
    match token {
        ALL_WHITE => Ok(vec![false; width]),
        ALL_BLACK => Ok(vec![true; width]),
        _ => {
            let invalid = || GlyphError::InvalidRowToken { token: token.to_string() };
            let hex = token.strip_prefix(MIXED_PREFIX).ok_or_else(invalid)?;
            let digits = hex_digits(width);
            if hex.len() != digits {
                return Err(invalid());
            }

            let mut bits = Vec::with_capacity(digits * 4);
            for ch in hex.chars() {
                let value = ch.to_digit(16).ok_or_else(invalid)?;
                for shift in (0..4).rev() {
                    bits.push((value >> shift) & 1 == 1);
                }
            }

            // padding bits must be zero, otherwise the value doesn't fit the row
            let pad = digits * 4 - width;
            if bits[..pad].iter().any(|&b| b) {
                return Err(invalid());
            }
            bits.drain(..pad);
            Ok(bits)
        }
    }
}
