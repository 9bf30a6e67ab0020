// src/quantity.rs

//! Hex quantity encoding used by Ethereum-style JSON-RPC.
//!
//! Quantities travel as `"0x"`-prefixed lowercase hex with no leading zeros,
//! except that zero itself is `"0x0"`.

use crate::errors::{CoreError, Result};

/// Encodes a block number as a JSON-RPC quantity
pub fn encode(value: u64) -> String {
    format!("{:#x}", value)
}

/// Decodes a quantity returned by a node.
///
/// A trailing newline and the `0x` prefix are stripped before the digits are
/// read as base 16. Both are optional.
pub fn decode(raw: &str) -> Result<u64> {
    let digits = raw.strip_suffix('\n').unwrap_or(raw);
    let digits = digits.strip_prefix("0x").unwrap_or(digits);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::InvalidHex(raw.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| CoreError::InvalidQuantity(raw.to_string()))
}
