// src/numeric.rs
//
// Numeric literal encoding for the emitted grammar: thousand-grouped
// big-integer literals and compact percentage literals.

use ethers::types::U256;

/// Encodes a non-negative integer as a literal with digit groups of three,
/// joined by underscores. Zero encodes as "0", not an empty string.
///
/// Examples: 999 -> "999", 1000 -> "1_000", 1000000 -> "1_000_000".
pub fn encode_uint(value: U256) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let head = bytes.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(bytes.len() / 3 + 1);
    if head != 0 {
        groups.push(&digits[..head]);
    }
    let mut i = head;
    while i < bytes.len() {
        groups.push(&digits[i..i + 3]);
        i += 3;
    }
    groups.join("_")
}

/// Encodes a percentage given in 1/100 of a percent (10000 = 100%).
///
/// Values below 99 are emitted verbatim; these are the "1 = 0.01%" edge
/// values used as placeholders. Everything else splits into a whole-percent
/// part and a two-digit zero-padded remainder: 99 -> "0_99", 100 -> "1_00",
/// 10000 -> "100_00". The asymmetric threshold is intentional.
pub fn encode_percent(value: u16) -> String {
    if value < 99 {
        value.to_string()
    } else {
        format!("{}_{:02}", value / 100, value % 100)
    }
}
