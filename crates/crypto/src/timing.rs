//! Constant-time string comparison for signatures.

use subtle::ConstantTimeEq;

/// Compare two signature strings without an early exit on the first
/// differing byte.
///
/// Strings of different length are unequal immediately; the length of a
/// well-formed signature is public anyway.
pub fn constant_time_eq(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
