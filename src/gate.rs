// SPDX-License-Identifier: Apache-2.0

//! All of the standard boolean gates, derived from a single hand-tabulated
//! NAND primitive.
//!
//! Each gate is built strictly from the ones before it:
//!
//! ```text
//! nand (primitive) -> not -> and -> or -> xor -> eq
//! ```
//!
//! The derived gates are deliberately left as compositions rather than
//! flattened into direct table lookups; the derivation chain is the content.

use crate::bit::Bit;

/// A two-input gate as a first-class value, e.g. for truth-table printing.
pub type Gate2 = fn(Bit, Bit) -> Bit;

/// The primitive gate: NOT-AND. Defined by its truth table; everything else
/// in this module is composed from it.
pub fn nand(x: Bit, y: Bit) -> Bit {
    match (x, y) {
        (Bit::Zero, Bit::Zero) => Bit::One,
        (Bit::Zero, Bit::One) => Bit::One,
        (Bit::One, Bit::Zero) => Bit::One,
        (Bit::One, Bit::One) => Bit::Zero,
    }
}

/// NAND's top and bottom truth-table rows have equal inputs and give the
/// negated output, so feeding `x` to both sides negates it.
pub fn not(x: Bit) -> Bit {
    nand(x, x)
}

/// AND is just NAND negated.
pub fn and(x: Bit, y: Bit) -> Bit {
    not(nand(x, y))
}

/// Negating NAND's *inputs* (rather than its output) flips its table
/// vertically, which yields OR.
pub fn or(x: Bit, y: Bit) -> Bit {
    nand(not(x), not(y))
}

/// OR and NAND agree exactly on the rows where XOR is 1, so ANDing them
/// together gives XOR.
pub fn xor(x: Bit, y: Bit) -> Bit {
    and(or(x, y), nand(x, y))
}

/// Equality is the negation of XOR.
pub fn eq(x: Bit, y: Bit) -> Bit {
    not(xor(x, y))
}
