//! Data-driven encoding patterns.
//!
//! Each ISA group is a table of [`Pattern`]s: a fixed-bit template plus the
//! materializer that extracts that encoding's operand fields. The resolver
//! takes the first matching entry, so tables are ordered most-specific-first
//! (fewest don't-care bits first wherever two entries overlap); the
//! `shadows` helper lets tests audit that ordering.

use krait_core::Opcode;

/// One encoding template: the word matches when `word & mask == bits`.
pub(crate) struct Pattern {
    /// Which bit positions are fixed by this encoding.
    pub mask: u32,
    /// The required values of the fixed bits.
    pub bits: u32,
    /// Extracts the operand fields once the template has matched. May still
    /// return [`Opcode::Invalid`] for reserved field combinations inside the
    /// template (unallocated bitmask immediates, reserved shift kinds, ...).
    pub materialize: fn(u32, u64) -> Opcode,
}

impl Pattern {
    /// True if this template matches the word.
    #[inline]
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.bits
    }
}

/// Resolves a word against a table: first match wins.
#[inline]
pub(crate) fn resolve(table: &[Pattern], word: u32, pc: u64) -> Opcode {
    for pat in table {
        if pat.matches(word) {
            return (pat.materialize)(word, pc);
        }
    }
    Opcode::Invalid
}

/// True if entry `a`, placed before `b`, would swallow words that only `b`
/// should claim: the two templates overlap and `b` fixes strictly more bits.
/// Tables must order such pairs the other way around.
#[cfg(test)]
pub(crate) fn shadows(a: &Pattern, b: &Pattern) -> bool {
    let common = a.mask & b.mask;
    let compatible = (a.bits ^ b.bits) & common == 0;
    let a_subset_of_b = a.mask & b.mask == a.mask && a.mask != b.mask;
    compatible && a_subset_of_b
}
