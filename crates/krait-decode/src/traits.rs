//! Decoder traits.

use krait_core::{Insn, IsaMode};

/// Trait for mode-specific instruction-word decoders.
///
/// This is the seam for sibling ISA modes: a decoder for another mode
/// implements the same word-in, record-out contract behind the same
/// [`IsaMode`] selector.
pub trait InsnDecoder {
    /// Returns the instruction-set mode this decoder implements.
    fn mode(&self) -> IsaMode;

    /// Decodes a single word fetched at `pc`.
    ///
    /// Total and pure: every word yields exactly one record, and equal
    /// `(pc, word)` inputs yield equal records regardless of call order.
    fn decode_word(&self, pc: u64, word: u32) -> Insn;

    /// Decodes a buffer of words laid out contiguously from `base_pc`.
    fn decode_words(&self, base_pc: u64, words: &[u32]) -> Vec<Insn> {
        words
            .iter()
            .enumerate()
            .map(|(i, &word)| self.decode_word(base_pc + 4 * i as u64, word))
            .collect()
    }
}
