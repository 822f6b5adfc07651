//! # krait-decode
//!
//! Decodes 32-bit AArch64 (A64) instruction words into the typed
//! [`Insn`]/[`Opcode`] model of `krait-core`.
//!
//! The engine is stateless: [`decode`] is a pure function of
//! `(mode, pc, word)`, so concurrent decoding of independent words needs no
//! synchronization. Classification walks the ISA's grouping hierarchy (a
//! top-level split on bits 28:25, then one data-driven pattern table per
//! group, ordered most-specific-first), and every must-be-zero/must-be-one
//! constraint is a decode gate: reserved or unallocated words come back as
//! [`Opcode::Invalid`], never as a best-effort guess.

pub mod a64;
pub mod bits;
pub mod error;
pub mod stream;
pub mod traits;

mod pattern;

pub use a64::A64Decoder;
pub use error::StreamError;
pub use traits::InsnDecoder;

// Re-export the model types every caller of `decode` needs.
pub use krait_core::{Insn, IsaMode, Opcode};

/// Decodes one instruction word under the given mode.
///
/// Returns a fully populated [`Insn`]; check [`Insn::is_valid`] before
/// trusting operand fields (an invalid record has no operand payload to
/// misread, since [`Opcode::Invalid`] carries none).
pub fn decode(mode: IsaMode, pc: u64, word: u32) -> Insn {
    match mode {
        IsaMode::A64 => a64::decode(pc, word),
    }
}
