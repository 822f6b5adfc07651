//! # krait-core
//!
//! Data model for the krait AArch64 decoder. This crate defines the ISA mode
//! selector, condition codes, operand descriptor types, the closed [`Opcode`]
//! enumeration of recognized encodings, and the [`Insn`] decode-result record.
//!
//! The model is deliberately raw: register fields are plain 5-bit indices
//! (register 31 means SP or ZR depending on the opcode, and that policy
//! belongs to the caller), shift/extend descriptors are (kind, amount) pairs
//! that are never pre-applied, and immediates carry their final numeric
//! interpretation after the encoding's scaling and sign-extension rules.

pub mod cond;
pub mod insn;
pub mod mode;
pub mod operand;

pub use cond::Cond;
pub use insn::{Insn, Opcode};
pub use mode::IsaMode;
pub use operand::{
    AddrMode, Extend, ExtendKind, FpPrec, FpSize, MemWidth, RegSize, Shift, ShiftKind, VecArr,
};
