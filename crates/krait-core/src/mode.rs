//! Instruction-set mode selector.

/// Instruction-set mode a word is decoded under.
///
/// Only the 64-bit A64 encoding is implemented. The enum exists so that a
/// sibling mode (e.g. the 32-bit legacy set) can be added behind the same
/// decode entry points without changing their signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IsaMode {
    /// AArch64 A64: fixed-width 32-bit little-endian instruction words.
    A64,
}

impl IsaMode {
    /// Instruction width in bytes for this mode.
    pub fn insn_bytes(&self) -> usize {
        match self {
            Self::A64 => 4,
        }
    }
}

impl std::fmt::Display for IsaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A64 => write!(f, "a64"),
        }
    }
}
