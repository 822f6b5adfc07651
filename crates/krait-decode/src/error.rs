//! Stream-assembly error types.

use thiserror::Error;

/// Error produced while assembling instruction words from a byte stream.
///
/// Decode-level invalidity is *not* an error: an unrecognized word decodes
/// to the invalid opcode tag. This type only covers malformed input streams,
/// which the driver layer must reject before the core ever sees a word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Input length is not a multiple of the 4-byte instruction width.
    #[error("byte stream of length {len} is not a multiple of the 4-byte word size")]
    TrailingBytes { len: usize },
}
