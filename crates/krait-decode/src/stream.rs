//! Little-endian byte-to-word assembly.
//!
//! Driver support, not the decode core: the decoder only ever sees whole
//! `u32` words. Streams whose length is not a multiple of 4 are rejected
//! here, so a truncated file never reaches a decode call (a partial word is
//! a driver error, not decode-level invalidity).

use crate::error::StreamError;

/// Assembles a byte slice into instruction words,
/// `byte0 | byte1 << 8 | byte2 << 16 | byte3 << 24`.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, StreamError> {
    if bytes.len() % 4 != 0 {
        return Err(StreamError::TrailingBytes { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_little_endian_words() {
        let words = words_from_bytes(&[0x1F, 0x20, 0x03, 0xD5, 0x00, 0x00, 0x00, 0x11]).unwrap();
        assert_eq!(words, vec![0xD503_201F, 0x1100_0000]);
    }

    #[test]
    fn empty_stream_is_fine() {
        assert_eq!(words_from_bytes(&[]).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let err = words_from_bytes(&[0x1F, 0x20, 0x03]).unwrap_err();
        assert_eq!(err, StreamError::TrailingBytes { len: 3 });
        assert!(err.to_string().contains("length 3"));
    }
}
