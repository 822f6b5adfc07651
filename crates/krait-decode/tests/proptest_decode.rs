//! Property-based tests for the A64 decoder.
//!
//! These verify the decode-contract invariants:
//! - Decoding never panics on arbitrary words
//! - Exactly one of valid-with-opcode / invalid, never a partial record
//! - Deterministic and order-independent (pure function of (mode, pc, word))
//! - No hidden cross-call state: sequential and partitioned parallel decoding
//!   of the same stream agree per word

use proptest::prelude::*;

use krait_core::{IsaMode, Opcode};
use krait_decode::{decode, stream, A64Decoder, InsnDecoder};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary words should never panic.
    #[test]
    fn decode_never_panics(word in any::<u32>(), pc in any::<u64>()) {
        let _ = decode(IsaMode::A64, pc, word);
    }

    /// Every decode is total: the record echoes its inputs, and validity
    /// agrees with the opcode tag.
    #[test]
    fn decode_is_total_and_consistent(word in any::<u32>(), pc in any::<u64>()) {
        let insn = decode(IsaMode::A64, pc, word);
        prop_assert_eq!(insn.word, word);
        prop_assert_eq!(insn.pc, pc);
        prop_assert_eq!(insn.is_valid(), insn.opcode != Opcode::Invalid);
    }

    /// Decoding is deterministic: same input, same output, regardless of
    /// what was decoded in between.
    #[test]
    fn decode_is_deterministic(word in any::<u32>(), noise in any::<u32>(), pc in any::<u64>()) {
        let first = decode(IsaMode::A64, pc, word);
        let _ = decode(IsaMode::A64, pc.wrapping_add(4), noise);
        let second = decode(IsaMode::A64, pc, word);
        prop_assert_eq!(first, second);
    }

    /// A shared decoder instance decodes exactly like the free function.
    #[test]
    fn decoder_instance_is_stateless(words in prop::collection::vec(any::<u32>(), 1..64)) {
        let dec = A64Decoder::new();
        for (i, &word) in words.iter().enumerate() {
            let pc = 0x1000 + 4 * i as u64;
            prop_assert_eq!(dec.decode_word(pc, word), decode(IsaMode::A64, pc, word));
        }
    }

    /// Sequential decode and decode partitioned across threads agree per
    /// word, so the core carries no cross-call state.
    #[test]
    fn parallel_partitions_match_sequential(words in prop::collection::vec(any::<u32>(), 8..256)) {
        let sequential: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, &word)| decode(IsaMode::A64, 4 * i as u64, word))
            .collect();

        let mid = words.len() / 2;
        let (lo, hi) = words.split_at(mid);
        let parallel = std::thread::scope(|s| {
            let front = s.spawn(|| {
                lo.iter()
                    .enumerate()
                    .map(|(i, &word)| decode(IsaMode::A64, 4 * i as u64, word))
                    .collect::<Vec<_>>()
            });
            let back = s.spawn(|| {
                hi.iter()
                    .enumerate()
                    .map(|(i, &word)| decode(IsaMode::A64, 4 * (mid + i) as u64, word))
                    .collect::<Vec<_>>()
            });
            let mut all = front.join().unwrap();
            all.extend(back.join().unwrap());
            all
        });

        prop_assert_eq!(sequential, parallel);
    }

    /// Word assembly accepts exactly the streams whose length is a multiple
    /// of four.
    #[test]
    fn stream_assembly_length_gate(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = stream::words_from_bytes(&bytes);
        if bytes.len() % 4 == 0 {
            let words = result.unwrap();
            prop_assert_eq!(words.len(), bytes.len() / 4);
        } else {
            prop_assert!(result.is_err());
        }
    }
}

// ============================================================================
// Reserved-bit boundary cases.
// ============================================================================

/// Pairs of (valid word, same word with one must-be-zero/one bit flipped),
/// one per encoding family.
const RESERVED_BIT_FLIPS: &[(u32, u32)] = &[
    // ADD (immediate): bit 23 must be zero.
    (0x1100_0000, 0x1180_0000),
    // AND (immediate, 32-bit): N must be zero.
    (0x1200_0020, 0x1240_0020),
    // SBFM (64-bit): N must track sf.
    (0x9344_FC20, 0x9304_FC20),
    // EXTR: o0 (bit 21) must be zero.
    (0x93C2_2020, 0x93E2_2020),
    // B.cond: bit 4 must be zero.
    (0x5400_0101, 0x5400_0111),
    // BR: Rt must be zero.
    (0xD61F_0060, 0xD61F_0061),
    // CCMP (register): o3 (bit 4) must be zero.
    (0xFA42_0020, 0xFA42_0030),
    // ADD (shifted register): shift kind 0b11 is reserved.
    (0x8B02_0020, 0x8BC2_0020),
];

#[test]
fn reserved_bit_flips_invalidate() {
    for &(valid, flipped) in RESERVED_BIT_FLIPS {
        let v = decode(IsaMode::A64, 0, valid);
        let f = decode(IsaMode::A64, 0, flipped);
        assert!(v.is_valid(), "{valid:#010x} should decode");
        assert!(!f.is_valid(), "{flipped:#010x} should not decode");
    }
}

#[test]
fn all_zero_and_all_one_words_are_invalid() {
    assert!(!decode(IsaMode::A64, 0, 0x0000_0000).is_valid());
    assert!(!decode(IsaMode::A64, 0, 0xFFFF_FFFF).is_valid());
}

#[test]
fn scenario_add_immediate_zero() {
    let insn = decode(IsaMode::A64, 0, 0x1100_0000);
    assert!(insn.is_valid());
    match insn.opcode {
        Opcode::AddImm(f) => assert_eq!(f.imm, 0),
        other => panic!("expected add-immediate, got {other:?}"),
    }
}

#[test]
fn truncated_stream_never_reaches_decode() {
    // 7 bytes: one whole word plus a partial one.
    let err = stream::words_from_bytes(&[0, 0, 0, 0x11, 0xAA, 0xBB, 0xCC]).unwrap_err();
    assert!(err.to_string().contains("not a multiple"));
}
