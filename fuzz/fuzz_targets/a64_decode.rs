#![no_main]

use krait_core::IsaMode;
use krait_decode::{decode, stream};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // A64 words are fixed 32-bit; drop the trailing partial word.
    let whole = data.len() & !3;
    let words = stream::words_from_bytes(&data[..whole]).unwrap();

    for (i, &word) in words.iter().enumerate().take(1024) {
        let pc = 0x1000 + 4 * i as u64;
        let insn = decode(IsaMode::A64, pc, word);

        // The record must be fully populated and internally consistent.
        assert_eq!(insn.pc, pc);
        assert_eq!(insn.word, word);
        assert_eq!(insn.is_valid(), insn.opcode.is_valid());

        // Purity: an immediate repeat must agree.
        assert_eq!(decode(IsaMode::A64, pc, word), insn);
    }
});
