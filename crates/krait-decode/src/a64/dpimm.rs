//! Data-processing (immediate) group: bits 28:25 = 100x.

use krait_core::insn::{AddSubImm, Bitfield, Extract, LogicalImm, MoveWide, PcRelAddr};
use krait_core::{Opcode, RegSize};

use crate::bits::{bit, bits, sign_extend};
use crate::pattern::Pattern;

/// Encoding table, most-specific-first.
pub(super) static PATTERNS: &[Pattern] = &[
    // PC-relative addressing.
    Pattern { mask: 0x9F00_0000, bits: 0x1000_0000, materialize: adr },
    Pattern { mask: 0x9F00_0000, bits: 0x9000_0000, materialize: adrp },
    // Add/subtract (immediate). Bit 23 must be zero; the only shift form is
    // LSL #12 selected by bit 22.
    Pattern { mask: 0x7F80_0000, bits: 0x1100_0000, materialize: add_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x3100_0000, materialize: adds_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x5100_0000, materialize: sub_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x7100_0000, materialize: subs_imm },
    // Logical (immediate).
    Pattern { mask: 0x7F80_0000, bits: 0x1200_0000, materialize: and_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x3200_0000, materialize: orr_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x5200_0000, materialize: eor_imm },
    Pattern { mask: 0x7F80_0000, bits: 0x7200_0000, materialize: ands_imm },
    // Move wide (immediate); opc = 01 is unallocated and falls through.
    Pattern { mask: 0x7F80_0000, bits: 0x1280_0000, materialize: movn },
    Pattern { mask: 0x7F80_0000, bits: 0x5280_0000, materialize: movz },
    Pattern { mask: 0x7F80_0000, bits: 0x7280_0000, materialize: movk },
    // Bitfield; opc = 11 is unallocated.
    Pattern { mask: 0x7F80_0000, bits: 0x1300_0000, materialize: sbfm },
    Pattern { mask: 0x7F80_0000, bits: 0x3300_0000, materialize: bfm },
    Pattern { mask: 0x7F80_0000, bits: 0x5300_0000, materialize: ubfm },
    // Extract; o0 (bit 21) must be zero.
    Pattern { mask: 0x7FA0_0000, bits: 0x1380_0000, materialize: extr },
];

fn pcrel_fields(word: u32) -> (u8, i64) {
    let immlo = bits(word, 29, 2);
    let immhi = bits(word, 5, 19);
    let imm21 = ((immhi << 2) | immlo) as u64;
    (bits(word, 0, 5) as u8, sign_extend(imm21, 21))
}

fn adr(word: u32, pc: u64) -> Opcode {
    let (rd, offset) = pcrel_fields(word);
    Opcode::Adr(PcRelAddr {
        rd,
        offset,
        target: pc.wrapping_add(offset as u64),
    })
}

fn adrp(word: u32, pc: u64) -> Opcode {
    let (rd, imm21) = pcrel_fields(word);
    let offset = imm21 << 12;
    Opcode::Adrp(PcRelAddr {
        rd,
        offset,
        target: (pc & !0xFFF).wrapping_add(offset as u64),
    })
}

fn addsub_imm(word: u32) -> AddSubImm {
    let imm12 = bits(word, 10, 12) as u64;
    let imm = if bit(word, 22) == 1 { imm12 << 12 } else { imm12 };
    AddSubImm {
        size: RegSize::from_sf(bit(word, 31)),
        rd: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm,
    }
}

fn add_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::AddImm(addsub_imm(word))
}

fn adds_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::AddsImm(addsub_imm(word))
}

fn sub_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::SubImm(addsub_imm(word))
}

fn subs_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::SubsImm(addsub_imm(word))
}

fn logical_imm(word: u32) -> Option<LogicalImm> {
    let sf = bit(word, 31) == 1;
    let n = bit(word, 22);
    let immr = bits(word, 16, 6);
    let imms = bits(word, 10, 6);
    let imm = decode_bit_masks(sf, n, imms, immr)?;
    Some(LogicalImm {
        size: RegSize::from_sf(bit(word, 31)),
        rd: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm,
    })
}

fn and_imm(word: u32, _pc: u64) -> Opcode {
    logical_imm(word).map_or(Opcode::Invalid, Opcode::AndImm)
}

fn orr_imm(word: u32, _pc: u64) -> Opcode {
    logical_imm(word).map_or(Opcode::Invalid, Opcode::OrrImm)
}

fn eor_imm(word: u32, _pc: u64) -> Opcode {
    logical_imm(word).map_or(Opcode::Invalid, Opcode::EorImm)
}

fn ands_imm(word: u32, _pc: u64) -> Opcode {
    logical_imm(word).map_or(Opcode::Invalid, Opcode::AndsImm)
}

fn move_wide(word: u32) -> Option<MoveWide> {
    let sf = bit(word, 31);
    let hw = bits(word, 21, 2);
    // The upper lanes do not exist in the 32-bit form.
    if sf == 0 && hw >= 2 {
        return None;
    }
    Some(MoveWide {
        size: RegSize::from_sf(sf),
        rd: bits(word, 0, 5) as u8,
        imm: bits(word, 5, 16) as u16,
        shift: (hw * 16) as u8,
    })
}

fn movn(word: u32, _pc: u64) -> Opcode {
    move_wide(word).map_or(Opcode::Invalid, Opcode::Movn)
}

fn movz(word: u32, _pc: u64) -> Opcode {
    move_wide(word).map_or(Opcode::Invalid, Opcode::Movz)
}

fn movk(word: u32, _pc: u64) -> Opcode {
    move_wide(word).map_or(Opcode::Invalid, Opcode::Movk)
}

fn bitfield(word: u32) -> Option<Bitfield> {
    let sf = bit(word, 31);
    let n = bit(word, 22);
    let immr = bits(word, 16, 6);
    let imms = bits(word, 10, 6);
    // N tracks sf, and the 32-bit form cannot name bit positions >= 32.
    if n != sf || (sf == 0 && (immr >= 32 || imms >= 32)) {
        return None;
    }
    Some(Bitfield {
        size: RegSize::from_sf(sf),
        rd: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        immr: immr as u8,
        imms: imms as u8,
    })
}

fn sbfm(word: u32, _pc: u64) -> Opcode {
    bitfield(word).map_or(Opcode::Invalid, Opcode::Sbfm)
}

fn bfm(word: u32, _pc: u64) -> Opcode {
    bitfield(word).map_or(Opcode::Invalid, Opcode::Bfm)
}

fn ubfm(word: u32, _pc: u64) -> Opcode {
    bitfield(word).map_or(Opcode::Invalid, Opcode::Ubfm)
}

fn extr(word: u32, _pc: u64) -> Opcode {
    let sf = bit(word, 31);
    let n = bit(word, 22);
    let imms = bits(word, 10, 6);
    if n != sf || (sf == 0 && imms >= 32) {
        return Opcode::Invalid;
    }
    Opcode::Extr(Extract {
        size: RegSize::from_sf(sf),
        rd: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        rm: bits(word, 16, 5) as u8,
        lsb: imms as u8,
    })
}

/// Expands an (N, imms, immr) bitmask immediate to its register-sized value.
///
/// Returns `None` for the unallocated combinations (no set element length,
/// or an all-ones element), which are decode gates rather than zero values.
pub(super) fn decode_bit_masks(sf: bool, n: u32, imms: u32, immr: u32) -> Option<u64> {
    if !sf && n == 1 {
        return None;
    }
    let combined = (n << 6) | (!imms & 0x3F);
    if combined == 0 {
        return None;
    }
    let len = 31 - combined.leading_zeros();
    let levels = (1u32 << len) - 1;
    let s = imms & levels;
    let r = immr & levels;
    if s == levels {
        // imms of all-ones would encode a full-width run, which the ISA
        // reserves (a register of all ones is not representable here).
        return None;
    }
    let esize = 1u32 << len;
    let emask = if esize == 64 { !0u64 } else { (1u64 << esize) - 1 };
    // s == levels was rejected above, so s + 1 < 64 and this cannot overflow.
    let welem = (1u64 << (s + 1)) - 1;
    let rotated = if r == 0 {
        welem
    } else {
        ((welem >> r) | (welem << (esize - r))) & emask
    };

    let mut value = 0u64;
    let mut pos = 0;
    let width = if sf { 64 } else { 32 };
    while pos < width {
        value |= rotated << pos;
        pos += esize;
    }
    if !sf {
        value &= 0xFFFF_FFFF;
    }
    Some(value)
}
