//! Data-processing (register) group: bits 28:25 = x101.

use krait_core::insn::{CondCmpImm, CondCmpReg, CondSel, ExtendedReg, MulAdd, Reg2, RegReg, ShiftedReg};
use krait_core::{Cond, Extend, ExtendKind, Opcode, RegSize, Shift, ShiftKind};

use crate::bits::{bit, bits};
use crate::pattern::Pattern;

/// Encoding table, most-specific-first.
pub(super) static PATTERNS: &[Pattern] = &[
    // Data-processing 1-source (the opcode2 field, bits 20:16, must be zero).
    Pattern { mask: 0xFFFF_FC00, bits: 0x5AC0_0800, materialize: rev_w },
    Pattern { mask: 0xFFFF_FC00, bits: 0xDAC0_0800, materialize: rev32 },
    Pattern { mask: 0xFFFF_FC00, bits: 0xDAC0_0C00, materialize: rev_x },
    Pattern { mask: 0x7FFF_FC00, bits: 0x5AC0_0000, materialize: rbit },
    Pattern { mask: 0x7FFF_FC00, bits: 0x5AC0_0400, materialize: rev16 },
    Pattern { mask: 0x7FFF_FC00, bits: 0x5AC0_1000, materialize: clz },
    Pattern { mask: 0x7FFF_FC00, bits: 0x5AC0_1400, materialize: cls },
    // Add/subtract with carry (bits 15:10 must be zero).
    Pattern { mask: 0x7FE0_FC00, bits: 0x1A00_0000, materialize: adc },
    Pattern { mask: 0x7FE0_FC00, bits: 0x3A00_0000, materialize: adcs },
    Pattern { mask: 0x7FE0_FC00, bits: 0x5A00_0000, materialize: sbc },
    Pattern { mask: 0x7FE0_FC00, bits: 0x7A00_0000, materialize: sbcs },
    // Data-processing 2-source.
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_0800, materialize: udiv },
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_0C00, materialize: sdiv },
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_2000, materialize: lslv },
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_2400, materialize: lsrv },
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_2800, materialize: asrv },
    Pattern { mask: 0x7FE0_FC00, bits: 0x1AC0_2C00, materialize: rorv },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_4000, materialize: crc32b },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_4400, materialize: crc32h },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_4800, materialize: crc32w },
    Pattern { mask: 0xFFE0_FC00, bits: 0x9AC0_4C00, materialize: crc32x },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_5000, materialize: crc32cb },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_5400, materialize: crc32ch },
    Pattern { mask: 0xFFE0_FC00, bits: 0x1AC0_5800, materialize: crc32cw },
    Pattern { mask: 0xFFE0_FC00, bits: 0x9AC0_5C00, materialize: crc32cx },
    // Conditional compare (register/immediate); o2 (bit 10) and o3 (bit 4)
    // must be zero.
    Pattern { mask: 0x7FE0_0C10, bits: 0x3A40_0000, materialize: ccmn_reg },
    Pattern { mask: 0x7FE0_0C10, bits: 0x7A40_0000, materialize: ccmp_reg },
    Pattern { mask: 0x7FE0_0C10, bits: 0x3A40_0800, materialize: ccmn_imm },
    Pattern { mask: 0x7FE0_0C10, bits: 0x7A40_0800, materialize: ccmp_imm },
    // Conditional select.
    Pattern { mask: 0x7FE0_0C00, bits: 0x1A80_0000, materialize: csel },
    Pattern { mask: 0x7FE0_0C00, bits: 0x1A80_0400, materialize: csinc },
    Pattern { mask: 0x7FE0_0C00, bits: 0x5A80_0000, materialize: csinv },
    Pattern { mask: 0x7FE0_0C00, bits: 0x5A80_0400, materialize: csneg },
    // Data-processing 3-source.
    Pattern { mask: 0x7FE0_8000, bits: 0x1B00_0000, materialize: madd },
    Pattern { mask: 0x7FE0_8000, bits: 0x1B00_8000, materialize: msub },
    Pattern { mask: 0xFFE0_8000, bits: 0x9B20_0000, materialize: smaddl },
    Pattern { mask: 0xFFE0_8000, bits: 0x9B20_8000, materialize: smsubl },
    Pattern { mask: 0xFFE0_8000, bits: 0x9B40_0000, materialize: smulh },
    Pattern { mask: 0xFFE0_8000, bits: 0x9BA0_0000, materialize: umaddl },
    Pattern { mask: 0xFFE0_8000, bits: 0x9BA0_8000, materialize: umsubl },
    Pattern { mask: 0xFFE0_8000, bits: 0x9BC0_0000, materialize: umulh },
    // Add/subtract (extended register): option field instead of a shift.
    Pattern { mask: 0x7FE0_0000, bits: 0x0B20_0000, materialize: add_ext },
    Pattern { mask: 0x7FE0_0000, bits: 0x2B20_0000, materialize: adds_ext },
    Pattern { mask: 0x7FE0_0000, bits: 0x4B20_0000, materialize: sub_ext },
    Pattern { mask: 0x7FE0_0000, bits: 0x6B20_0000, materialize: subs_ext },
    // Add/subtract (shifted register); bit 21 must be zero.
    Pattern { mask: 0x7F20_0000, bits: 0x0B00_0000, materialize: add_shifted },
    Pattern { mask: 0x7F20_0000, bits: 0x2B00_0000, materialize: adds_shifted },
    Pattern { mask: 0x7F20_0000, bits: 0x4B00_0000, materialize: sub_shifted },
    Pattern { mask: 0x7F20_0000, bits: 0x6B00_0000, materialize: subs_shifted },
    // Logical (shifted register); bit 21 is N.
    Pattern { mask: 0x7F20_0000, bits: 0x0A00_0000, materialize: and_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x0A20_0000, materialize: bic_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x2A00_0000, materialize: orr_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x2A20_0000, materialize: orn_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x4A00_0000, materialize: eor_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x4A20_0000, materialize: eon_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x6A00_0000, materialize: ands_reg },
    Pattern { mask: 0x7F20_0000, bits: 0x6A20_0000, materialize: bics_reg },
];

fn size(word: u32) -> RegSize {
    RegSize::from_sf(bit(word, 31))
}

fn rd(word: u32) -> u8 {
    bits(word, 0, 5) as u8
}

fn rn(word: u32) -> u8 {
    bits(word, 5, 5) as u8
}

fn rm(word: u32) -> u8 {
    bits(word, 16, 5) as u8
}

// ---------------------------------------------------------------------------
// Shifted and extended register forms.

/// Shared field extraction for shifted-register forms; `allow_ror` is false
/// for add/sub, where shift kind 0b11 is reserved.
fn shifted(word: u32, allow_ror: bool) -> Option<ShiftedReg> {
    let amount = bits(word, 10, 6);
    let kind = bits(word, 22, 2);
    if !allow_ror && kind == 0b11 {
        return None;
    }
    let sf = bit(word, 31);
    if sf == 0 && amount >= 32 {
        return None;
    }
    Some(ShiftedReg {
        size: RegSize::from_sf(sf),
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        shift: Shift::new(ShiftKind::from_bits(kind), amount as u8),
    })
}

macro_rules! shifted_op {
    ($name:ident, $opcode:ident, $allow_ror:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            match shifted(word, $allow_ror) {
                Some(f) => Opcode::$opcode(f),
                None => Opcode::Invalid,
            }
        }
    };
}

shifted_op!(and_reg, AndReg, true);
shifted_op!(bic_reg, BicReg, true);
shifted_op!(orr_reg, OrrReg, true);
shifted_op!(orn_reg, OrnReg, true);
shifted_op!(eor_reg, EorReg, true);
shifted_op!(eon_reg, EonReg, true);
shifted_op!(ands_reg, AndsReg, true);
shifted_op!(bics_reg, BicsReg, true);
shifted_op!(add_shifted, AddReg, false);
shifted_op!(adds_shifted, AddsReg, false);
shifted_op!(sub_shifted, SubReg, false);
shifted_op!(subs_shifted, SubsReg, false);

fn extended(word: u32) -> Option<ExtendedReg> {
    let amount = bits(word, 10, 3);
    if amount > 4 {
        return None;
    }
    Some(ExtendedReg {
        size: size(word),
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        extend: Extend::new(ExtendKind::from_option(bits(word, 13, 3)), amount as u8),
    })
}

macro_rules! extended_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            match extended(word) {
                Some(f) => Opcode::$opcode(f),
                None => Opcode::Invalid,
            }
        }
    };
}

extended_op!(add_ext, AddExt);
extended_op!(adds_ext, AddsExt);
extended_op!(sub_ext, SubExt);
extended_op!(subs_ext, SubsExt);

// ---------------------------------------------------------------------------
// Carry, divides, variable shifts, CRC.

fn reg_reg(word: u32) -> RegReg {
    RegReg {
        size: size(word),
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
    }
}

macro_rules! reg_reg_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(reg_reg(word))
        }
    };
}

reg_reg_op!(adc, Adc);
reg_reg_op!(adcs, Adcs);
reg_reg_op!(sbc, Sbc);
reg_reg_op!(sbcs, Sbcs);
reg_reg_op!(udiv, Udiv);
reg_reg_op!(sdiv, Sdiv);
reg_reg_op!(lslv, Lslv);
reg_reg_op!(lsrv, Lsrv);
reg_reg_op!(asrv, Asrv);
reg_reg_op!(rorv, Rorv);
reg_reg_op!(crc32b, Crc32b);
reg_reg_op!(crc32h, Crc32h);
reg_reg_op!(crc32w, Crc32w);
reg_reg_op!(crc32x, Crc32x);
reg_reg_op!(crc32cb, Crc32cb);
reg_reg_op!(crc32ch, Crc32ch);
reg_reg_op!(crc32cw, Crc32cw);
reg_reg_op!(crc32cx, Crc32cx);

// ---------------------------------------------------------------------------
// Conditional compare and select.

fn cond(word: u32) -> Cond {
    Cond::from_bits(bits(word, 12, 4))
}

fn cond_cmp_reg(word: u32) -> CondCmpReg {
    CondCmpReg {
        size: size(word),
        rn: rn(word),
        rm: rm(word),
        nzcv: bits(word, 0, 4) as u8,
        cond: cond(word),
    }
}

fn ccmn_reg(word: u32, _pc: u64) -> Opcode {
    Opcode::CcmnReg(cond_cmp_reg(word))
}

fn ccmp_reg(word: u32, _pc: u64) -> Opcode {
    Opcode::CcmpReg(cond_cmp_reg(word))
}

fn cond_cmp_imm(word: u32) -> CondCmpImm {
    CondCmpImm {
        size: size(word),
        rn: rn(word),
        imm: bits(word, 16, 5) as u8,
        nzcv: bits(word, 0, 4) as u8,
        cond: cond(word),
    }
}

fn ccmn_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::CcmnImm(cond_cmp_imm(word))
}

fn ccmp_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::CcmpImm(cond_cmp_imm(word))
}

fn cond_sel(word: u32) -> CondSel {
    CondSel {
        size: size(word),
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        cond: cond(word),
    }
}

macro_rules! cond_sel_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(cond_sel(word))
        }
    };
}

cond_sel_op!(csel, Csel);
cond_sel_op!(csinc, Csinc);
cond_sel_op!(csinv, Csinv);
cond_sel_op!(csneg, Csneg);

// ---------------------------------------------------------------------------
// 1-source and 3-source.

fn reg2(word: u32) -> Reg2 {
    Reg2 {
        size: size(word),
        rd: rd(word),
        rn: rn(word),
    }
}

macro_rules! reg2_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(reg2(word))
        }
    };
}

reg2_op!(rbit, Rbit);
reg2_op!(rev16, Rev16);
reg2_op!(rev_w, Rev);
reg2_op!(rev_x, Rev);
reg2_op!(rev32, Rev32);
reg2_op!(clz, Clz);
reg2_op!(cls, Cls);

fn mul_add(word: u32, size: RegSize) -> MulAdd {
    MulAdd {
        size,
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        ra: bits(word, 10, 5) as u8,
    }
}

fn madd(word: u32, _pc: u64) -> Opcode {
    Opcode::Madd(mul_add(word, size(word)))
}

fn msub(word: u32, _pc: u64) -> Opcode {
    Opcode::Msub(mul_add(word, size(word)))
}

fn smaddl(word: u32, _pc: u64) -> Opcode {
    Opcode::Smaddl(mul_add(word, RegSize::X))
}

fn smsubl(word: u32, _pc: u64) -> Opcode {
    Opcode::Smsubl(mul_add(word, RegSize::X))
}

fn umaddl(word: u32, _pc: u64) -> Opcode {
    Opcode::Umaddl(mul_add(word, RegSize::X))
}

fn umsubl(word: u32, _pc: u64) -> Opcode {
    Opcode::Umsubl(mul_add(word, RegSize::X))
}

fn smulh(word: u32, _pc: u64) -> Opcode {
    Opcode::Smulh(reg_reg(word))
}

fn umulh(word: u32, _pc: u64) -> Opcode {
    Opcode::Umulh(reg_reg(word))
}

#[cfg(test)]
mod tests {
    use super::super::decode;
    use krait_core::{Cond, ExtendKind, Opcode, RegSize, ShiftKind};

    #[test]
    fn add_reg_plain() {
        // ADD X0, X1, X2
        match decode(0, 0x8B02_0020).opcode {
            Opcode::AddReg(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!((f.rd, f.rn, f.rm), (0, 1, 2));
                assert_eq!(f.shift.amount, 0);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn add_reg_shifted() {
        // ADD W3, W4, W5, LSL #2
        match decode(0, 0x0B05_0883).opcode {
            Opcode::AddReg(f) => {
                assert_eq!(f.shift.kind, ShiftKind::Lsl);
                assert_eq!(f.shift.amount, 2);
            }
            other => panic!("{other:?}"),
        }
        // SUB X0, X1, X2, ASR #4
        match decode(0, 0xCB82_1020).opcode {
            Opcode::SubReg(f) => {
                assert_eq!(f.shift.kind, ShiftKind::Asr);
                assert_eq!(f.shift.amount, 4);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn addsub_ror_shift_is_reserved() {
        // ADD X0, X1, X2 with shift kind 0b11.
        assert_eq!(decode(0, 0x8BC2_0020).opcode, Opcode::Invalid);
    }

    #[test]
    fn logical_reg_allows_ror() {
        // AND X0, X1, X2, ROR #1
        match decode(0, 0x8AC2_0420).opcode {
            Opcode::AndReg(f) => {
                assert_eq!(f.shift.kind, ShiftKind::Ror);
                assert_eq!(f.shift.amount, 1);
            }
            other => panic!("{other:?}"),
        }
        // ORR W0, WZR, W2 (MOV W0, W2)
        match decode(0, 0x2A02_03E0).opcode {
            Opcode::OrrReg(f) => assert_eq!((f.rn, f.rm), (31, 2)),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn w_form_shift_amount_is_bounded() {
        // AND W0, W1, W2, LSL #32 names a bit past the register.
        assert_eq!(decode(0, 0x0A02_8020).opcode, Opcode::Invalid);
    }

    #[test]
    fn add_extended_register() {
        // ADD X0, X1, W2, UXTW
        match decode(0, 0x8B22_4020).opcode {
            Opcode::AddExt(f) => {
                assert_eq!(f.extend.kind, ExtendKind::Uxtw);
                assert_eq!(f.extend.amount, 0);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn extended_shift_amount_capped_at_four() {
        assert_eq!(decode(0, 0x8B22_5420).opcode, Opcode::Invalid);
    }

    #[test]
    fn carry_arithmetic() {
        // ADC X0, X1, X2
        assert!(matches!(decode(0, 0x9A02_0020).opcode, Opcode::Adc(_)));
        // SBCS W1, W2, W3
        match decode(0, 0x7A03_0041).opcode {
            Opcode::Sbcs(f) => assert_eq!((f.rd, f.rn, f.rm), (1, 2, 3)),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn conditional_compare() {
        // CCMP X1, X2, #0, EQ
        match decode(0, 0xFA42_0020).opcode {
            Opcode::CcmpReg(f) => {
                assert_eq!(f.cond, Cond::Eq);
                assert_eq!(f.nzcv, 0);
            }
            other => panic!("{other:?}"),
        }
        // CCMN W1, #5, #4, NE
        match decode(0, 0x3A45_1824).opcode {
            Opcode::CcmnImm(f) => {
                assert_eq!(f.imm, 5);
                assert_eq!(f.nzcv, 4);
                assert_eq!(f.cond, Cond::Ne);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn conditional_compare_o3_gate() {
        // Bit 4 set is unallocated.
        assert_eq!(decode(0, 0xFA42_0030).opcode, Opcode::Invalid);
    }

    #[test]
    fn conditional_select_family() {
        // CSEL X0, X1, X2, GT
        match decode(0, 0x9A82_C020).opcode {
            Opcode::Csel(f) => assert_eq!(f.cond, Cond::Gt),
            other => panic!("{other:?}"),
        }
        // CSINC W0, W1, W2, LT
        assert!(matches!(decode(0, 0x1A82_B420).opcode, Opcode::Csinc(_)));
        // CSNEG X3, X4, X5, EQ
        match decode(0, 0xDA85_0483).opcode {
            Opcode::Csneg(f) => assert_eq!((f.rd, f.rn, f.rm), (3, 4, 5)),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn multiply_accumulate() {
        // MADD X0, X1, X2, X3
        match decode(0, 0x9B02_0C20).opcode {
            Opcode::Madd(f) => assert_eq!(f.ra, 3),
            other => panic!("{other:?}"),
        }
        // MUL X0, X1, X2 is MADD with XZR accumulator.
        match decode(0, 0x9B02_7C20).opcode {
            Opcode::Madd(f) => assert_eq!(f.ra, 31),
            other => panic!("{other:?}"),
        }
        // MSUB W0, W1, W2, W3
        assert!(matches!(decode(0, 0x1B02_8C20).opcode, Opcode::Msub(_)));
        // SMADDL X0, W1, W2, X3
        match decode(0, 0x9B22_0C20).opcode {
            Opcode::Smaddl(f) => assert_eq!(f.size, RegSize::X),
            other => panic!("{other:?}"),
        }
        // SMULH X0, X1, X2
        assert!(matches!(decode(0, 0x9B42_7C20).opcode, Opcode::Smulh(_)));
        // UMULH X0, X1, X2
        assert!(matches!(decode(0, 0x9BC2_7C20).opcode, Opcode::Umulh(_)));
    }

    #[test]
    fn divides_and_variable_shifts() {
        // UDIV W0, W1, W2
        assert!(matches!(decode(0, 0x1AC2_0820).opcode, Opcode::Udiv(_)));
        // SDIV X0, X1, X2
        assert!(matches!(decode(0, 0x9AC2_0C20).opcode, Opcode::Sdiv(_)));
        // LSLV X0, X1, X2
        assert!(matches!(decode(0, 0x9AC2_2020).opcode, Opcode::Lslv(_)));
        // RORV W5, W6, W7
        match decode(0, 0x1AC7_2CC5).opcode {
            Opcode::Rorv(f) => assert_eq!((f.rd, f.rn, f.rm), (5, 6, 7)),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn crc32_family() {
        // CRC32W W0, W1, W2
        match decode(0, 0x1AC2_4820).opcode {
            Opcode::Crc32w(f) => assert_eq!(f.size, RegSize::W),
            other => panic!("{other:?}"),
        }
        // CRC32X W0, W1, X2
        match decode(0, 0x9AC2_4C20).opcode {
            Opcode::Crc32x(f) => assert_eq!(f.size, RegSize::X),
            other => panic!("{other:?}"),
        }
        // CRC32CB W0, W1, W2
        assert!(matches!(decode(0, 0x1AC2_5020).opcode, Opcode::Crc32cb(_)));
    }

    #[test]
    fn one_source_ops() {
        // RBIT X0, X1
        assert!(matches!(decode(0, 0xDAC0_0020).opcode, Opcode::Rbit(_)));
        // CLZ W3, W4
        match decode(0, 0x5AC0_1083).opcode {
            Opcode::Clz(f) => assert_eq!((f.rd, f.rn), (3, 4)),
            other => panic!("{other:?}"),
        }
        // REV X1, X2 / REV W1, W2 / REV32 X1, X2
        assert!(matches!(decode(0, 0xDAC0_0C41).opcode, Opcode::Rev(_)));
        assert!(matches!(decode(0, 0x5AC0_0841).opcode, Opcode::Rev(_)));
        assert!(matches!(decode(0, 0xDAC0_0841).opcode, Opcode::Rev32(_)));
    }

    #[test]
    fn one_source_opcode2_must_be_zero() {
        assert_eq!(decode(0, 0x5AC1_0020).opcode, Opcode::Invalid);
    }
}
