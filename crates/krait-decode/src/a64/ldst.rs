//! Loads and stores: bits 28:25 = x1x0.
//!
//! The register-form tables lean on three sub-layouts sharing the 111_V_0x
//! prefix: unsigned scaled offset (bits 25:24 = 01), the imm9 family
//! (bits 25:24 = 00, bit 21 = 0, with bits 11:10 selecting
//! unscaled/post-index/unprivileged/pre-index), and register offset
//! (bit 21 = 1, bits 11:10 = 10). ARMv8.1 atomics live in the bit 21 = 1,
//! bits 11:10 = 00 corner.

use krait_core::insn::{
    Atomic, LdExcl, LdExclPair, LdLit, LdLitFp, LdStFpImm, LdStFpPair, LdStFpRegOff, LdStImm,
    LdStOrd, LdStPair, LdStRegOff, Prefetch, PrefetchLit, PrefetchRegOff, StExcl, StExclPair,
};
use krait_core::{AddrMode, Extend, ExtendKind, FpSize, MemWidth, Opcode, RegSize};

use crate::bits::{bit, bits, sign_extend, signed_scaled};
use crate::pattern::Pattern;

/// Encoding table, most-specific-first: exclusives and pair forms with their
/// fully-fixed discriminators come before the wide register-form entries.
pub(super) static PATTERNS: &[Pattern] = &[
    // Load/store exclusive pair (size must be 1x; the 0x space is CAS*).
    Pattern { mask: 0xBFE0_8000, bits: 0x8820_0000, materialize: stxp },
    Pattern { mask: 0xBFE0_8000, bits: 0x8820_8000, materialize: stlxp },
    Pattern { mask: 0xBFE0_8000, bits: 0x8860_0000, materialize: ldxp },
    Pattern { mask: 0xBFE0_8000, bits: 0x8860_8000, materialize: ldaxp },
    // Load/store exclusive register.
    Pattern { mask: 0x3FE0_8000, bits: 0x0800_0000, materialize: stxr },
    Pattern { mask: 0x3FE0_8000, bits: 0x0800_8000, materialize: stlxr },
    Pattern { mask: 0x3FE0_8000, bits: 0x0840_0000, materialize: ldxr },
    Pattern { mask: 0x3FE0_8000, bits: 0x0840_8000, materialize: ldaxr },
    // Load-acquire / store-release.
    Pattern { mask: 0x3FE0_8000, bits: 0x0880_8000, materialize: stlr },
    Pattern { mask: 0x3FE0_8000, bits: 0x08C0_8000, materialize: ldar },
    // Load register (literal).
    Pattern { mask: 0xFF00_0000, bits: 0x1800_0000, materialize: ldr_lit_w },
    Pattern { mask: 0xFF00_0000, bits: 0x5800_0000, materialize: ldr_lit_x },
    Pattern { mask: 0xFF00_0000, bits: 0x9800_0000, materialize: ldrsw_lit },
    Pattern { mask: 0xFF00_0000, bits: 0xD800_0000, materialize: prfm_lit },
    Pattern { mask: 0xFF00_0000, bits: 0x1C00_0000, materialize: ldr_lit_s },
    Pattern { mask: 0xFF00_0000, bits: 0x5C00_0000, materialize: ldr_lit_d },
    Pattern { mask: 0xFF00_0000, bits: 0x9C00_0000, materialize: ldr_lit_q },
    // Load/store no-allocate pair (fixed 000 in bits 25:23) -- must precede
    // the general pair entries, which leave bits 24:23 free.
    Pattern { mask: 0xFFC0_0000, bits: 0x2800_0000, materialize: stnp_w },
    Pattern { mask: 0xFFC0_0000, bits: 0x2840_0000, materialize: ldnp_w },
    Pattern { mask: 0xFFC0_0000, bits: 0xA800_0000, materialize: stnp_x },
    Pattern { mask: 0xFFC0_0000, bits: 0xA840_0000, materialize: ldnp_x },
    Pattern { mask: 0xFFC0_0000, bits: 0x2C00_0000, materialize: stnp_s },
    Pattern { mask: 0xFFC0_0000, bits: 0x2C40_0000, materialize: ldnp_s },
    Pattern { mask: 0xFFC0_0000, bits: 0x6C00_0000, materialize: stnp_d },
    Pattern { mask: 0xFFC0_0000, bits: 0x6C40_0000, materialize: ldnp_d },
    Pattern { mask: 0xFFC0_0000, bits: 0xAC00_0000, materialize: stnp_q },
    Pattern { mask: 0xFFC0_0000, bits: 0xAC40_0000, materialize: ldnp_q },
    // Load/store pair (post-index, signed offset, pre-index).
    Pattern { mask: 0xFE40_0000, bits: 0x2800_0000, materialize: stp_w },
    Pattern { mask: 0xFE40_0000, bits: 0x2840_0000, materialize: ldp_w },
    Pattern { mask: 0xFE40_0000, bits: 0x6840_0000, materialize: ldpsw },
    Pattern { mask: 0xFE40_0000, bits: 0xA800_0000, materialize: stp_x },
    Pattern { mask: 0xFE40_0000, bits: 0xA840_0000, materialize: ldp_x },
    Pattern { mask: 0xFE40_0000, bits: 0x2C00_0000, materialize: stp_s },
    Pattern { mask: 0xFE40_0000, bits: 0x2C40_0000, materialize: ldp_s },
    Pattern { mask: 0xFE40_0000, bits: 0x6C00_0000, materialize: stp_d },
    Pattern { mask: 0xFE40_0000, bits: 0x6C40_0000, materialize: ldp_d },
    Pattern { mask: 0xFE40_0000, bits: 0xAC00_0000, materialize: stp_q },
    Pattern { mask: 0xFE40_0000, bits: 0xAC40_0000, materialize: ldp_q },
    // Atomic memory operations (ARMv8.1): bit 21 = 1, bits 11:10 = 00.
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_0000, materialize: ldadd },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_1000, materialize: ldclr },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_2000, materialize: ldeor },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_3000, materialize: ldset },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_4000, materialize: ldsmax },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_5000, materialize: ldsmin },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_6000, materialize: ldumax },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_7000, materialize: ldumin },
    Pattern { mask: 0x3F20_FC00, bits: 0x3820_8000, materialize: swp },
    // Load/store register (register offset): bit 21 = 1, bits 11:10 = 10.
    Pattern { mask: 0xFFE0_0C00, bits: 0x3820_0800, materialize: strb_reg },
    Pattern { mask: 0xFFE0_0C00, bits: 0x3860_0800, materialize: ldrb_reg },
    Pattern { mask: 0xFFE0_0C00, bits: 0x38A0_0800, materialize: ldrsb_reg_x },
    Pattern { mask: 0xFFE0_0C00, bits: 0x38E0_0800, materialize: ldrsb_reg_w },
    Pattern { mask: 0xFFE0_0C00, bits: 0x7820_0800, materialize: strh_reg },
    Pattern { mask: 0xFFE0_0C00, bits: 0x7860_0800, materialize: ldrh_reg },
    Pattern { mask: 0xFFE0_0C00, bits: 0x78A0_0800, materialize: ldrsh_reg_x },
    Pattern { mask: 0xFFE0_0C00, bits: 0x78E0_0800, materialize: ldrsh_reg_w },
    Pattern { mask: 0xFFE0_0C00, bits: 0xB820_0800, materialize: str_reg_w },
    Pattern { mask: 0xFFE0_0C00, bits: 0xB860_0800, materialize: ldr_reg_w },
    Pattern { mask: 0xFFE0_0C00, bits: 0xB8A0_0800, materialize: ldrsw_reg },
    Pattern { mask: 0xFFE0_0C00, bits: 0xF820_0800, materialize: str_reg_x },
    Pattern { mask: 0xFFE0_0C00, bits: 0xF860_0800, materialize: ldr_reg_x },
    Pattern { mask: 0xFFE0_0C00, bits: 0xF8A0_0800, materialize: prfm_reg },
    Pattern { mask: 0x3F20_0C00, bits: 0x3C20_0800, materialize: fp_reg_off },
    // Load/store register (imm9 family): bit 21 = 0, bits 11:10 select the
    // form inside each materializer.
    Pattern { mask: 0xFFE0_0000, bits: 0x3800_0000, materialize: strb_imm9 },
    Pattern { mask: 0xFFE0_0000, bits: 0x3840_0000, materialize: ldrb_imm9 },
    Pattern { mask: 0xFFE0_0000, bits: 0x3880_0000, materialize: ldrsb_imm9_x },
    Pattern { mask: 0xFFE0_0000, bits: 0x38C0_0000, materialize: ldrsb_imm9_w },
    Pattern { mask: 0xFFE0_0000, bits: 0x7800_0000, materialize: strh_imm9 },
    Pattern { mask: 0xFFE0_0000, bits: 0x7840_0000, materialize: ldrh_imm9 },
    Pattern { mask: 0xFFE0_0000, bits: 0x7880_0000, materialize: ldrsh_imm9_x },
    Pattern { mask: 0xFFE0_0000, bits: 0x78C0_0000, materialize: ldrsh_imm9_w },
    Pattern { mask: 0xFFE0_0000, bits: 0xB800_0000, materialize: str_imm9_w },
    Pattern { mask: 0xFFE0_0000, bits: 0xB840_0000, materialize: ldr_imm9_w },
    Pattern { mask: 0xFFE0_0000, bits: 0xB880_0000, materialize: ldrsw_imm9 },
    Pattern { mask: 0xFFE0_0000, bits: 0xF800_0000, materialize: str_imm9_x },
    Pattern { mask: 0xFFE0_0000, bits: 0xF840_0000, materialize: ldr_imm9_x },
    Pattern { mask: 0xFFE0_0000, bits: 0xF880_0000, materialize: prfum },
    Pattern { mask: 0x3F20_0000, bits: 0x3C00_0000, materialize: fp_imm9 },
    // Load/store register (unsigned immediate).
    Pattern { mask: 0xFFC0_0000, bits: 0x3900_0000, materialize: strb_uimm },
    Pattern { mask: 0xFFC0_0000, bits: 0x3940_0000, materialize: ldrb_uimm },
    Pattern { mask: 0xFFC0_0000, bits: 0x3980_0000, materialize: ldrsb_uimm_x },
    Pattern { mask: 0xFFC0_0000, bits: 0x39C0_0000, materialize: ldrsb_uimm_w },
    Pattern { mask: 0xFFC0_0000, bits: 0x7900_0000, materialize: strh_uimm },
    Pattern { mask: 0xFFC0_0000, bits: 0x7940_0000, materialize: ldrh_uimm },
    Pattern { mask: 0xFFC0_0000, bits: 0x7980_0000, materialize: ldrsh_uimm_x },
    Pattern { mask: 0xFFC0_0000, bits: 0x79C0_0000, materialize: ldrsh_uimm_w },
    Pattern { mask: 0xFFC0_0000, bits: 0xB900_0000, materialize: str_uimm_w },
    Pattern { mask: 0xFFC0_0000, bits: 0xB940_0000, materialize: ldr_uimm_w },
    Pattern { mask: 0xFFC0_0000, bits: 0xB980_0000, materialize: ldrsw_uimm },
    Pattern { mask: 0xFFC0_0000, bits: 0xF900_0000, materialize: str_uimm_x },
    Pattern { mask: 0xFFC0_0000, bits: 0xF940_0000, materialize: ldr_uimm_x },
    Pattern { mask: 0xFFC0_0000, bits: 0xF980_0000, materialize: prfm_uimm },
    Pattern { mask: 0x3F00_0000, bits: 0x3D00_0000, materialize: fp_uimm },
];

// ---------------------------------------------------------------------------
// Exclusives and ordered accesses.

fn width(word: u32) -> MemWidth {
    MemWidth::from_size(bits(word, 30, 2))
}

fn stxr(word: u32, _pc: u64) -> Opcode {
    Opcode::Stxr(st_excl(word))
}

fn stlxr(word: u32, _pc: u64) -> Opcode {
    Opcode::Stlxr(st_excl(word))
}

fn st_excl(word: u32) -> StExcl {
    StExcl {
        width: width(word),
        rs: bits(word, 16, 5) as u8,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
    }
}

fn ldxr(word: u32, _pc: u64) -> Opcode {
    Opcode::Ldxr(ld_excl(word))
}

fn ldaxr(word: u32, _pc: u64) -> Opcode {
    Opcode::Ldaxr(ld_excl(word))
}

fn ld_excl(word: u32) -> LdExcl {
    LdExcl {
        width: width(word),
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
    }
}

fn stxp(word: u32, _pc: u64) -> Opcode {
    Opcode::Stxp(st_excl_pair(word))
}

fn stlxp(word: u32, _pc: u64) -> Opcode {
    Opcode::Stlxp(st_excl_pair(word))
}

fn st_excl_pair(word: u32) -> StExclPair {
    StExclPair {
        size: RegSize::from_sf(bit(word, 30)),
        rs: bits(word, 16, 5) as u8,
        rt: bits(word, 0, 5) as u8,
        rt2: bits(word, 10, 5) as u8,
        rn: bits(word, 5, 5) as u8,
    }
}

fn ldxp(word: u32, _pc: u64) -> Opcode {
    Opcode::Ldxp(ld_excl_pair(word))
}

fn ldaxp(word: u32, _pc: u64) -> Opcode {
    Opcode::Ldaxp(ld_excl_pair(word))
}

fn ld_excl_pair(word: u32) -> LdExclPair {
    LdExclPair {
        size: RegSize::from_sf(bit(word, 30)),
        rt: bits(word, 0, 5) as u8,
        rt2: bits(word, 10, 5) as u8,
        rn: bits(word, 5, 5) as u8,
    }
}

fn stlr(word: u32, _pc: u64) -> Opcode {
    Opcode::Stlr(ld_st_ord(word))
}

fn ldar(word: u32, _pc: u64) -> Opcode {
    Opcode::Ldar(ld_st_ord(word))
}

fn ld_st_ord(word: u32) -> LdStOrd {
    LdStOrd {
        width: width(word),
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
    }
}

// ---------------------------------------------------------------------------
// Literals.

fn lit_fields(word: u32, pc: u64) -> (u8, i64, u64) {
    let offset = signed_scaled(word, 5, 19, 2);
    (
        bits(word, 0, 5) as u8,
        offset,
        pc.wrapping_add(offset as u64),
    )
}

fn ldr_lit(word: u32, pc: u64, size: RegSize) -> Opcode {
    let (rt, offset, target) = lit_fields(word, pc);
    Opcode::LdrLit(LdLit { size, rt, offset, target })
}

fn ldr_lit_w(word: u32, pc: u64) -> Opcode {
    ldr_lit(word, pc, RegSize::W)
}

fn ldr_lit_x(word: u32, pc: u64) -> Opcode {
    ldr_lit(word, pc, RegSize::X)
}

fn ldrsw_lit(word: u32, pc: u64) -> Opcode {
    let (rt, offset, target) = lit_fields(word, pc);
    Opcode::LdrswLit(LdLit { size: RegSize::X, rt, offset, target })
}

fn prfm_lit(word: u32, pc: u64) -> Opcode {
    let (prfop, offset, target) = lit_fields(word, pc);
    Opcode::PrfmLit(PrefetchLit { prfop, offset, target })
}

fn ldr_lit_fp(word: u32, pc: u64, size: FpSize) -> Opcode {
    let (rt, offset, target) = lit_fields(word, pc);
    Opcode::LdrLitFp(LdLitFp { size, rt, offset, target })
}

fn ldr_lit_s(word: u32, pc: u64) -> Opcode {
    ldr_lit_fp(word, pc, FpSize::S)
}

fn ldr_lit_d(word: u32, pc: u64) -> Opcode {
    ldr_lit_fp(word, pc, FpSize::D)
}

fn ldr_lit_q(word: u32, pc: u64) -> Opcode {
    ldr_lit_fp(word, pc, FpSize::Q)
}

// ---------------------------------------------------------------------------
// Pairs.

fn pair_mode(word: u32) -> Option<AddrMode> {
    match bits(word, 23, 2) {
        0b01 => Some(AddrMode::PostIndex),
        0b10 => Some(AddrMode::Offset),
        0b11 => Some(AddrMode::PreIndex),
        // Caught by the no-allocate entries before this one.
        _ => None,
    }
}

fn pair_fields(word: u32, size: RegSize, scale: u32, mode: AddrMode) -> LdStPair {
    LdStPair {
        size,
        rt: bits(word, 0, 5) as u8,
        rt2: bits(word, 10, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: signed_scaled(word, 15, 7, scale),
        mode,
    }
}

fn fp_pair_fields(word: u32, size: FpSize, mode: AddrMode) -> LdStFpPair {
    LdStFpPair {
        size,
        rt: bits(word, 0, 5) as u8,
        rt2: bits(word, 10, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: signed_scaled(word, 15, 7, size.scale()),
        mode,
    }
}

macro_rules! gpr_pair {
    ($name:ident, $opcode:ident, $size:expr, $scale:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            match pair_mode(word) {
                Some(mode) => Opcode::$opcode(pair_fields(word, $size, $scale, mode)),
                None => Opcode::Invalid,
            }
        }
    };
}

gpr_pair!(stp_w, Stp, RegSize::W, 2);
gpr_pair!(ldp_w, Ldp, RegSize::W, 2);
gpr_pair!(stp_x, Stp, RegSize::X, 3);
gpr_pair!(ldp_x, Ldp, RegSize::X, 3);
gpr_pair!(ldpsw, Ldpsw, RegSize::X, 2);

macro_rules! fp_pair {
    ($name:ident, $opcode:ident, $size:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            match pair_mode(word) {
                Some(mode) => Opcode::$opcode(fp_pair_fields(word, $size, mode)),
                None => Opcode::Invalid,
            }
        }
    };
}

fp_pair!(stp_s, StpFp, FpSize::S);
fp_pair!(ldp_s, LdpFp, FpSize::S);
fp_pair!(stp_d, StpFp, FpSize::D);
fp_pair!(ldp_d, LdpFp, FpSize::D);
fp_pair!(stp_q, StpFp, FpSize::Q);
fp_pair!(ldp_q, LdpFp, FpSize::Q);

macro_rules! gpr_pair_noalloc {
    ($name:ident, $opcode:ident, $size:expr, $scale:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(pair_fields(word, $size, $scale, AddrMode::Offset))
        }
    };
}

gpr_pair_noalloc!(stnp_w, Stnp, RegSize::W, 2);
gpr_pair_noalloc!(ldnp_w, Ldnp, RegSize::W, 2);
gpr_pair_noalloc!(stnp_x, Stnp, RegSize::X, 3);
gpr_pair_noalloc!(ldnp_x, Ldnp, RegSize::X, 3);

macro_rules! fp_pair_noalloc {
    ($name:ident, $opcode:ident, $size:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(fp_pair_fields(word, $size, AddrMode::Offset))
        }
    };
}

fp_pair_noalloc!(stnp_s, StnpFp, FpSize::S);
fp_pair_noalloc!(ldnp_s, LdnpFp, FpSize::S);
fp_pair_noalloc!(stnp_d, StnpFp, FpSize::D);
fp_pair_noalloc!(ldnp_d, LdnpFp, FpSize::D);
fp_pair_noalloc!(stnp_q, StnpFp, FpSize::Q);
fp_pair_noalloc!(ldnp_q, LdnpFp, FpSize::Q);

// ---------------------------------------------------------------------------
// Atomics.

fn atomic(word: u32) -> Atomic {
    Atomic {
        width: width(word),
        rs: bits(word, 16, 5) as u8,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        acquire: bit(word, 23) == 1,
        release: bit(word, 22) == 1,
    }
}

macro_rules! atomic_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(atomic(word))
        }
    };
}

atomic_op!(ldadd, LdAdd);
atomic_op!(ldclr, LdClr);
atomic_op!(ldeor, LdEor);
atomic_op!(ldset, LdSet);
atomic_op!(ldsmax, LdSmax);
atomic_op!(ldsmin, LdSmin);
atomic_op!(ldumax, LdUmax);
atomic_op!(ldumin, LdUmin);
atomic_op!(swp, Swp);

// ---------------------------------------------------------------------------
// Register offset.

/// Decodes the option/S pair; option values without bit 1 set are reserved.
fn reg_off_extend(word: u32, scale: u32) -> Option<Extend> {
    let option = bits(word, 13, 3);
    if option & 0b010 == 0 {
        return None;
    }
    let amount = if bit(word, 12) == 1 { scale as u8 } else { 0 };
    Some(Extend::new(ExtendKind::from_option(option), amount))
}

fn reg_off(word: u32, size: RegSize, scale: u32) -> Option<LdStRegOff> {
    Some(LdStRegOff {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        rm: bits(word, 16, 5) as u8,
        extend: reg_off_extend(word, scale)?,
    })
}

macro_rules! gpr_reg_off {
    ($name:ident, $opcode:ident, $size:expr, $scale:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            match reg_off(word, $size, $scale) {
                Some(f) => Opcode::$opcode(f),
                None => Opcode::Invalid,
            }
        }
    };
}

gpr_reg_off!(strb_reg, StrbReg, RegSize::W, 0);
gpr_reg_off!(ldrb_reg, LdrbReg, RegSize::W, 0);
gpr_reg_off!(ldrsb_reg_x, LdrsbReg, RegSize::X, 0);
gpr_reg_off!(ldrsb_reg_w, LdrsbReg, RegSize::W, 0);
gpr_reg_off!(strh_reg, StrhReg, RegSize::W, 1);
gpr_reg_off!(ldrh_reg, LdrhReg, RegSize::W, 1);
gpr_reg_off!(ldrsh_reg_x, LdrshReg, RegSize::X, 1);
gpr_reg_off!(ldrsh_reg_w, LdrshReg, RegSize::W, 1);
gpr_reg_off!(str_reg_w, StrReg, RegSize::W, 2);
gpr_reg_off!(ldr_reg_w, LdrReg, RegSize::W, 2);
gpr_reg_off!(ldrsw_reg, LdrswReg, RegSize::X, 2);
gpr_reg_off!(str_reg_x, StrReg, RegSize::X, 3);
gpr_reg_off!(ldr_reg_x, LdrReg, RegSize::X, 3);

fn prfm_reg(word: u32, _pc: u64) -> Opcode {
    match reg_off_extend(word, 3) {
        Some(extend) => Opcode::PrfmReg(PrefetchRegOff {
            prfop: bits(word, 0, 5) as u8,
            rn: bits(word, 5, 5) as u8,
            rm: bits(word, 16, 5) as u8,
            extend,
        }),
        None => Opcode::Invalid,
    }
}

fn fp_reg_off(word: u32, _pc: u64) -> Opcode {
    let Some((size, load)) = fp_size_opc(word) else {
        return Opcode::Invalid;
    };
    let Some(extend) = reg_off_extend(word, size.scale()) else {
        return Opcode::Invalid;
    };
    let f = LdStFpRegOff {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        rm: bits(word, 16, 5) as u8,
        extend,
    };
    if load {
        Opcode::LdrFpReg(f)
    } else {
        Opcode::StrFpReg(f)
    }
}

// ---------------------------------------------------------------------------
// Imm9 family (unscaled, post-index, unprivileged, pre-index).

#[derive(Clone, Copy, PartialEq)]
enum Imm9Form {
    Unscaled,
    Post,
    Unpriv,
    Pre,
}

fn imm9(word: u32, size: RegSize) -> (LdStImm, Imm9Form) {
    let form = match bits(word, 10, 2) {
        0b00 => Imm9Form::Unscaled,
        0b01 => Imm9Form::Post,
        0b10 => Imm9Form::Unpriv,
        _ => Imm9Form::Pre,
    };
    let mode = match form {
        Imm9Form::Post => AddrMode::PostIndex,
        Imm9Form::Pre => AddrMode::PreIndex,
        _ => AddrMode::Offset,
    };
    let f = LdStImm {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: sign_extend(bits(word, 12, 9) as u64, 9),
        mode,
    };
    (f, form)
}

macro_rules! gpr_imm9 {
    ($name:ident, $indexed:ident, $unscaled:ident, $unpriv:ident, $size:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            let (f, form) = imm9(word, $size);
            match form {
                Imm9Form::Unscaled => Opcode::$unscaled(f),
                Imm9Form::Unpriv => Opcode::$unpriv(f),
                Imm9Form::Post | Imm9Form::Pre => Opcode::$indexed(f),
            }
        }
    };
}

gpr_imm9!(strb_imm9, Strb, Sturb, Sttrb, RegSize::W);
gpr_imm9!(ldrb_imm9, Ldrb, Ldurb, Ldtrb, RegSize::W);
gpr_imm9!(ldrsb_imm9_x, Ldrsb, Ldursb, Ldtrsb, RegSize::X);
gpr_imm9!(ldrsb_imm9_w, Ldrsb, Ldursb, Ldtrsb, RegSize::W);
gpr_imm9!(strh_imm9, Strh, Sturh, Sttrh, RegSize::W);
gpr_imm9!(ldrh_imm9, Ldrh, Ldurh, Ldtrh, RegSize::W);
gpr_imm9!(ldrsh_imm9_x, Ldrsh, Ldursh, Ldtrsh, RegSize::X);
gpr_imm9!(ldrsh_imm9_w, Ldrsh, Ldursh, Ldtrsh, RegSize::W);
gpr_imm9!(str_imm9_w, Str, Stur, Sttr, RegSize::W);
gpr_imm9!(ldr_imm9_w, Ldr, Ldur, Ldtr, RegSize::W);
gpr_imm9!(ldrsw_imm9, Ldrsw, Ldursw, Ldtrsw, RegSize::X);
gpr_imm9!(str_imm9_x, Str, Stur, Sttr, RegSize::X);
gpr_imm9!(ldr_imm9_x, Ldr, Ldur, Ldtr, RegSize::X);

fn prfum(word: u32, _pc: u64) -> Opcode {
    // Only the unscaled form exists in the prefetch corner.
    if bits(word, 10, 2) != 0b00 {
        return Opcode::Invalid;
    }
    Opcode::Prfum(Prefetch {
        prfop: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: sign_extend(bits(word, 12, 9) as u64, 9),
    })
}

fn fp_imm9(word: u32, _pc: u64) -> Opcode {
    let Some((size, load)) = fp_size_opc(word) else {
        return Opcode::Invalid;
    };
    let form = bits(word, 10, 2);
    let mode = match form {
        0b00 => AddrMode::Offset,
        0b01 => AddrMode::PostIndex,
        0b11 => AddrMode::PreIndex,
        // No unprivileged SIMD&FP accesses.
        _ => return Opcode::Invalid,
    };
    let f = LdStFpImm {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: sign_extend(bits(word, 12, 9) as u64, 9),
        mode,
    };
    match (form, load) {
        (0b00, false) => Opcode::SturFp(f),
        (0b00, true) => Opcode::LdurFp(f),
        (_, false) => Opcode::StrFp(f),
        (_, true) => Opcode::LdrFp(f),
    }
}

// ---------------------------------------------------------------------------
// Unsigned scaled immediate.

fn uimm(word: u32, size: RegSize, scale: u32) -> LdStImm {
    LdStImm {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: (bits(word, 10, 12) as i64) << scale,
        mode: AddrMode::Offset,
    }
}

macro_rules! gpr_uimm {
    ($name:ident, $opcode:ident, $size:expr, $scale:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(uimm(word, $size, $scale))
        }
    };
}

gpr_uimm!(strb_uimm, Strb, RegSize::W, 0);
gpr_uimm!(ldrb_uimm, Ldrb, RegSize::W, 0);
gpr_uimm!(ldrsb_uimm_x, Ldrsb, RegSize::X, 0);
gpr_uimm!(ldrsb_uimm_w, Ldrsb, RegSize::W, 0);
gpr_uimm!(strh_uimm, Strh, RegSize::W, 1);
gpr_uimm!(ldrh_uimm, Ldrh, RegSize::W, 1);
gpr_uimm!(ldrsh_uimm_x, Ldrsh, RegSize::X, 1);
gpr_uimm!(ldrsh_uimm_w, Ldrsh, RegSize::W, 1);
gpr_uimm!(str_uimm_w, Str, RegSize::W, 2);
gpr_uimm!(ldr_uimm_w, Ldr, RegSize::W, 2);
gpr_uimm!(ldrsw_uimm, Ldrsw, RegSize::X, 2);
gpr_uimm!(str_uimm_x, Str, RegSize::X, 3);
gpr_uimm!(ldr_uimm_x, Ldr, RegSize::X, 3);

fn prfm_uimm(word: u32, _pc: u64) -> Opcode {
    Opcode::Prfm(Prefetch {
        prfop: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: (bits(word, 10, 12) as i64) << 3,
    })
}

fn fp_uimm(word: u32, _pc: u64) -> Opcode {
    let Some((size, load)) = fp_size_opc(word) else {
        return Opcode::Invalid;
    };
    let f = LdStFpImm {
        size,
        rt: bits(word, 0, 5) as u8,
        rn: bits(word, 5, 5) as u8,
        imm: (bits(word, 10, 12) as i64) << size.scale(),
        mode: AddrMode::Offset,
    };
    if load {
        Opcode::LdrFp(f)
    } else {
        Opcode::StrFp(f)
    }
}

/// Maps the SIMD&FP (size, opc) pair to an access size and load flag;
/// the combinations outside B/H/S/D/Q are unallocated.
fn fp_size_opc(word: u32) -> Option<(FpSize, bool)> {
    let size = bits(word, 30, 2);
    let opc = bits(word, 22, 2);
    let load = opc & 1 == 1;
    let fs = match (size, opc >> 1) {
        (0b00, 0) => FpSize::B,
        (0b01, 0) => FpSize::H,
        (0b10, 0) => FpSize::S,
        (0b11, 0) => FpSize::D,
        (0b00, 1) => FpSize::Q,
        _ => return None,
    };
    Some((fs, load))
}

#[cfg(test)]
mod tests {
    use super::super::decode;
    use krait_core::{AddrMode, ExtendKind, FpSize, MemWidth, Opcode, RegSize};

    #[test]
    fn stp_pre_index_prologue() {
        // STP X29, X30, [SP, #-16]!
        // Encoding: opc=10, 101, V=0, enc=11, L=0, imm7=-2, Rt2=30, Rn=31, Rt=29
        match decode(0, 0xA9BF_7BFD).opcode {
            Opcode::Stp(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!((f.rt, f.rt2, f.rn), (29, 30, 31));
                assert_eq!(f.imm, -16);
                assert_eq!(f.mode, AddrMode::PreIndex);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ldp_post_index_epilogue() {
        // LDP X29, X30, [SP], #16
        match decode(0, 0xA8C1_7BFD).opcode {
            Opcode::Ldp(f) => {
                assert_eq!(f.imm, 16);
                assert_eq!(f.mode, AddrMode::PostIndex);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn stp_w_signed_offset() {
        // STP W1, W2, [X3, #8]
        match decode(0, 0x2901_0861).opcode {
            Opcode::Stp(f) => {
                assert_eq!(f.size, RegSize::W);
                assert_eq!(f.imm, 8);
                assert_eq!(f.mode, AddrMode::Offset);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ldnp_has_no_writeback_modes() {
        // LDNP X1, X2, [X3]
        match decode(0, 0xA840_0861).opcode {
            Opcode::Ldnp(f) => {
                assert_eq!(f.imm, 0);
                assert_eq!(f.mode, AddrMode::Offset);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ldpsw_scales_by_four() {
        // LDPSW X1, X2, [X3, #4]
        match decode(0, 0x6940_8861).opcode {
            Opcode::Ldpsw(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!(f.imm, 4);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn fp_pair_scales_by_element() {
        // STP D8, D9, [SP, #16]
        match decode(0, 0x6D01_27E8).opcode {
            Opcode::StpFp(f) => {
                assert_eq!(f.size, FpSize::D);
                assert_eq!(f.imm, 16);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn str_unsigned_offset_is_scaled() {
        // STR X0, [SP, #16]: imm12=2, scale 8
        match decode(0, 0xF900_0BE0).opcode {
            Opcode::Str(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!(f.rn, 31);
                assert_eq!(f.imm, 16);
                assert_eq!(f.mode, AddrMode::Offset);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ldr_w_unsigned_offset() {
        // LDR W1, [X2, #4]
        match decode(0, 0xB940_0441).opcode {
            Opcode::Ldr(f) => {
                assert_eq!(f.size, RegSize::W);
                assert_eq!(f.imm, 4);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn byte_and_signed_loads() {
        // LDRB W0, [X1]
        assert!(matches!(decode(0, 0x3940_0020).opcode, Opcode::Ldrb(_)));
        // STRB W0, [X1, #1]
        match decode(0, 0x3900_0420).opcode {
            Opcode::Strb(f) => assert_eq!(f.imm, 1),
            other => panic!("{other:?}"),
        }
        // LDRSW X2, [X3, #8]
        match decode(0, 0xB980_0862).opcode {
            Opcode::Ldrsw(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!(f.imm, 8);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn prfm_keeps_raw_hint() {
        // PRFM PLDL1KEEP, [X1]
        match decode(0, 0xF980_0020).opcode {
            Opcode::Prfm(f) => assert_eq!((f.prfop, f.rn, f.imm), (0, 1, 0)),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ldur_is_unscaled() {
        // LDUR X0, [X1, #-8]
        match decode(0, 0xF85F_8020).opcode {
            Opcode::Ldur(f) => {
                assert_eq!(f.imm, -8);
                assert_eq!(f.mode, AddrMode::Offset);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn str_post_and_pre_index() {
        // STR X0, [X1], #8
        match decode(0, 0xF800_8420).opcode {
            Opcode::Str(f) => {
                assert_eq!(f.imm, 8);
                assert_eq!(f.mode, AddrMode::PostIndex);
            }
            other => panic!("{other:?}"),
        }
        // STR X0, [X1, #8]!
        match decode(0, 0xF800_8C20).opcode {
            Opcode::Str(f) => assert_eq!(f.mode, AddrMode::PreIndex),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unprivileged_forms() {
        // LDTR X0, [X1]
        assert!(matches!(decode(0, 0xF840_0820).opcode, Opcode::Ldtr(_)));
        // STTRB W0, [X1]
        assert!(matches!(decode(0, 0x3800_0820).opcode, Opcode::Sttrb(_)));
    }

    #[test]
    fn register_offset_lsl() {
        // STR X2, [X1, X3]: option=011 (LSL), S=0
        match decode(0, 0xF823_6822).opcode {
            Opcode::StrReg(f) => {
                assert_eq!((f.rt, f.rn, f.rm), (2, 1, 3));
                assert_eq!(f.extend.kind, ExtendKind::Uxtx);
                assert_eq!(f.extend.amount, 0);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn register_offset_sxtw_scaled() {
        // LDR X0, [X1, W2, SXTW #3]: option=110, S=1
        match decode(0, 0xF862_D820).opcode {
            Opcode::LdrReg(f) => {
                assert_eq!(f.extend.kind, ExtendKind::Sxtw);
                assert_eq!(f.extend.amount, 3);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn register_offset_reserved_option() {
        // option=000 (UXTB) is not a valid address extend.
        assert_eq!(decode(0, 0xF823_0822).opcode, Opcode::Invalid);
    }

    #[test]
    fn exclusives() {
        // LDXR X0, [X1]: 0xC85F7C20
        match decode(0, 0xC85F_7C20).opcode {
            Opcode::Ldxr(f) => {
                assert_eq!(f.width, MemWidth::X);
                assert_eq!((f.rt, f.rn), (0, 1));
            }
            other => panic!("{other:?}"),
        }
        // STXR W2, X0, [X1]: 0xC8027C20
        match decode(0, 0xC802_7C20).opcode {
            Opcode::Stxr(f) => assert_eq!(f.rs, 2),
            other => panic!("{other:?}"),
        }
        // LDAXR X0, [X1]
        assert!(matches!(decode(0, 0xC85F_FC20).opcode, Opcode::Ldaxr(_)));
        // STLXR W2, X0, [X1]
        assert!(matches!(decode(0, 0xC802_FC20).opcode, Opcode::Stlxr(_)));
    }

    #[test]
    fn exclusive_pairs() {
        // LDXP X0, X3, [X1]: 0xC8600C20
        match decode(0, 0xC860_0C20).opcode {
            Opcode::Ldxp(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!((f.rt, f.rt2), (0, 3));
            }
            other => panic!("{other:?}"),
        }
        // STXP W2, X0, X3, [X1]: 0xC8220C20
        assert!(matches!(decode(0, 0xC822_0C20).opcode, Opcode::Stxp(_)));
    }

    #[test]
    fn acquire_release() {
        // LDAR X0, [X1]: 0xC8DFFC20
        match decode(0, 0xC8DF_FC20).opcode {
            Opcode::Ldar(f) => assert_eq!(f.width, MemWidth::X),
            other => panic!("{other:?}"),
        }
        // STLR X0, [X1]: 0xC89FFC20
        assert!(matches!(decode(0, 0xC89F_FC20).opcode, Opcode::Stlr(_)));
    }

    #[test]
    fn atomics_carry_ordering_bits() {
        // LDADD X2, X0, [X1]: 0xF8220020
        match decode(0, 0xF822_0020).opcode {
            Opcode::LdAdd(f) => {
                assert_eq!(f.width, MemWidth::X);
                assert!(!f.acquire && !f.release);
            }
            other => panic!("{other:?}"),
        }
        // LDADDAL X2, X0, [X1]: 0xF8E20020
        match decode(0, 0xF8E2_0020).opcode {
            Opcode::LdAdd(f) => assert!(f.acquire && f.release),
            other => panic!("{other:?}"),
        }
        // SWP X2, X0, [X1]: 0xF8228020
        assert!(matches!(decode(0, 0xF822_8020).opcode, Opcode::Swp(_)));
        // LDADDB W2, W0, [X1]: 0x38220020
        match decode(0, 0x3822_0020).opcode {
            Opcode::LdAdd(f) => assert_eq!(f.width, MemWidth::B),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn load_literal() {
        // LDR X0, #+8
        match decode(0x1000, 0x5800_0040).opcode {
            Opcode::LdrLit(f) => {
                assert_eq!(f.size, RegSize::X);
                assert_eq!(f.offset, 8);
                assert_eq!(f.target, 0x1008);
            }
            other => panic!("{other:?}"),
        }
        // LDRSW X5, #+8
        assert!(matches!(decode(0, 0x9800_0045).opcode, Opcode::LdrswLit(_)));
        // PRFM PLDL1KEEP, #+8
        assert!(matches!(decode(0, 0xD800_0040).opcode, Opcode::PrfmLit(_)));
        // LDR D1, #+8
        match decode(0, 0x5C00_0041).opcode {
            Opcode::LdrLitFp(f) => assert_eq!(f.size, FpSize::D),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn fp_unsigned_offset() {
        // STR Q0, [X1]
        match decode(0, 0x3D80_0020).opcode {
            Opcode::StrFp(f) => assert_eq!(f.size, FpSize::Q),
            other => panic!("{other:?}"),
        }
        // STR H0, [X1, #2]: 0x7D000420
        match decode(0, 0x7D00_0420).opcode {
            Opcode::StrFp(f) => {
                assert_eq!(f.size, FpSize::H);
                assert_eq!(f.imm, 2);
            }
            other => panic!("{other:?}"),
        }
        // LDR S1, [X2, #4]
        match decode(0, 0xBD40_0441).opcode {
            Opcode::LdrFp(f) => {
                assert_eq!(f.size, FpSize::S);
                assert_eq!(f.imm, 4);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn fp_reserved_size_opc() {
        // size=01 with opc=10 names no register.
        assert_eq!(decode(0, 0x7D80_0000).opcode, Opcode::Invalid);
    }

    #[test]
    fn fp_unscaled_and_register_offset() {
        // LDUR D0, [X1, #-4]
        match decode(0, 0xFC5F_C020).opcode {
            Opcode::LdurFp(f) => {
                assert_eq!(f.size, FpSize::D);
                assert_eq!(f.imm, -4);
            }
            other => panic!("{other:?}"),
        }
        // LDR D0, [X1, X2]
        match decode(0, 0xFC62_6820).opcode {
            Opcode::LdrFpReg(f) => {
                assert_eq!(f.size, FpSize::D);
                assert_eq!(f.rm, 2);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn simd_structure_loads_are_not_modeled() {
        // LD1 {V0.16B}, [X0] lives in the structure-load space.
        assert_eq!(decode(0, 0x4C40_7000).opcode, Opcode::Invalid);
    }

    #[test]
    fn ldapr_space_is_invalid() {
        // LDAPR sits in the atomic corner with opc=100, o3=1.
        assert_eq!(decode(0, 0xF8BF_C020).opcode, Opcode::Invalid);
    }
}
