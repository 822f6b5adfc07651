//! Scalar floating-point and the Advanced SIMD subset: bits 28:25 = x111.
//!
//! Scalar FP is covered in full (compares, immediates, conditional forms,
//! 1/2/3-source data processing, integer conversions). Advanced SIMD covers
//! the three-same bitwise and integer arithmetic forms, the modified
//! immediate space and the copy group; the rest of the vector space decodes
//! to `Invalid`.

use krait_core::insn::{
    FpCmp, FpCmpZero, FpCondCmp, FpCondSel, FpCvtPrec, FpIntCvt, FpMovImm, FpReg2, FpReg3, FpReg4,
    VecDupElem, VecDupGp, VecInsElem, VecInsGp, VecModImm, VecMovGp, VecReg3,
};
use krait_core::{Cond, FpPrec, FpSize, Opcode, RegSize, VecArr};

use crate::bits::{bit, bits};
use crate::pattern::Pattern;

/// Encoding table, most-specific-first.
pub(super) static PATTERNS: &[Pattern] = &[
    // FP compare (bits 13:10 = 1000, op2 low bits select the zero forms).
    Pattern { mask: 0xFF20_FC1F, bits: 0x1E20_2000, materialize: fcmp },
    Pattern { mask: 0xFF20_FC1F, bits: 0x1E20_2008, materialize: fcmp_zero },
    Pattern { mask: 0xFF20_FC1F, bits: 0x1E20_2010, materialize: fcmpe },
    Pattern { mask: 0xFF20_FC1F, bits: 0x1E20_2018, materialize: fcmpe_zero },
    // FP immediate (bits 12:10 = 100, imm5 = 00000).
    Pattern { mask: 0xFF20_1FE0, bits: 0x1E20_1000, materialize: fmov_imm },
    // FP conditional compare (bits 11:10 = 01).
    Pattern { mask: 0xFF20_0C10, bits: 0x1E20_0400, materialize: fccmp },
    Pattern { mask: 0xFF20_0C10, bits: 0x1E20_0410, materialize: fccmpe },
    // FP conditional select (bits 11:10 = 11).
    Pattern { mask: 0xFF20_0C00, bits: 0x1E20_0C00, materialize: fcsel },
    // FP data-processing 1-source (bits 14:10 = 10000).
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E20_4000, materialize: fmov_reg },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E20_C000, materialize: fabs },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E21_4000, materialize: fneg },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E21_C000, materialize: fsqrt },
    Pattern { mask: 0xFF3E_7C00, bits: 0x1E22_4000, materialize: fcvt },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E24_4000, materialize: frintn },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E24_C000, materialize: frintp },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E25_4000, materialize: frintm },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E25_C000, materialize: frintz },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E26_4000, materialize: frinta },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E27_4000, materialize: frintx },
    Pattern { mask: 0xFF3F_FC00, bits: 0x1E27_C000, materialize: frinti },
    // FP data-processing 2-source (bits 11:10 = 10).
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_0800, materialize: fmul },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_1800, materialize: fdiv },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_2800, materialize: fadd },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_3800, materialize: fsub },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_4800, materialize: fmax },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_5800, materialize: fmin },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_6800, materialize: fmaxnm },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_7800, materialize: fminnm },
    Pattern { mask: 0xFF20_FC00, bits: 0x1E20_8800, materialize: fnmul },
    // FMOV to/from the upper half of a vector register.
    Pattern { mask: 0xFFFF_FC00, bits: 0x9EAE_0000, materialize: fmov_to_gp_hi },
    Pattern { mask: 0xFFFF_FC00, bits: 0x9EAF_0000, materialize: fmov_from_gp_hi },
    // FP <-> integer (bits 15:10 = 000000; rmode/opcode fixed per entry).
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E20_0000, materialize: fcvtns },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E21_0000, materialize: fcvtnu },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E22_0000, materialize: scvtf },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E23_0000, materialize: ucvtf },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E24_0000, materialize: fcvtas },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E25_0000, materialize: fcvtau },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E26_0000, materialize: fmov_to_gp },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E27_0000, materialize: fmov_from_gp },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E28_0000, materialize: fcvtps },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E29_0000, materialize: fcvtpu },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E30_0000, materialize: fcvtms },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E31_0000, materialize: fcvtmu },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E38_0000, materialize: fcvtzs },
    Pattern { mask: 0x7F3F_FC00, bits: 0x1E39_0000, materialize: fcvtzu },
    // FP data-processing 3-source.
    Pattern { mask: 0xFF20_8000, bits: 0x1F00_0000, materialize: fmadd },
    Pattern { mask: 0xFF20_8000, bits: 0x1F00_8000, materialize: fmsub },
    Pattern { mask: 0xFF20_8000, bits: 0x1F20_0000, materialize: fnmadd },
    Pattern { mask: 0xFF20_8000, bits: 0x1F20_8000, materialize: fnmsub },
    // Advanced SIMD three-same, bitwise (size field selects the operation).
    Pattern { mask: 0xBFE0_FC00, bits: 0x0E20_1C00, materialize: and_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x0E60_1C00, materialize: bic_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x0EA0_1C00, materialize: orr_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x0EE0_1C00, materialize: orn_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x2E20_1C00, materialize: eor_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x2E60_1C00, materialize: bsl_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x2EA0_1C00, materialize: bit_vec },
    Pattern { mask: 0xBFE0_FC00, bits: 0x2EE0_1C00, materialize: bif_vec },
    // Advanced SIMD three-same, sized integer arithmetic.
    Pattern { mask: 0xBF20_FC00, bits: 0x0E20_8400, materialize: add_vec },
    Pattern { mask: 0xBF20_FC00, bits: 0x2E20_8400, materialize: sub_vec },
    Pattern { mask: 0xBF20_FC00, bits: 0x0E20_8C00, materialize: cmtst_vec },
    Pattern { mask: 0xBF20_FC00, bits: 0x2E20_8C00, materialize: cmeq_vec },
    Pattern { mask: 0xBF20_FC00, bits: 0x0E20_9C00, materialize: mul_vec },
    // Advanced SIMD modified immediate.
    Pattern { mask: 0x9FF8_0C00, bits: 0x0F00_0400, materialize: mod_imm },
    // Advanced SIMD copy.
    Pattern { mask: 0x9FE0_8400, bits: 0x0E00_0400, materialize: copy },
];

fn prec(word: u32) -> Option<FpPrec> {
    FpPrec::from_ftype(bits(word, 22, 2))
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
// Scalar FP.

fn fp_cmp(word: u32) -> Option<FpCmp> {
    Some(FpCmp {
        prec: prec(word)?,
        rn: rn(word),
        rm: rm(word),
    })
}

fn fcmp(word: u32, _pc: u64) -> Opcode {
    fp_cmp(word).map_or(Opcode::Invalid, Opcode::Fcmp)
}

fn fcmpe(word: u32, _pc: u64) -> Opcode {
    fp_cmp(word).map_or(Opcode::Invalid, Opcode::Fcmpe)
}

fn fp_cmp_zero(word: u32) -> Option<FpCmpZero> {
    Some(FpCmpZero {
        prec: prec(word)?,
        rn: rn(word),
    })
}

fn fcmp_zero(word: u32, _pc: u64) -> Opcode {
    fp_cmp_zero(word).map_or(Opcode::Invalid, Opcode::FcmpZero)
}

fn fcmpe_zero(word: u32, _pc: u64) -> Opcode {
    fp_cmp_zero(word).map_or(Opcode::Invalid, Opcode::FcmpeZero)
}

fn fmov_imm(word: u32, _pc: u64) -> Opcode {
    let Some(prec) = prec(word) else {
        return Opcode::Invalid;
    };
    Opcode::FmovImm(FpMovImm {
        prec,
        rd: rd(word),
        value: vfp_expand_imm(bits(word, 13, 8)),
    })
}

fn cond(word: u32) -> Cond {
    Cond::from_bits(bits(word, 12, 4))
}

fn fp_cond_cmp(word: u32) -> Option<FpCondCmp> {
    Some(FpCondCmp {
        prec: prec(word)?,
        rn: rn(word),
        rm: rm(word),
        nzcv: bits(word, 0, 4) as u8,
        cond: cond(word),
    })
}

fn fccmp(word: u32, _pc: u64) -> Opcode {
    fp_cond_cmp(word).map_or(Opcode::Invalid, Opcode::Fccmp)
}

fn fccmpe(word: u32, _pc: u64) -> Opcode {
    fp_cond_cmp(word).map_or(Opcode::Invalid, Opcode::Fccmpe)
}

fn fcsel(word: u32, _pc: u64) -> Opcode {
    let Some(prec) = prec(word) else {
        return Opcode::Invalid;
    };
    Opcode::Fcsel(FpCondSel {
        prec,
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        cond: cond(word),
    })
}

fn fp_reg2(word: u32) -> Option<FpReg2> {
    Some(FpReg2 {
        prec: prec(word)?,
        rd: rd(word),
        rn: rn(word),
    })
}

macro_rules! fp_reg2_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            fp_reg2(word).map_or(Opcode::Invalid, Opcode::$opcode)
        }
    };
}

fp_reg2_op!(fmov_reg, Fmov);
fp_reg2_op!(fabs, Fabs);
fp_reg2_op!(fneg, Fneg);
fp_reg2_op!(fsqrt, Fsqrt);
fp_reg2_op!(frintn, Frintn);
fp_reg2_op!(frintp, Frintp);
fp_reg2_op!(frintm, Frintm);
fp_reg2_op!(frintz, Frintz);
fp_reg2_op!(frinta, Frinta);
fp_reg2_op!(frintx, Frintx);
fp_reg2_op!(frinti, Frinti);

fn fcvt(word: u32, _pc: u64) -> Opcode {
    let Some(from) = prec(word) else {
        return Opcode::Invalid;
    };
    let to = match bits(word, 15, 2) {
        0b00 => FpPrec::Single,
        0b01 => FpPrec::Double,
        0b11 => FpPrec::Half,
        _ => return Opcode::Invalid,
    };
    if from == to {
        return Opcode::Invalid;
    }
    Opcode::Fcvt(FpCvtPrec {
        from,
        to,
        rd: rd(word),
        rn: rn(word),
    })
}

fn fp_reg3(word: u32) -> Option<FpReg3> {
    Some(FpReg3 {
        prec: prec(word)?,
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
    })
}

macro_rules! fp_reg3_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            fp_reg3(word).map_or(Opcode::Invalid, Opcode::$opcode)
        }
    };
}

fp_reg3_op!(fmul, Fmul);
fp_reg3_op!(fdiv, Fdiv);
fp_reg3_op!(fadd, Fadd);
fp_reg3_op!(fsub, Fsub);
fp_reg3_op!(fmax, Fmax);
fp_reg3_op!(fmin, Fmin);
fp_reg3_op!(fmaxnm, Fmaxnm);
fp_reg3_op!(fminnm, Fminnm);
fp_reg3_op!(fnmul, Fnmul);

fn fp_reg4(word: u32) -> Option<FpReg4> {
    Some(FpReg4 {
        prec: prec(word)?,
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
        ra: bits(word, 10, 5) as u8,
    })
}

macro_rules! fp_reg4_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            fp_reg4(word).map_or(Opcode::Invalid, Opcode::$opcode)
        }
    };
}

fp_reg4_op!(fmadd, Fmadd);
fp_reg4_op!(fmsub, Fmsub);
fp_reg4_op!(fnmadd, Fnmadd);
fp_reg4_op!(fnmsub, Fnmsub);

fn fp_int(word: u32) -> Option<FpIntCvt> {
    Some(FpIntCvt {
        size: RegSize::from_sf(bit(word, 31)),
        prec: prec(word)?,
        rd: rd(word),
        rn: rn(word),
    })
}

macro_rules! fp_int_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            fp_int(word).map_or(Opcode::Invalid, Opcode::$opcode)
        }
    };
}

fp_int_op!(fcvtns, Fcvtns);
fp_int_op!(fcvtnu, Fcvtnu);
fp_int_op!(scvtf, Scvtf);
fp_int_op!(ucvtf, Ucvtf);
fp_int_op!(fcvtas, Fcvtas);
fp_int_op!(fcvtau, Fcvtau);
fp_int_op!(fcvtps, Fcvtps);
fp_int_op!(fcvtpu, Fcvtpu);
fp_int_op!(fcvtms, Fcvtms);
fp_int_op!(fcvtmu, Fcvtmu);
fp_int_op!(fcvtzs, Fcvtzs);
fp_int_op!(fcvtzu, Fcvtzu);

/// FMOV between a general and a SIMD&FP register pairs width with precision:
/// W<->S, X<->D, and either width with H. Other combinations are unallocated.
fn fmov_gp(word: u32) -> Option<FpIntCvt> {
    let f = fp_int(word)?;
    let ok = matches!(
        (f.size, f.prec),
        (RegSize::W, FpPrec::Single) | (RegSize::X, FpPrec::Double) | (_, FpPrec::Half)
    );
    ok.then_some(f)
}

fn fmov_to_gp(word: u32, _pc: u64) -> Opcode {
    fmov_gp(word).map_or(Opcode::Invalid, Opcode::FmovToGp)
}

fn fmov_from_gp(word: u32, _pc: u64) -> Opcode {
    fmov_gp(word).map_or(Opcode::Invalid, Opcode::FmovFromGp)
}

fn fmov_hi(word: u32) -> FpIntCvt {
    FpIntCvt {
        size: RegSize::X,
        prec: FpPrec::Double,
        rd: rd(word),
        rn: rn(word),
    }
}

fn fmov_to_gp_hi(word: u32, _pc: u64) -> Opcode {
    Opcode::FmovToGpHi(fmov_hi(word))
}

fn fmov_from_gp_hi(word: u32, _pc: u64) -> Opcode {
    Opcode::FmovFromGpHi(fmov_hi(word))
}

/// Expands the 8-bit VFP immediate: (-1)^a * 2^(bcd - 3) * (16 + efgh)/16
/// with the `b` exponent bit inverted.
fn vfp_expand_imm(imm8: u32) -> f64 {
    let sign = if imm8 & 0x80 != 0 { -1.0 } else { 1.0 };
    let exp = ((!imm8 >> 6) & 1) << 2 | (imm8 >> 4) & 0b11;
    let frac = (16 + (imm8 & 0xF)) as f64 / 16.0;
    sign * frac * f64::powi(2.0, exp as i32 - 3)
}

// ---------------------------------------------------------------------------
// Advanced SIMD.

fn vec_reg3(word: u32, arr: VecArr) -> VecReg3 {
    VecReg3 {
        arr,
        rd: rd(word),
        rn: rn(word),
        rm: rm(word),
    }
}

fn bitwise_arr(word: u32) -> VecArr {
    if bit(word, 30) == 1 {
        VecArr::B16
    } else {
        VecArr::B8
    }
}

macro_rules! vec_bitwise_op {
    ($name:ident, $opcode:ident) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            Opcode::$opcode(vec_reg3(word, bitwise_arr(word)))
        }
    };
}

vec_bitwise_op!(and_vec, AndVec);
vec_bitwise_op!(bic_vec, BicVec);
vec_bitwise_op!(orr_vec, OrrVec);
vec_bitwise_op!(orn_vec, OrnVec);
vec_bitwise_op!(eor_vec, EorVec);
vec_bitwise_op!(bsl_vec, BslVec);
vec_bitwise_op!(bit_vec, BitVec);
vec_bitwise_op!(bif_vec, BifVec);

fn sized_arr(word: u32) -> Option<VecArr> {
    VecArr::from_size_q(bits(word, 22, 2), bit(word, 30))
}

macro_rules! vec_sized_op {
    ($name:ident, $opcode:ident, $allow_d:expr) => {
        fn $name(word: u32, _pc: u64) -> Opcode {
            if !$allow_d && bits(word, 22, 2) == 0b11 {
                return Opcode::Invalid;
            }
            match sized_arr(word) {
                Some(arr) => Opcode::$opcode(vec_reg3(word, arr)),
                None => Opcode::Invalid,
            }
        }
    };
}

vec_sized_op!(add_vec, AddVec, true);
vec_sized_op!(sub_vec, SubVec, true);
vec_sized_op!(cmtst_vec, CmtstVec, true);
vec_sized_op!(cmeq_vec, CmeqVec, true);
vec_sized_op!(mul_vec, MulVec, false);

/// Replicates an `esize`-bit value across 64 bits.
fn replicate(value: u64, esize: u32) -> u64 {
    let mut out = 0;
    let mut pos = 0;
    while pos < 64 {
        out |= value << pos;
        pos += esize;
    }
    out
}

fn mod_imm(word: u32, _pc: u64) -> Opcode {
    let q = bit(word, 30) == 1;
    let op = bit(word, 29);
    let cmode = bits(word, 12, 4);
    let imm8 = (bits(word, 16, 3) << 5 | bits(word, 5, 5)) as u64;
    let f = |imm: u64| VecModImm { q, rd: rd(word), imm };

    match (cmode, op) {
        // 32-bit shifted immediate: MOVI/MVNI even cmode, ORR/BIC odd.
        (0b0000..=0b0111, _) => {
            let imm = replicate(imm8 << (8 * (cmode >> 1)), 32);
            match (cmode & 1, op) {
                (0, 0) => Opcode::Movi(f(imm)),
                (0, _) => Opcode::Mvni(f(imm)),
                (_, 0) => Opcode::OrrVecImm(f(imm)),
                (_, _) => Opcode::BicVecImm(f(imm)),
            }
        }
        // 16-bit shifted immediate.
        (0b1000..=0b1011, _) => {
            let imm = replicate(imm8 << (8 * ((cmode >> 1) & 1)), 16);
            match (cmode & 1, op) {
                (0, 0) => Opcode::Movi(f(imm)),
                (0, _) => Opcode::Mvni(f(imm)),
                (_, 0) => Opcode::OrrVecImm(f(imm)),
                (_, _) => Opcode::BicVecImm(f(imm)),
            }
        }
        // 32-bit shifting-ones (MSL) forms.
        (0b1100, _) | (0b1101, _) => {
            let imm = if cmode & 1 == 0 {
                replicate(imm8 << 8 | 0xFF, 32)
            } else {
                replicate(imm8 << 16 | 0xFFFF, 32)
            };
            if op == 0 {
                Opcode::Movi(f(imm))
            } else {
                Opcode::Mvni(f(imm))
            }
        }
        // Bytes.
        (0b1110, 0) => Opcode::Movi(f(replicate(imm8, 8))),
        // 64-bit: each immediate bit expands to a byte of ones.
        (0b1110, _) => {
            let mut imm = 0u64;
            for i in 0..8 {
                if imm8 >> i & 1 == 1 {
                    imm |= 0xFF << (8 * i);
                }
            }
            Opcode::Movi(f(imm))
        }
        // Per-lane FP constants.
        (0b1111, 0) => {
            let bits32 = (vfp_expand_imm(imm8 as u32) as f32).to_bits() as u64;
            Opcode::FmovVecImm(f(replicate(bits32, 32)))
        }
        (0b1111, _) => {
            if !q {
                return Opcode::Invalid;
            }
            Opcode::FmovVecImm(f(vfp_expand_imm(imm8 as u32).to_bits()))
        }
        _ => Opcode::Invalid,
    }
}

fn copy(word: u32, _pc: u64) -> Opcode {
    let q = bit(word, 30) == 1;
    let op = bit(word, 29);
    let imm5 = bits(word, 16, 5);
    let imm4 = bits(word, 11, 4);
    let tz = imm5.trailing_zeros();
    if tz > 3 {
        // imm5 of all zeros (or a lone bit 4) names no element size.
        return Opcode::Invalid;
    }
    let elem = match tz {
        0 => FpSize::B,
        1 => FpSize::H,
        2 => FpSize::S,
        _ => FpSize::D,
    };
    let index = (imm5 >> (tz + 1)) as u8;
    let (rd, rn) = (rd(word), rn(word));

    if op == 1 {
        // INS (element); only the 128-bit form exists.
        if !q {
            return Opcode::Invalid;
        }
        return Opcode::InsElem(VecInsElem {
            elem,
            rd,
            rn,
            dst_index: index,
            src_index: (imm4 >> tz) as u8,
        });
    }

    match imm4 {
        0b0000 => {
            if elem == FpSize::D && !q {
                return Opcode::Invalid;
            }
            Opcode::DupElem(VecDupElem { q, elem, rd, rn, index })
        }
        0b0001 => {
            if elem == FpSize::D && !q {
                return Opcode::Invalid;
            }
            Opcode::DupGp(VecDupGp { q, elem, rd, rn })
        }
        0b0011 => {
            if !q {
                return Opcode::Invalid;
            }
            Opcode::InsGp(VecInsGp { elem, rd, rn, index })
        }
        0b0101 => {
            // SMOV widens into W from B/H, into X from B/H/S.
            let limit = if q { 2 } else { 1 };
            if tz > limit {
                return Opcode::Invalid;
            }
            Opcode::Smov(VecMovGp {
                size: if q { RegSize::X } else { RegSize::W },
                elem,
                rd,
                rn,
                index,
            })
        }
        0b0111 => {
            // UMOV reads B/H/S into W and exactly D into X.
            let ok = if q { tz == 3 } else { tz <= 2 };
            if !ok {
                return Opcode::Invalid;
            }
            Opcode::Umov(VecMovGp {
                size: if q { RegSize::X } else { RegSize::W },
                elem,
                rd,
                rn,
                index,
            })
        }
        _ => Opcode::Invalid,
    }
}
