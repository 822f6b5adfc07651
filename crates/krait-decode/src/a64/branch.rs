//! Branches, exception generation and system instructions: bits 28:25 = 101x.

use krait_core::insn::{
    Barrier, Branch26, BranchReg, CmpBranch, CondBranch, ExcGen, Hint, PState, SysOp, SysReg,
    TestBranch,
};
use krait_core::{Cond, Opcode, RegSize};

use crate::bits::{bit, bits, signed_scaled};
use crate::pattern::Pattern;

/// Encoding table, most-specific-first. The fully-fixed hint encodings come
/// before the generic hint space, and the system sub-spaces are ordered by
/// decreasing mask width.
pub(super) static PATTERNS: &[Pattern] = &[
    // Named hints.
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_201F, materialize: |_, _| Opcode::Nop },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_203F, materialize: |_, _| Opcode::Yield },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_205F, materialize: |_, _| Opcode::Wfe },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_207F, materialize: |_, _| Opcode::Wfi },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_209F, materialize: |_, _| Opcode::Sev },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD503_20BF, materialize: |_, _| Opcode::Sevl },
    // ERET/DRPS carry no fields at all.
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD69F_03E0, materialize: |_, _| Opcode::Eret },
    Pattern { mask: 0xFFFF_FFFF, bits: 0xD6BF_03E0, materialize: |_, _| Opcode::Drps },
    // Remaining hint space decodes to the generic HINT #imm.
    Pattern { mask: 0xFFFF_F01F, bits: 0xD503_201F, materialize: hint },
    // Barriers.
    Pattern { mask: 0xFFFF_F0FF, bits: 0xD503_305F, materialize: clrex },
    Pattern { mask: 0xFFFF_F0FF, bits: 0xD503_309F, materialize: dsb },
    Pattern { mask: 0xFFFF_F0FF, bits: 0xD503_30BF, materialize: dmb },
    Pattern { mask: 0xFFFF_F0FF, bits: 0xD503_30DF, materialize: isb },
    // MSR (immediate): PSTATE field updates.
    Pattern { mask: 0xFFF8_F01F, bits: 0xD500_401F, materialize: msr_imm },
    // SYS/SYSL.
    Pattern { mask: 0xFFF8_0000, bits: 0xD508_0000, materialize: sys },
    Pattern { mask: 0xFFF8_0000, bits: 0xD528_0000, materialize: sysl },
    // MSR/MRS (register).
    Pattern { mask: 0xFFF0_0000, bits: 0xD510_0000, materialize: msr_reg },
    Pattern { mask: 0xFFF0_0000, bits: 0xD530_0000, materialize: mrs },
    // Exception generation; the opc/LL combinations not listed here are
    // unallocated.
    Pattern { mask: 0xFFE0_001F, bits: 0xD400_0001, materialize: |w, _| Opcode::Svc(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD400_0002, materialize: |w, _| Opcode::Hvc(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD400_0003, materialize: |w, _| Opcode::Smc(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD420_0000, materialize: |w, _| Opcode::Brk(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD440_0000, materialize: |w, _| Opcode::Hlt(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD4A0_0001, materialize: |w, _| Opcode::Dcps1(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD4A0_0002, materialize: |w, _| Opcode::Dcps2(exc(w)) },
    Pattern { mask: 0xFFE0_001F, bits: 0xD4A0_0003, materialize: |w, _| Opcode::Dcps3(exc(w)) },
    // Unconditional branch (register); Rt must be zero.
    Pattern { mask: 0xFFFF_FC1F, bits: 0xD61F_0000, materialize: |w, _| Opcode::Br(breg(w)) },
    Pattern { mask: 0xFFFF_FC1F, bits: 0xD63F_0000, materialize: |w, _| Opcode::Blr(breg(w)) },
    Pattern { mask: 0xFFFF_FC1F, bits: 0xD65F_0000, materialize: |w, _| Opcode::Ret(breg(w)) },
    // Conditional branch (immediate); bit 4 must be zero.
    Pattern { mask: 0xFF00_0010, bits: 0x5400_0000, materialize: b_cond },
    // Unconditional branch (immediate).
    Pattern { mask: 0xFC00_0000, bits: 0x1400_0000, materialize: b },
    Pattern { mask: 0xFC00_0000, bits: 0x9400_0000, materialize: bl },
    // Compare and branch.
    Pattern { mask: 0x7F00_0000, bits: 0x3400_0000, materialize: cbz },
    Pattern { mask: 0x7F00_0000, bits: 0x3500_0000, materialize: cbnz },
    // Test and branch.
    Pattern { mask: 0x7F00_0000, bits: 0x3600_0000, materialize: tbz },
    Pattern { mask: 0x7F00_0000, bits: 0x3700_0000, materialize: tbnz },
];

fn exc(word: u32) -> ExcGen {
    ExcGen {
        imm: bits(word, 5, 16) as u16,
    }
}

fn breg(word: u32) -> BranchReg {
    BranchReg {
        rn: bits(word, 5, 5) as u8,
    }
}

fn hint(word: u32, _pc: u64) -> Opcode {
    Opcode::Hint(Hint {
        imm: bits(word, 5, 7) as u8,
    })
}

fn barrier(word: u32) -> Barrier {
    Barrier {
        option: bits(word, 8, 4) as u8,
    }
}

fn clrex(word: u32, _pc: u64) -> Opcode {
    Opcode::Clrex(barrier(word))
}

fn dsb(word: u32, _pc: u64) -> Opcode {
    Opcode::Dsb(barrier(word))
}

fn dmb(word: u32, _pc: u64) -> Opcode {
    Opcode::Dmb(barrier(word))
}

fn isb(word: u32, _pc: u64) -> Opcode {
    Opcode::Isb(barrier(word))
}

fn msr_imm(word: u32, _pc: u64) -> Opcode {
    Opcode::MsrImm(PState {
        op1: bits(word, 16, 3) as u8,
        op2: bits(word, 5, 3) as u8,
        crm: bits(word, 8, 4) as u8,
    })
}

fn sys_fields(word: u32) -> SysOp {
    SysOp {
        op1: bits(word, 16, 3) as u8,
        crn: bits(word, 12, 4) as u8,
        crm: bits(word, 8, 4) as u8,
        op2: bits(word, 5, 3) as u8,
        rt: bits(word, 0, 5) as u8,
    }
}

fn sys(word: u32, _pc: u64) -> Opcode {
    Opcode::Sys(sys_fields(word))
}

fn sysl(word: u32, _pc: u64) -> Opcode {
    Opcode::Sysl(sys_fields(word))
}

fn sysreg_fields(word: u32) -> SysReg {
    SysReg {
        o0: (2 + bit(word, 19)) as u8,
        op1: bits(word, 16, 3) as u8,
        crn: bits(word, 12, 4) as u8,
        crm: bits(word, 8, 4) as u8,
        op2: bits(word, 5, 3) as u8,
        rt: bits(word, 0, 5) as u8,
    }
}

fn msr_reg(word: u32, _pc: u64) -> Opcode {
    Opcode::MsrReg(sysreg_fields(word))
}

fn mrs(word: u32, _pc: u64) -> Opcode {
    Opcode::Mrs(sysreg_fields(word))
}

fn b_cond(word: u32, pc: u64) -> Opcode {
    let offset = signed_scaled(word, 5, 19, 2);
    Opcode::BCond(CondBranch {
        cond: Cond::from_bits(bits(word, 0, 4)),
        offset,
        target: pc.wrapping_add(offset as u64),
    })
}

fn branch26(word: u32, pc: u64) -> Branch26 {
    let offset = signed_scaled(word, 0, 26, 2);
    Branch26 {
        offset,
        target: pc.wrapping_add(offset as u64),
    }
}

fn b(word: u32, pc: u64) -> Opcode {
    Opcode::B(branch26(word, pc))
}

fn bl(word: u32, pc: u64) -> Opcode {
    Opcode::Bl(branch26(word, pc))
}

fn cmp_branch(word: u32, pc: u64) -> CmpBranch {
    let offset = signed_scaled(word, 5, 19, 2);
    CmpBranch {
        size: RegSize::from_sf(bit(word, 31)),
        rt: bits(word, 0, 5) as u8,
        offset,
        target: pc.wrapping_add(offset as u64),
    }
}

fn cbz(word: u32, pc: u64) -> Opcode {
    Opcode::Cbz(cmp_branch(word, pc))
}

fn cbnz(word: u32, pc: u64) -> Opcode {
    Opcode::Cbnz(cmp_branch(word, pc))
}

fn test_branch(word: u32, pc: u64) -> TestBranch {
    let offset = signed_scaled(word, 5, 14, 2);
    TestBranch {
        rt: bits(word, 0, 5) as u8,
        bit: ((bit(word, 31) << 5) | bits(word, 19, 5)) as u8,
        offset,
        target: pc.wrapping_add(offset as u64),
    }
}

fn tbz(word: u32, pc: u64) -> Opcode {
    Opcode::Tbz(test_branch(word, pc))
}

fn tbnz(word: u32, pc: u64) -> Opcode {
    Opcode::Tbnz(test_branch(word, pc))
}
