//! Decoded-instruction record and the closed opcode enumeration.
//!
//! [`Opcode`] has one variant per recognized A64 encoding plus [`Opcode::Invalid`].
//! The operand payload is the variant's associated data, so a consumer cannot
//! read operand fields that the matched encoding does not define: matching on
//! the variant is the only way in.

use crate::cond::Cond;
use crate::operand::{AddrMode, Extend, FpPrec, FpSize, MemWidth, RegSize, Shift, VecArr};

/// PC-relative address formation (ADR/ADRP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcRelAddr {
    pub rd: u8,
    /// Byte offset from the (page-aligned, for ADRP) program counter.
    pub offset: i64,
    /// Resolved address, relative to the PC the caller supplied.
    pub target: u64,
}

/// Add/subtract with a 12-bit immediate. `imm` carries the final value,
/// i.e. the optional `LSL #12` has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSubImm {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub imm: u64,
}

/// Logical operation with a bitmask immediate, already expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalImm {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub imm: u64,
}

/// Move-wide (MOVN/MOVZ/MOVK). The 16-bit chunk is kept unshifted together
/// with the shift amount, because MOVK semantics need the lane, not a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveWide {
    pub size: RegSize,
    pub rd: u8,
    pub imm: u16,
    pub shift: u8,
}

/// Bitfield move (SBFM/BFM/UBFM) raw rotate/width fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitfield {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub immr: u8,
    pub imms: u8,
}

/// EXTR register-pair extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extract {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub lsb: u8,
}

/// Unconditional immediate branch (B/BL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch26 {
    pub offset: i64,
    pub target: u64,
}

/// Conditional branch (B.cond).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondBranch {
    pub cond: Cond,
    pub offset: i64,
    pub target: u64,
}

/// Compare-and-branch (CBZ/CBNZ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CmpBranch {
    pub size: RegSize,
    pub rt: u8,
    pub offset: i64,
    pub target: u64,
}

/// Test-bit-and-branch (TBZ/TBNZ). `bit` is the assembled b5:b40 position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestBranch {
    pub rt: u8,
    pub bit: u8,
    pub offset: i64,
    pub target: u64,
}

/// Indirect branch through a register (BR/BLR/RET).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchReg {
    pub rn: u8,
}

/// Exception generation (SVC/HVC/SMC/BRK/HLT/DCPS*).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcGen {
    pub imm: u16,
}

/// Barrier option field (the CRm nibble: SY, ISH, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    pub option: u8,
}

/// Unallocated hint-space encoding, kept as its CRm:op2 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    pub imm: u8,
}

/// MSR (immediate): PSTATE field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PState {
    pub op1: u8,
    pub op2: u8,
    pub crm: u8,
}

/// SYS/SYSL system instruction operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysOp {
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
    pub rt: u8,
}

/// MRS/MSR (register) system-register designator plus transfer register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysReg {
    pub o0: u8,
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
    pub rt: u8,
}

/// Immediate-offset load/store. `imm` is the final byte offset (scaled for
/// the unsigned-offset form, raw imm9 for pre/post-index), `size` is the
/// destination register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStImm {
    pub size: RegSize,
    pub rt: u8,
    pub rn: u8,
    pub imm: i64,
    pub mode: AddrMode,
}

/// Register-offset load/store, offset register extended/shifted per `extend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStRegOff {
    pub size: RegSize,
    pub rt: u8,
    pub rn: u8,
    pub rm: u8,
    pub extend: Extend,
}

/// Load/store pair of general registers; `imm` is the scaled byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStPair {
    pub size: RegSize,
    pub rt: u8,
    pub rt2: u8,
    pub rn: u8,
    pub imm: i64,
    pub mode: AddrMode,
}

/// Immediate-offset SIMD&FP load/store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStFpImm {
    pub size: FpSize,
    pub rt: u8,
    pub rn: u8,
    pub imm: i64,
    pub mode: AddrMode,
}

/// Register-offset SIMD&FP load/store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStFpRegOff {
    pub size: FpSize,
    pub rt: u8,
    pub rn: u8,
    pub rm: u8,
    pub extend: Extend,
}

/// Load/store pair of SIMD&FP registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStFpPair {
    pub size: FpSize,
    pub rt: u8,
    pub rt2: u8,
    pub rn: u8,
    pub imm: i64,
    pub mode: AddrMode,
}

/// Load-exclusive (and load-acquire-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdExcl {
    pub width: MemWidth,
    pub rt: u8,
    pub rn: u8,
}

/// Store-exclusive; `rs` receives the status result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StExcl {
    pub width: MemWidth,
    pub rs: u8,
    pub rt: u8,
    pub rn: u8,
}

/// Load-exclusive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdExclPair {
    pub size: RegSize,
    pub rt: u8,
    pub rt2: u8,
    pub rn: u8,
}

/// Store-exclusive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StExclPair {
    pub size: RegSize,
    pub rs: u8,
    pub rt: u8,
    pub rt2: u8,
    pub rn: u8,
}

/// Load-acquire / store-release (LDAR/STLR family).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdStOrd {
    pub width: MemWidth,
    pub rt: u8,
    pub rn: u8,
}

/// PC-relative literal load into a general register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdLit {
    pub size: RegSize,
    pub rt: u8,
    pub offset: i64,
    pub target: u64,
}

/// PC-relative literal load into a SIMD&FP register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LdLitFp {
    pub size: FpSize,
    pub rt: u8,
    pub offset: i64,
    pub target: u64,
}

/// Prefetch with an immediate offset (PRFM/PRFUM). `prfop` is the raw hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefetch {
    pub prfop: u8,
    pub rn: u8,
    pub imm: i64,
}

/// PC-relative literal prefetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefetchLit {
    pub prfop: u8,
    pub offset: i64,
    pub target: u64,
}

/// Register-offset prefetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefetchRegOff {
    pub prfop: u8,
    pub rn: u8,
    pub rm: u8,
    pub extend: Extend,
}

/// ARMv8.1 atomic read-modify-write (LDADD..LDUMIN, SWP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atomic {
    pub width: MemWidth,
    pub rs: u8,
    pub rt: u8,
    pub rn: u8,
    pub acquire: bool,
    pub release: bool,
}

/// Shifted-register data processing (logical and add/sub forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftedReg {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub shift: Shift,
}

/// Extended-register add/sub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedReg {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub extend: Extend,
}

/// Plain three-register form (carry arithmetic, divides, variable shifts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegReg {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
}

/// Conditional compare against a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondCmpReg {
    pub size: RegSize,
    pub rn: u8,
    pub rm: u8,
    pub nzcv: u8,
    pub cond: Cond,
}

/// Conditional compare against a 5-bit immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondCmpImm {
    pub size: RegSize,
    pub rn: u8,
    pub imm: u8,
    pub nzcv: u8,
    pub cond: Cond,
}

/// Conditional select (CSEL/CSINC/CSINV/CSNEG).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondSel {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub cond: Cond,
}

/// Two-register form (1-source data processing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reg2 {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
}

/// Multiply-accumulate form (3-source data processing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MulAdd {
    pub size: RegSize,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub ra: u8,
}

/// Scalar FP compare against a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpCmp {
    pub prec: FpPrec,
    pub rn: u8,
    pub rm: u8,
}

/// Scalar FP compare against +0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpCmpZero {
    pub prec: FpPrec,
    pub rn: u8,
}

/// FMOV (scalar immediate); `value` is the expanded constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpMovImm {
    pub prec: FpPrec,
    pub rd: u8,
    pub value: f64,
}

/// FP conditional compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpCondCmp {
    pub prec: FpPrec,
    pub rn: u8,
    pub rm: u8,
    pub nzcv: u8,
    pub cond: Cond,
}

/// FP conditional select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpCondSel {
    pub prec: FpPrec,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub cond: Cond,
}

/// FP two-register form (1-source group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpReg2 {
    pub prec: FpPrec,
    pub rd: u8,
    pub rn: u8,
}

/// FCVT between scalar precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpCvtPrec {
    pub from: FpPrec,
    pub to: FpPrec,
    pub rd: u8,
    pub rn: u8,
}

/// FP three-register form (2-source group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpReg3 {
    pub prec: FpPrec,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
}

/// FP four-register form (3-source group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpReg4 {
    pub prec: FpPrec,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
    pub ra: u8,
}

/// FP ↔ integer conversion/move; `rd`/`rn` sides depend on the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FpIntCvt {
    pub size: RegSize,
    pub prec: FpPrec,
    pub rd: u8,
    pub rn: u8,
}

/// Vector three-register same-arrangement form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecReg3 {
    pub arr: VecArr,
    pub rd: u8,
    pub rn: u8,
    pub rm: u8,
}

/// Vector modified-immediate form; `imm` is the expanded 64-bit pattern
/// (replicated across the register when `q` is set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecModImm {
    pub q: bool,
    pub rd: u8,
    pub imm: u64,
}

/// DUP (element): replicate one vector lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecDupElem {
    pub q: bool,
    pub elem: FpSize,
    pub rd: u8,
    pub rn: u8,
    pub index: u8,
}

/// DUP (general): replicate a general register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecDupGp {
    pub q: bool,
    pub elem: FpSize,
    pub rd: u8,
    pub rn: u8,
}

/// SMOV/UMOV: vector lane to general register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecMovGp {
    pub size: RegSize,
    pub elem: FpSize,
    pub rd: u8,
    pub rn: u8,
    pub index: u8,
}

/// INS (general): general register into a vector lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecInsGp {
    pub elem: FpSize,
    pub rd: u8,
    pub rn: u8,
    pub index: u8,
}

/// INS (element): vector lane into a vector lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecInsElem {
    pub elem: FpSize,
    pub rd: u8,
    pub rn: u8,
    pub dst_index: u8,
    pub src_index: u8,
}

/// The closed enumeration of recognized A64 encodings.
///
/// Variant order follows the encoding-table order of the ISA groups:
/// data-processing immediate, branch/exception/system, loads/stores,
/// data-processing register, scalar FP, Advanced SIMD.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opcode {
    // Data-processing -- immediate.
    Adr(PcRelAddr),
    Adrp(PcRelAddr),
    AddImm(AddSubImm),
    AddsImm(AddSubImm),
    SubImm(AddSubImm),
    SubsImm(AddSubImm),
    AndImm(LogicalImm),
    OrrImm(LogicalImm),
    EorImm(LogicalImm),
    AndsImm(LogicalImm),
    Movn(MoveWide),
    Movz(MoveWide),
    Movk(MoveWide),
    Sbfm(Bitfield),
    Bfm(Bitfield),
    Ubfm(Bitfield),
    Extr(Extract),

    // Branches, exception generation, system.
    BCond(CondBranch),
    Svc(ExcGen),
    Hvc(ExcGen),
    Smc(ExcGen),
    Brk(ExcGen),
    Hlt(ExcGen),
    Dcps1(ExcGen),
    Dcps2(ExcGen),
    Dcps3(ExcGen),
    Nop,
    Yield,
    Wfe,
    Wfi,
    Sev,
    Sevl,
    Hint(Hint),
    Clrex(Barrier),
    Dsb(Barrier),
    Dmb(Barrier),
    Isb(Barrier),
    MsrImm(PState),
    Sys(SysOp),
    Sysl(SysOp),
    MsrReg(SysReg),
    Mrs(SysReg),
    Br(BranchReg),
    Blr(BranchReg),
    Ret(BranchReg),
    Eret,
    Drps,
    B(Branch26),
    Bl(Branch26),
    Cbz(CmpBranch),
    Cbnz(CmpBranch),
    Tbz(TestBranch),
    Tbnz(TestBranch),

    // Loads and stores.
    Stxr(StExcl),
    Ldxr(LdExcl),
    Stlxr(StExcl),
    Ldaxr(LdExcl),
    Stxp(StExclPair),
    Ldxp(LdExclPair),
    Stlxp(StExclPair),
    Ldaxp(LdExclPair),
    Stlr(LdStOrd),
    Ldar(LdStOrd),
    LdrLit(LdLit),
    LdrswLit(LdLit),
    PrfmLit(PrefetchLit),
    LdrLitFp(LdLitFp),
    Stnp(LdStPair),
    Ldnp(LdStPair),
    StnpFp(LdStFpPair),
    LdnpFp(LdStFpPair),
    Stp(LdStPair),
    Ldp(LdStPair),
    Ldpsw(LdStPair),
    StpFp(LdStFpPair),
    LdpFp(LdStFpPair),
    Strb(LdStImm),
    Ldrb(LdStImm),
    Ldrsb(LdStImm),
    Strh(LdStImm),
    Ldrh(LdStImm),
    Ldrsh(LdStImm),
    Str(LdStImm),
    Ldr(LdStImm),
    Ldrsw(LdStImm),
    Prfm(Prefetch),
    Sturb(LdStImm),
    Ldurb(LdStImm),
    Ldursb(LdStImm),
    Sturh(LdStImm),
    Ldurh(LdStImm),
    Ldursh(LdStImm),
    Stur(LdStImm),
    Ldur(LdStImm),
    Ldursw(LdStImm),
    Prfum(Prefetch),
    Sttrb(LdStImm),
    Ldtrb(LdStImm),
    Ldtrsb(LdStImm),
    Sttrh(LdStImm),
    Ldtrh(LdStImm),
    Ldtrsh(LdStImm),
    Sttr(LdStImm),
    Ldtr(LdStImm),
    Ldtrsw(LdStImm),
    StrbReg(LdStRegOff),
    LdrbReg(LdStRegOff),
    LdrsbReg(LdStRegOff),
    StrhReg(LdStRegOff),
    LdrhReg(LdStRegOff),
    LdrshReg(LdStRegOff),
    StrReg(LdStRegOff),
    LdrReg(LdStRegOff),
    LdrswReg(LdStRegOff),
    PrfmReg(PrefetchRegOff),
    StrFp(LdStFpImm),
    LdrFp(LdStFpImm),
    SturFp(LdStFpImm),
    LdurFp(LdStFpImm),
    StrFpReg(LdStFpRegOff),
    LdrFpReg(LdStFpRegOff),
    LdAdd(Atomic),
    LdClr(Atomic),
    LdEor(Atomic),
    LdSet(Atomic),
    LdSmax(Atomic),
    LdSmin(Atomic),
    LdUmax(Atomic),
    LdUmin(Atomic),
    Swp(Atomic),

    // Data-processing -- register.
    AndReg(ShiftedReg),
    BicReg(ShiftedReg),
    OrrReg(ShiftedReg),
    OrnReg(ShiftedReg),
    EorReg(ShiftedReg),
    EonReg(ShiftedReg),
    AndsReg(ShiftedReg),
    BicsReg(ShiftedReg),
    AddReg(ShiftedReg),
    AddsReg(ShiftedReg),
    SubReg(ShiftedReg),
    SubsReg(ShiftedReg),
    AddExt(ExtendedReg),
    AddsExt(ExtendedReg),
    SubExt(ExtendedReg),
    SubsExt(ExtendedReg),
    Adc(RegReg),
    Adcs(RegReg),
    Sbc(RegReg),
    Sbcs(RegReg),
    CcmnReg(CondCmpReg),
    CcmpReg(CondCmpReg),
    CcmnImm(CondCmpImm),
    CcmpImm(CondCmpImm),
    Csel(CondSel),
    Csinc(CondSel),
    Csinv(CondSel),
    Csneg(CondSel),
    Rbit(Reg2),
    Rev16(Reg2),
    Rev(Reg2),
    Rev32(Reg2),
    Clz(Reg2),
    Cls(Reg2),
    Udiv(RegReg),
    Sdiv(RegReg),
    Lslv(RegReg),
    Lsrv(RegReg),
    Asrv(RegReg),
    Rorv(RegReg),
    Crc32b(RegReg),
    Crc32h(RegReg),
    Crc32w(RegReg),
    Crc32x(RegReg),
    Crc32cb(RegReg),
    Crc32ch(RegReg),
    Crc32cw(RegReg),
    Crc32cx(RegReg),
    Madd(MulAdd),
    Msub(MulAdd),
    Smaddl(MulAdd),
    Smsubl(MulAdd),
    Smulh(RegReg),
    Umaddl(MulAdd),
    Umsubl(MulAdd),
    Umulh(RegReg),

    // Scalar floating point.
    Fcmp(FpCmp),
    FcmpZero(FpCmpZero),
    Fcmpe(FpCmp),
    FcmpeZero(FpCmpZero),
    FmovImm(FpMovImm),
    Fccmp(FpCondCmp),
    Fccmpe(FpCondCmp),
    Fcsel(FpCondSel),
    Fmul(FpReg3),
    Fdiv(FpReg3),
    Fadd(FpReg3),
    Fsub(FpReg3),
    Fmax(FpReg3),
    Fmin(FpReg3),
    Fmaxnm(FpReg3),
    Fminnm(FpReg3),
    Fnmul(FpReg3),
    Fmov(FpReg2),
    Fabs(FpReg2),
    Fneg(FpReg2),
    Fsqrt(FpReg2),
    Fcvt(FpCvtPrec),
    Frintn(FpReg2),
    Frintp(FpReg2),
    Frintm(FpReg2),
    Frintz(FpReg2),
    Frinta(FpReg2),
    Frintx(FpReg2),
    Frinti(FpReg2),
    Fcvtns(FpIntCvt),
    Fcvtnu(FpIntCvt),
    Scvtf(FpIntCvt),
    Ucvtf(FpIntCvt),
    Fcvtas(FpIntCvt),
    Fcvtau(FpIntCvt),
    FmovToGp(FpIntCvt),
    FmovFromGp(FpIntCvt),
    FmovToGpHi(FpIntCvt),
    FmovFromGpHi(FpIntCvt),
    Fcvtps(FpIntCvt),
    Fcvtpu(FpIntCvt),
    Fcvtms(FpIntCvt),
    Fcvtmu(FpIntCvt),
    Fcvtzs(FpIntCvt),
    Fcvtzu(FpIntCvt),
    Fmadd(FpReg4),
    Fmsub(FpReg4),
    Fnmadd(FpReg4),
    Fnmsub(FpReg4),

    // Advanced SIMD subset.
    AndVec(VecReg3),
    BicVec(VecReg3),
    OrrVec(VecReg3),
    OrnVec(VecReg3),
    EorVec(VecReg3),
    BslVec(VecReg3),
    BitVec(VecReg3),
    BifVec(VecReg3),
    AddVec(VecReg3),
    SubVec(VecReg3),
    CmeqVec(VecReg3),
    CmtstVec(VecReg3),
    MulVec(VecReg3),
    Movi(VecModImm),
    Mvni(VecModImm),
    OrrVecImm(VecModImm),
    BicVecImm(VecModImm),
    FmovVecImm(VecModImm),
    DupElem(VecDupElem),
    DupGp(VecDupGp),
    Smov(VecMovGp),
    Umov(VecMovGp),
    InsGp(VecInsGp),
    InsElem(VecInsElem),

    /// The word matched no defined, non-reserved encoding.
    Invalid,
}

impl Opcode {
    /// True unless this is the [`Opcode::Invalid`] tag.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Base mnemonic for this encoding. Aliases (MOV, CMP, TST, ...) are a
    /// formatting concern and are not resolved here.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adr(_) => "adr",
            Self::Adrp(_) => "adrp",
            Self::AddImm(_) => "add",
            Self::AddsImm(_) => "adds",
            Self::SubImm(_) => "sub",
            Self::SubsImm(_) => "subs",
            Self::AndImm(_) => "and",
            Self::OrrImm(_) => "orr",
            Self::EorImm(_) => "eor",
            Self::AndsImm(_) => "ands",
            Self::Movn(_) => "movn",
            Self::Movz(_) => "movz",
            Self::Movk(_) => "movk",
            Self::Sbfm(_) => "sbfm",
            Self::Bfm(_) => "bfm",
            Self::Ubfm(_) => "ubfm",
            Self::Extr(_) => "extr",
            Self::BCond(_) => "b.cond",
            Self::Svc(_) => "svc",
            Self::Hvc(_) => "hvc",
            Self::Smc(_) => "smc",
            Self::Brk(_) => "brk",
            Self::Hlt(_) => "hlt",
            Self::Dcps1(_) => "dcps1",
            Self::Dcps2(_) => "dcps2",
            Self::Dcps3(_) => "dcps3",
            Self::Nop => "nop",
            Self::Yield => "yield",
            Self::Wfe => "wfe",
            Self::Wfi => "wfi",
            Self::Sev => "sev",
            Self::Sevl => "sevl",
            Self::Hint(_) => "hint",
            Self::Clrex(_) => "clrex",
            Self::Dsb(_) => "dsb",
            Self::Dmb(_) => "dmb",
            Self::Isb(_) => "isb",
            Self::MsrImm(_) => "msr",
            Self::Sys(_) => "sys",
            Self::Sysl(_) => "sysl",
            Self::MsrReg(_) => "msr",
            Self::Mrs(_) => "mrs",
            Self::Br(_) => "br",
            Self::Blr(_) => "blr",
            Self::Ret(_) => "ret",
            Self::Eret => "eret",
            Self::Drps => "drps",
            Self::B(_) => "b",
            Self::Bl(_) => "bl",
            Self::Cbz(_) => "cbz",
            Self::Cbnz(_) => "cbnz",
            Self::Tbz(_) => "tbz",
            Self::Tbnz(_) => "tbnz",
            Self::Stxr(_) => "stxr",
            Self::Ldxr(_) => "ldxr",
            Self::Stlxr(_) => "stlxr",
            Self::Ldaxr(_) => "ldaxr",
            Self::Stxp(_) => "stxp",
            Self::Ldxp(_) => "ldxp",
            Self::Stlxp(_) => "stlxp",
            Self::Ldaxp(_) => "ldaxp",
            Self::Stlr(_) => "stlr",
            Self::Ldar(_) => "ldar",
            Self::LdrLit(_) => "ldr",
            Self::LdrswLit(_) => "ldrsw",
            Self::PrfmLit(_) => "prfm",
            Self::LdrLitFp(_) => "ldr",
            Self::Stnp(_) => "stnp",
            Self::Ldnp(_) => "ldnp",
            Self::StnpFp(_) => "stnp",
            Self::LdnpFp(_) => "ldnp",
            Self::Stp(_) => "stp",
            Self::Ldp(_) => "ldp",
            Self::Ldpsw(_) => "ldpsw",
            Self::StpFp(_) => "stp",
            Self::LdpFp(_) => "ldp",
            Self::Strb(_) => "strb",
            Self::Ldrb(_) => "ldrb",
            Self::Ldrsb(_) => "ldrsb",
            Self::Strh(_) => "strh",
            Self::Ldrh(_) => "ldrh",
            Self::Ldrsh(_) => "ldrsh",
            Self::Str(_) => "str",
            Self::Ldr(_) => "ldr",
            Self::Ldrsw(_) => "ldrsw",
            Self::Prfm(_) => "prfm",
            Self::Sturb(_) => "sturb",
            Self::Ldurb(_) => "ldurb",
            Self::Ldursb(_) => "ldursb",
            Self::Sturh(_) => "sturh",
            Self::Ldurh(_) => "ldurh",
            Self::Ldursh(_) => "ldursh",
            Self::Stur(_) => "stur",
            Self::Ldur(_) => "ldur",
            Self::Ldursw(_) => "ldursw",
            Self::Prfum(_) => "prfum",
            Self::Sttrb(_) => "sttrb",
            Self::Ldtrb(_) => "ldtrb",
            Self::Ldtrsb(_) => "ldtrsb",
            Self::Sttrh(_) => "sttrh",
            Self::Ldtrh(_) => "ldtrh",
            Self::Ldtrsh(_) => "ldtrsh",
            Self::Sttr(_) => "sttr",
            Self::Ldtr(_) => "ldtr",
            Self::Ldtrsw(_) => "ldtrsw",
            Self::StrbReg(_) => "strb",
            Self::LdrbReg(_) => "ldrb",
            Self::LdrsbReg(_) => "ldrsb",
            Self::StrhReg(_) => "strh",
            Self::LdrhReg(_) => "ldrh",
            Self::LdrshReg(_) => "ldrsh",
            Self::StrReg(_) => "str",
            Self::LdrReg(_) => "ldr",
            Self::LdrswReg(_) => "ldrsw",
            Self::PrfmReg(_) => "prfm",
            Self::StrFp(_) => "str",
            Self::LdrFp(_) => "ldr",
            Self::SturFp(_) => "stur",
            Self::LdurFp(_) => "ldur",
            Self::StrFpReg(_) => "str",
            Self::LdrFpReg(_) => "ldr",
            Self::LdAdd(_) => "ldadd",
            Self::LdClr(_) => "ldclr",
            Self::LdEor(_) => "ldeor",
            Self::LdSet(_) => "ldset",
            Self::LdSmax(_) => "ldsmax",
            Self::LdSmin(_) => "ldsmin",
            Self::LdUmax(_) => "ldumax",
            Self::LdUmin(_) => "ldumin",
            Self::Swp(_) => "swp",
            Self::AndReg(_) => "and",
            Self::BicReg(_) => "bic",
            Self::OrrReg(_) => "orr",
            Self::OrnReg(_) => "orn",
            Self::EorReg(_) => "eor",
            Self::EonReg(_) => "eon",
            Self::AndsReg(_) => "ands",
            Self::BicsReg(_) => "bics",
            Self::AddReg(_) => "add",
            Self::AddsReg(_) => "adds",
            Self::SubReg(_) => "sub",
            Self::SubsReg(_) => "subs",
            Self::AddExt(_) => "add",
            Self::AddsExt(_) => "adds",
            Self::SubExt(_) => "sub",
            Self::SubsExt(_) => "subs",
            Self::Adc(_) => "adc",
            Self::Adcs(_) => "adcs",
            Self::Sbc(_) => "sbc",
            Self::Sbcs(_) => "sbcs",
            Self::CcmnReg(_) => "ccmn",
            Self::CcmpReg(_) => "ccmp",
            Self::CcmnImm(_) => "ccmn",
            Self::CcmpImm(_) => "ccmp",
            Self::Csel(_) => "csel",
            Self::Csinc(_) => "csinc",
            Self::Csinv(_) => "csinv",
            Self::Csneg(_) => "csneg",
            Self::Rbit(_) => "rbit",
            Self::Rev16(_) => "rev16",
            Self::Rev(_) => "rev",
            Self::Rev32(_) => "rev32",
            Self::Clz(_) => "clz",
            Self::Cls(_) => "cls",
            Self::Udiv(_) => "udiv",
            Self::Sdiv(_) => "sdiv",
            Self::Lslv(_) => "lslv",
            Self::Lsrv(_) => "lsrv",
            Self::Asrv(_) => "asrv",
            Self::Rorv(_) => "rorv",
            Self::Crc32b(_) => "crc32b",
            Self::Crc32h(_) => "crc32h",
            Self::Crc32w(_) => "crc32w",
            Self::Crc32x(_) => "crc32x",
            Self::Crc32cb(_) => "crc32cb",
            Self::Crc32ch(_) => "crc32ch",
            Self::Crc32cw(_) => "crc32cw",
            Self::Crc32cx(_) => "crc32cx",
            Self::Madd(_) => "madd",
            Self::Msub(_) => "msub",
            Self::Smaddl(_) => "smaddl",
            Self::Smsubl(_) => "smsubl",
            Self::Smulh(_) => "smulh",
            Self::Umaddl(_) => "umaddl",
            Self::Umsubl(_) => "umsubl",
            Self::Umulh(_) => "umulh",
            Self::Fcmp(_) => "fcmp",
            Self::FcmpZero(_) => "fcmp",
            Self::Fcmpe(_) => "fcmpe",
            Self::FcmpeZero(_) => "fcmpe",
            Self::FmovImm(_) => "fmov",
            Self::Fccmp(_) => "fccmp",
            Self::Fccmpe(_) => "fccmpe",
            Self::Fcsel(_) => "fcsel",
            Self::Fmul(_) => "fmul",
            Self::Fdiv(_) => "fdiv",
            Self::Fadd(_) => "fadd",
            Self::Fsub(_) => "fsub",
            Self::Fmax(_) => "fmax",
            Self::Fmin(_) => "fmin",
            Self::Fmaxnm(_) => "fmaxnm",
            Self::Fminnm(_) => "fminnm",
            Self::Fnmul(_) => "fnmul",
            Self::Fmov(_) => "fmov",
            Self::Fabs(_) => "fabs",
            Self::Fneg(_) => "fneg",
            Self::Fsqrt(_) => "fsqrt",
            Self::Fcvt(_) => "fcvt",
            Self::Frintn(_) => "frintn",
            Self::Frintp(_) => "frintp",
            Self::Frintm(_) => "frintm",
            Self::Frintz(_) => "frintz",
            Self::Frinta(_) => "frinta",
            Self::Frintx(_) => "frintx",
            Self::Frinti(_) => "frinti",
            Self::Fcvtns(_) => "fcvtns",
            Self::Fcvtnu(_) => "fcvtnu",
            Self::Scvtf(_) => "scvtf",
            Self::Ucvtf(_) => "ucvtf",
            Self::Fcvtas(_) => "fcvtas",
            Self::Fcvtau(_) => "fcvtau",
            Self::FmovToGp(_) => "fmov",
            Self::FmovFromGp(_) => "fmov",
            Self::FmovToGpHi(_) => "fmov",
            Self::FmovFromGpHi(_) => "fmov",
            Self::Fcvtps(_) => "fcvtps",
            Self::Fcvtpu(_) => "fcvtpu",
            Self::Fcvtms(_) => "fcvtms",
            Self::Fcvtmu(_) => "fcvtmu",
            Self::Fcvtzs(_) => "fcvtzs",
            Self::Fcvtzu(_) => "fcvtzu",
            Self::Fmadd(_) => "fmadd",
            Self::Fmsub(_) => "fmsub",
            Self::Fnmadd(_) => "fnmadd",
            Self::Fnmsub(_) => "fnmsub",
            Self::AndVec(_) => "and",
            Self::BicVec(_) => "bic",
            Self::OrrVec(_) => "orr",
            Self::OrnVec(_) => "orn",
            Self::EorVec(_) => "eor",
            Self::BslVec(_) => "bsl",
            Self::BitVec(_) => "bit",
            Self::BifVec(_) => "bif",
            Self::AddVec(_) => "add",
            Self::SubVec(_) => "sub",
            Self::CmeqVec(_) => "cmeq",
            Self::CmtstVec(_) => "cmtst",
            Self::MulVec(_) => "mul",
            Self::Movi(_) => "movi",
            Self::Mvni(_) => "mvni",
            Self::OrrVecImm(_) => "orr",
            Self::BicVecImm(_) => "bic",
            Self::FmovVecImm(_) => "fmov",
            Self::DupElem(_) => "dup",
            Self::DupGp(_) => "dup",
            Self::Smov(_) => "smov",
            Self::Umov(_) => "umov",
            Self::InsGp(_) => "ins",
            Self::InsElem(_) => "ins",
            Self::Invalid => "invalid",
        }
    }
}

/// One decoded instruction word.
///
/// Created fresh per decode call and never mutated afterwards; the decoder
/// holds no state, so two calls on the same `(pc, word)` produce equal
/// records.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insn {
    /// Program counter the word was decoded at.
    pub pc: u64,
    /// The raw instruction word.
    pub word: u32,
    /// Classification plus operand payload; `Opcode::Invalid` if the word
    /// matched no defined encoding.
    pub opcode: Opcode,
}

impl Insn {
    /// Creates a decode record.
    pub fn new(pc: u64, word: u32, opcode: Opcode) -> Self {
        Self { pc, word, opcode }
    }

    /// Creates the invalid record for an unrecognized word.
    pub fn invalid(pc: u64, word: u32) -> Self {
        Self::new(pc, word, Opcode::Invalid)
    }

    /// The validity verdict: true iff the word matched a defined,
    /// non-reserved encoding.
    pub fn is_valid(&self) -> bool {
        self.opcode.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_record_is_invalid() {
        let insn = Insn::invalid(0x1000, 0);
        assert!(!insn.is_valid());
        assert_eq!(insn.opcode, Opcode::Invalid);
        assert_eq!(insn.opcode.name(), "invalid");
    }

    #[test]
    fn valid_record_carries_payload() {
        let insn = Insn::new(
            0,
            0x1100_0000,
            Opcode::AddImm(AddSubImm {
                size: RegSize::W,
                rd: 0,
                rn: 0,
                imm: 0,
            }),
        );
        assert!(insn.is_valid());
        match insn.opcode {
            Opcode::AddImm(f) => assert_eq!(f.imm, 0),
            other => panic!("unexpected opcode {other:?}"),
        }
    }
}
