//! AArch64 Assembly Instruction Definitions
//!
//! This module defines the register model, condition codes and the subset of
//! the A64 instruction set (plus assembler directives) that code generation
//! produces.

use std::fmt;

/// AArch64 register names
///
/// The same physical register has a different name per access width:
/// - W0-W30: 32-bit view of the general purpose registers
/// - X0-X30: 64-bit view of the general purpose registers
/// - S0-S31: single precision floating point
/// - D0-D31: double precision floating point
/// - SP: stack pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    W(u8),
    X(u8),
    S(u8),
    D(u8),
    Sp,
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::W(n) => write!(f, "w{n}"),
            Reg::X(n) => write!(f, "x{n}"),
            Reg::S(n) => write!(f, "s{n}"),
            Reg::D(n) => write!(f, "d{n}"),
            Reg::Sp => write!(f, "sp"),
        }
    }
}

/// Condition mnemonics used by `cset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cond {
    Gt,
    Lt,
    Eq,
    Ge,
    Le,
    Ne,
    /// Always
    Al,
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cond = match self {
            Cond::Gt => "gt",
            Cond::Lt => "lt",
            Cond::Eq => "eq",
            Cond::Ge => "ge",
            Cond::Le => "le",
            Cond::Ne => "ne",
            Cond::Al => "al",
        };
        write!(f, "{cond}")
    }
}

/// Output sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Data,
    Text,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Data => write!(f, ".data"),
            Section::Text => write!(f, ".text"),
        }
    }
}

/// AArch64 assembly items
///
/// Machine instructions first, then labels, comments and directives.
#[derive(Debug, Clone, PartialEq)]
pub enum AsmInst {
    // Moves
    Mov(Reg, Reg),                // rd = rn
    MovImm(Reg, i64),             // rd = #imm
    FMov(Reg, Reg),               // rd = rn (bit copy across register files)

    // Integer arithmetic
    Add(Reg, Reg, Reg),           // rd = rn + rm
    Sub(Reg, Reg, Reg),           // rd = rn - rm
    Mul(Reg, Reg, Reg),           // rd = rn * rm
    SDiv(Reg, Reg, Reg),          // rd = rn / rm (signed)
    MSub(Reg, Reg, Reg, Reg),     // rd = ra - rn * rm

    // Floating point arithmetic
    FAdd(Reg, Reg, Reg),
    FSub(Reg, Reg, Reg),
    FMul(Reg, Reg, Reg),
    FDiv(Reg, Reg, Reg),

    // Comparison
    Cmp(Reg, Reg),
    FCmp(Reg, Reg),
    CSet(Reg, Cond),              // rd = cond ? 1 : 0

    // Control flow
    B(String),
    Cbnz(Reg, String),
    Bl(String),
    Ret,

    // Addressing
    Adrp(Reg, String),            // rd = page of symbol
    AddLo12(Reg, Reg, String),    // rd = rn + low 12 bits of symbol

    // Frame
    StpPre(Reg, Reg, Reg, i32),   // stp rt1, rt2, [rn, #off]!
    LdpPost(Reg, Reg, Reg, i32),  // ldp rt1, rt2, [rn], #off

    // Pseudo
    Label(String),
    Comment(String),
    Section(Section),
    Align(u32),
    Global(String),
    Asciz { label: String, value: String },
}

impl AsmInst {
    /// Whether the item is written indented inside a function body
    pub fn is_indented(&self) -> bool {
        !matches!(
            self,
            AsmInst::Label(_)
                | AsmInst::Section(_)
                | AsmInst::Align(_)
                | AsmInst::Global(_)
                | AsmInst::Asciz { .. }
        )
    }
}

impl fmt::Display for AsmInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Moves
            AsmInst::Mov(rd, rn) => write!(f, "mov {}, {}", rd, rn),
            AsmInst::MovImm(rd, imm) => write!(f, "mov {}, #{}", rd, imm),
            AsmInst::FMov(rd, rn) => write!(f, "fmov {}, {}", rd, rn),

            // Integer arithmetic
            AsmInst::Add(rd, rn, rm) => write!(f, "add {}, {}, {}", rd, rn, rm),
            AsmInst::Sub(rd, rn, rm) => write!(f, "sub {}, {}, {}", rd, rn, rm),
            AsmInst::Mul(rd, rn, rm) => write!(f, "mul {}, {}, {}", rd, rn, rm),
            AsmInst::SDiv(rd, rn, rm) => write!(f, "sdiv {}, {}, {}", rd, rn, rm),
            AsmInst::MSub(rd, rn, rm, ra) => write!(f, "msub {}, {}, {}, {}", rd, rn, rm, ra),

            // Floating point
            AsmInst::FAdd(rd, rn, rm) => write!(f, "fadd {}, {}, {}", rd, rn, rm),
            AsmInst::FSub(rd, rn, rm) => write!(f, "fsub {}, {}, {}", rd, rn, rm),
            AsmInst::FMul(rd, rn, rm) => write!(f, "fmul {}, {}, {}", rd, rn, rm),
            AsmInst::FDiv(rd, rn, rm) => write!(f, "fdiv {}, {}, {}", rd, rn, rm),

            // Comparison
            AsmInst::Cmp(rn, rm) => write!(f, "cmp {}, {}", rn, rm),
            AsmInst::FCmp(rn, rm) => write!(f, "fcmp {}, {}", rn, rm),
            AsmInst::CSet(rd, cond) => write!(f, "cset {}, {}", rd, cond),

            // Control flow
            AsmInst::B(label) => write!(f, "b {}", label),
            AsmInst::Cbnz(rt, label) => write!(f, "cbnz {}, {}", rt, label),
            AsmInst::Bl(label) => write!(f, "bl {}", label),
            AsmInst::Ret => write!(f, "ret"),

            // Addressing
            AsmInst::Adrp(rd, symbol) => write!(f, "adrp {}, {}", rd, symbol),
            AsmInst::AddLo12(rd, rn, symbol) => write!(f, "add {}, {}, :lo12:{}", rd, rn, symbol),

            // Frame
            AsmInst::StpPre(rt1, rt2, rn, off) => write!(f, "stp {}, {}, [{}, #{}]!", rt1, rt2, rn, off),
            AsmInst::LdpPost(rt1, rt2, rn, off) => write!(f, "ldp {}, {}, [{}], #{}", rt1, rt2, rn, off),

            // Pseudo
            AsmInst::Label(label) => write!(f, "{}:", label),
            AsmInst::Comment(text) => write!(f, "// {}", text),
            AsmInst::Section(section) => write!(f, "{}", section),
            AsmInst::Align(n) => write!(f, ".align {}", n),
            AsmInst::Global(name) => write!(f, ".global {}", name),
            AsmInst::Asciz { label, value } => write!(f, "{}: .asciz \"{}\"", label, value),
        }
    }
}
