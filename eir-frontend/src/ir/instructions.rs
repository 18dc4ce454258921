//! IR Instructions
//!
//! Defines all instruction kinds available in the IR and the instruction
//! record itself. Optional fields are `Option`s, so an absent register or
//! label can never be mistaken for register 0 or an empty name.

use eir_common::{ValueType, VReg, MAX_OPERANDS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Integer only remainder
    Mod,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Mod => "mod",
        };
        write!(f, "{op_str}")
    }
}

/// Comparison kinds, each producing a 0/1 boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareKind {
    Gt,
    Lt,
    Eq,
    Ge,
    Le,
    Ne,
}

impl fmt::Display for CompareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            CompareKind::Gt => "gt",
            CompareKind::Lt => "lt",
            CompareKind::Eq => "eq",
            CompareKind::Ge => "ge",
            CompareKind::Le => "le",
            CompareKind::Ne => "ne",
        };
        write!(f, "{op_str}")
    }
}

/// What an instruction does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrKind {
    /// `%D = const TYPE VALUE`
    Const,
    /// `%D = OP TYPE %S1 %S2`
    Binary(BinaryOp),
    /// `%D = CMP TYPE %S1 %S2`
    Compare(CompareKind),
    /// `puts @NAME`
    Puts,
    /// `ret [%S]`
    Ret,
    /// `NAME:`
    Label,
    /// `goto LABEL`
    Goto,
    /// `if_goto %S LABEL`
    IfGoto,
    /// `[%D =] call @NAME(ARGS)`
    Call,
    /// A line that yielded fields but no recognized operation.
    /// Code generation emits nothing for it.
    Unknown,
}

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstrKind,
    pub dst: Option<VReg>,
    /// Present source operands in order, at most `MAX_OPERANDS`
    pub srcs: Vec<VReg>,
    /// Immediate payload, only meaningful for `Const`
    pub imm: i64,
    pub ty: ValueType,
    /// Branch target, call target, print target or a label's own name
    pub label: Option<String>,
}

impl Instruction {
    /// Create an instruction of the given kind with every field absent
    pub fn new(kind: InstrKind) -> Self {
        Self {
            kind,
            dst: None,
            srcs: Vec::new(),
            imm: 0,
            ty: ValueType::I32,
            label: None,
        }
    }

    pub fn constant(dst: VReg, ty: ValueType, imm: i64) -> Self {
        Self {
            dst: Some(dst),
            ty,
            imm,
            ..Self::new(InstrKind::Const)
        }
    }

    pub fn binary(op: BinaryOp, ty: ValueType, dst: VReg, lhs: VReg, rhs: VReg) -> Self {
        Self {
            dst: Some(dst),
            srcs: vec![lhs, rhs],
            ty,
            ..Self::new(InstrKind::Binary(op))
        }
    }

    pub fn compare(kind: CompareKind, ty: ValueType, dst: VReg, lhs: VReg, rhs: VReg) -> Self {
        Self {
            dst: Some(dst),
            srcs: vec![lhs, rhs],
            ty,
            ..Self::new(InstrKind::Compare(kind))
        }
    }

    pub fn goto(label: &str) -> Self {
        Self::new(InstrKind::Goto).with_label(label)
    }

    pub fn if_goto(cond: VReg, label: &str) -> Self {
        Self {
            srcs: vec![cond],
            ..Self::new(InstrKind::IfGoto).with_label(label)
        }
    }

    pub fn call(dst: Option<VReg>, target: &str, args: &[VReg]) -> Self {
        Self {
            dst,
            srcs: args.iter().copied().take(MAX_OPERANDS).collect(),
            ..Self::new(InstrKind::Call).with_label(target)
        }
    }

    pub fn puts(global: &str) -> Self {
        Self::new(InstrKind::Puts).with_label(global)
    }

    pub fn label(name: &str) -> Self {
        Self::new(InstrKind::Label).with_label(name)
    }

    pub fn ret(value: Option<VReg>) -> Self {
        Self {
            srcs: value.into_iter().collect(),
            ..Self::new(InstrKind::Ret)
        }
    }

    /// Set the label, leaving it absent when `label` is empty
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = if label.is_empty() { None } else { Some(label.to_string()) };
        self
    }

    /// Source operand at `index`, if present
    pub fn src(&self, index: usize) -> Option<VReg> {
        self.srcs.get(index).copied()
    }

    /// Label as a string slice, if present
    pub fn label_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the parser keeps this instruction: it must carry a
    /// recognized kind, a destination or a label.
    pub fn is_retained(&self) -> bool {
        self.kind != InstrKind::Unknown || self.dst.is_some() || self.label.is_some()
    }
}

struct RegText(Option<VReg>);

impl fmt::Display for RegText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(reg) => write!(f, "%{reg}"),
            None => write!(f, "%?"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dst = RegText(self.dst);
        let label = self.label_name().unwrap_or("?");
        match self.kind {
            InstrKind::Const => write!(f, "{dst} = const {} {}", self.ty, self.imm),
            InstrKind::Binary(op) => {
                write!(f, "{dst} = {op} {} {} {}", self.ty, RegText(self.src(0)), RegText(self.src(1)))
            }
            InstrKind::Compare(kind) => {
                write!(f, "{dst} = {kind} {} {} {}", self.ty, RegText(self.src(0)), RegText(self.src(1)))
            }
            InstrKind::Puts => write!(f, "puts @{label}"),
            InstrKind::Ret => match self.src(0) {
                Some(value) => write!(f, "ret %{value}"),
                None => write!(f, "ret"),
            },
            InstrKind::Label => write!(f, "{label}:"),
            InstrKind::Goto => write!(f, "goto {label}"),
            InstrKind::IfGoto => write!(f, "if_goto {} {label}", RegText(self.src(0))),
            InstrKind::Call => {
                if self.dst.is_some() {
                    write!(f, "{dst} = ")?;
                }
                write!(f, "call @{label}(")?;
                for (i, arg) in self.srcs.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "%{arg}")?;
                }
                write!(f, ")")
            }
            InstrKind::Unknown => {
                write!(f, "; unrecognized")?;
                if self.dst.is_some() {
                    write!(f, " {dst}")?;
                }
                for src in &self.srcs {
                    write!(f, " %{src}")?;
                }
                if let Some(label) = &self.label {
                    write!(f, " {label}")?;
                }
                Ok(())
            }
        }
    }
}
