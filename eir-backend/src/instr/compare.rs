//! Comparison lowering

use super::InstrContext;
use crate::naming::register_for;
use eir_codegen::{AsmInst, Cond};
use eir_common::{CompilerError, ValueType};
use eir_frontend::{CompareKind, Instruction};
use log::trace;

/// Condition mnemonic for a comparison kind
pub fn condition_for(kind: CompareKind) -> Cond {
    match kind {
        CompareKind::Gt => Cond::Gt,
        CompareKind::Lt => Cond::Lt,
        CompareKind::Eq => Cond::Eq,
        CompareKind::Ge => Cond::Ge,
        CompareKind::Le => Cond::Le,
        CompareKind::Ne => Cond::Ne,
    }
}

/// Lower `%D = CMP TYPE %S1 %S2` into a flag-setting compare and a `cset`
///
/// The operands keep their typed names; the 0/1 result always lands in the
/// 32-bit general register for the destination.
pub fn lower_compare(
    ctx: &InstrContext,
    inst: &Instruction,
    kind: CompareKind,
) -> Result<Vec<AsmInst>, CompilerError> {
    let (Some(dst), Some(lhs), Some(rhs)) = (inst.dst, inst.src(0), inst.src(1)) else {
        return ctx.unhandled(inst, "comparison with missing operands");
    };
    let s1 = register_for(Some(lhs), inst.ty);
    let s2 = register_for(Some(rhs), inst.ty);
    let d = register_for(Some(dst), ValueType::Bool);
    let cond = condition_for(kind);
    trace!("  {kind} {s1}, {s2} -> {d} ({cond})");

    let cmp = if inst.ty.is_float() {
        AsmInst::FCmp(s1, s2)
    } else {
        AsmInst::Cmp(s1, s2)
    };
    Ok(vec![cmp, AsmInst::CSet(d, cond)])
}
