//! Arithmetic operation lowering
//!
//! Add, sub, mul and div pick the integer or floating form by type. Modulo
//! is integer only and goes through a fixed scratch register for the
//! quotient; that register is not reserved from the naming policy.

use super::InstrContext;
use crate::naming::register_for;
use eir_codegen::{AsmInst, CallingConvention, Reg};
use eir_common::CompilerError;
use eir_frontend::{BinaryOp, Instruction};
use log::trace;

/// Lower `%D = OP TYPE %S1 %S2`
pub fn lower_arithmetic(
    ctx: &InstrContext,
    inst: &Instruction,
    op: BinaryOp,
) -> Result<Vec<AsmInst>, CompilerError> {
    let (Some(dst), Some(lhs), Some(rhs)) = (inst.dst, inst.src(0), inst.src(1)) else {
        return ctx.unhandled(inst, "arithmetic with missing operands");
    };
    let d = register_for(Some(dst), inst.ty);
    let s1 = register_for(Some(lhs), inst.ty);
    let s2 = register_for(Some(rhs), inst.ty);
    trace!("  {op} {d}, {s1}, {s2}");

    let float = inst.ty.is_float();
    let asm = match op {
        BinaryOp::Add if float => AsmInst::FAdd(d, s1, s2),
        BinaryOp::Sub if float => AsmInst::FSub(d, s1, s2),
        BinaryOp::Mul if float => AsmInst::FMul(d, s1, s2),
        BinaryOp::Div if float => AsmInst::FDiv(d, s1, s2),
        BinaryOp::Add => AsmInst::Add(d, s1, s2),
        BinaryOp::Sub => AsmInst::Sub(d, s1, s2),
        BinaryOp::Mul => AsmInst::Mul(d, s1, s2),
        BinaryOp::Div => AsmInst::SDiv(d, s1, s2),
        BinaryOp::Mod => return lower_mod(ctx, inst),
    };
    Ok(vec![asm])
}

/// Lower `%D = mod TYPE %S1 %S2` as `D = S1 - (S1 / S2) * S2`
pub fn lower_mod(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    if inst.ty.is_float() {
        return ctx.unhandled(inst, "modulo of a floating type");
    }
    let (Some(dst), Some(lhs), Some(rhs)) = (inst.dst, inst.src(0), inst.src(1)) else {
        return ctx.unhandled(inst, "modulo with missing operands");
    };
    let d = register_for(Some(dst), inst.ty);
    let s1 = register_for(Some(lhs), inst.ty);
    let s2 = register_for(Some(rhs), inst.ty);
    let quotient = match d {
        Reg::X(_) => CallingConvention::LINK_REG,
        _ => CallingConvention::SCRATCH,
    };

    Ok(vec![
        AsmInst::SDiv(quotient, s1, s2),
        AsmInst::MSub(d, quotient, s2, s1),
    ])
}
