//! Control flow lowering: labels, jumps and returns

use super::InstrContext;
use crate::naming::register_for;
use eir_codegen::{AsmInst, CallingConvention};
use eir_common::{CompilerError, ValueType};
use eir_frontend::Instruction;
use log::trace;

/// Lower `NAME:`
pub fn lower_label(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    match inst.label_name() {
        Some(name) => Ok(vec![AsmInst::Label(name.to_string())]),
        None => ctx.unhandled(inst, "label without a name"),
    }
}

/// Lower `goto LABEL`
pub fn lower_goto(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    match inst.label_name() {
        Some(target) => Ok(vec![AsmInst::B(target.to_string())]),
        None => ctx.unhandled(inst, "jump without a target"),
    }
}

/// Lower `if_goto %S LABEL`
///
/// Branches when the condition is nonzero. The condition is read through
/// its 32-bit general register whatever its declared type.
pub fn lower_if_goto(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    let (Some(cond), Some(target)) = (inst.src(0), inst.label_name()) else {
        return ctx.unhandled(inst, "conditional jump without condition or target");
    };
    let reg = register_for(Some(cond), ValueType::I32);
    trace!("  cbnz {reg} -> {target}");
    Ok(vec![AsmInst::Cbnz(reg, target.to_string())])
}

/// Lower `ret [%S]`: move the value into the result register, then tear
/// down the frame and return
pub fn lower_ret(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    let mut insts = Vec::new();

    if let Some(value) = inst.src(0) {
        let src = register_for(Some(value), inst.ty);
        let result = CallingConvention::return_reg(inst.ty);
        if inst.ty.is_float() {
            insts.push(AsmInst::FMov(result, src));
        } else {
            insts.push(AsmInst::Mov(result, src));
        }
    }

    insts.extend(ctx.frame.gen_epilogue());
    Ok(insts)
}
