//! Call lowering
//!
//! Arguments are always passed through the 32-bit general argument
//! registers, whatever their actual type.

use super::InstrContext;
use crate::naming::register_for;
use eir_codegen::{AsmInst, CallingConvention};
use eir_common::{CompilerError, ValueType};
use eir_frontend::Instruction;
use log::{debug, trace};

/// C library routine used by `puts @NAME`
pub const PUTS_SYMBOL: &str = "puts";

/// Lower `[%D =] call @NAME(%A1, ...)`
pub fn lower_call(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    let Some(target) = inst.label_name() else {
        return ctx.unhandled(inst, "call without a target");
    };
    debug!("lower_call: {target} with {} args", inst.srcs.len());

    let mut insts = Vec::new();
    for (index, &arg) in inst.srcs.iter().enumerate() {
        let arg_reg = match CallingConvention::arg_reg(index) {
            Ok(reg) => reg,
            Err(e) => return ctx.unhandled(inst, &e.to_string()),
        };
        insts.push(AsmInst::Mov(arg_reg, register_for(Some(arg), ValueType::I32)));
    }
    insts.push(AsmInst::Bl(target.to_string()));

    if let Some(dst) = inst.dst {
        let d = register_for(Some(dst), inst.ty);
        let result = CallingConvention::return_reg(inst.ty);
        trace!("  result {result} -> {d}");
        if inst.ty.is_float() {
            insts.push(AsmInst::FMov(d, result));
        } else {
            insts.push(AsmInst::Mov(d, result));
        }
    }
    Ok(insts)
}

/// Lower `puts @NAME`: load the global's address into the first argument
/// register and call the C library
pub fn lower_puts(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    let Some(name) = inst.label_name() else {
        return ctx.unhandled(inst, "puts without a global");
    };
    let addr = CallingConvention::ADDR_ARG;
    Ok(vec![
        AsmInst::Adrp(addr, name.to_string()),
        AsmInst::AddLo12(addr, addr, name.to_string()),
        AsmInst::Bl(PUTS_SYMBOL.to_string()),
    ])
}
