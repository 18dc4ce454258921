//! Constant loading

use super::InstrContext;
use crate::naming::register_for;
use eir_codegen::{AsmInst, CallingConvention};
use eir_common::CompilerError;
use eir_frontend::Instruction;
use log::trace;

/// Lower `%D = const TYPE VALUE`
///
/// Integers move the immediate straight into the destination. Floats have
/// no literal pool: the (already truncated) integer goes through a general
/// scratch register and its bits are copied into the float register, so
/// `const f64 3.0` does not produce 3.0.
pub fn lower_const(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    let Some(dst) = inst.dst else {
        return ctx.unhandled(inst, "constant without destination");
    };
    let d = register_for(Some(dst), inst.ty);
    trace!("  const {} -> {d}", inst.imm);

    if inst.ty.is_float() {
        let scratch = CallingConvention::float_scratch(inst.ty);
        Ok(vec![AsmInst::MovImm(scratch, inst.imm), AsmInst::FMov(d, scratch)])
    } else {
        Ok(vec![AsmInst::MovImm(d, inst.imm)])
    }
}
