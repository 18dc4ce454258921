//! Instruction dispatch
//!
//! Routes each IR instruction kind to its lowering. The match is exhaustive;
//! `Unknown` is the only kind with no lowering.

use crate::instr::{
    lower_arithmetic, lower_call, lower_compare, lower_const, lower_goto, lower_if_goto,
    lower_label, lower_puts, lower_ret, InstrContext,
};
use eir_codegen::AsmInst;
use eir_common::CompilerError;
use eir_frontend::{InstrKind, Instruction};
use log::debug;

/// Lower a single IR instruction
pub fn lower_instruction(ctx: &InstrContext, inst: &Instruction) -> Result<Vec<AsmInst>, CompilerError> {
    debug!("{}: lowering `{}`", ctx.function, inst);

    let mut insts = Vec::new();
    if ctx.options.annotate {
        insts.push(AsmInst::Comment(inst.to_string()));
    }

    let lowered = match inst.kind {
        InstrKind::Const => lower_const(ctx, inst)?,
        InstrKind::Binary(op) => lower_arithmetic(ctx, inst, op)?,
        InstrKind::Compare(kind) => lower_compare(ctx, inst, kind)?,
        InstrKind::Goto => lower_goto(ctx, inst)?,
        InstrKind::IfGoto => lower_if_goto(ctx, inst)?,
        InstrKind::Call => lower_call(ctx, inst)?,
        InstrKind::Puts => lower_puts(ctx, inst)?,
        InstrKind::Label => lower_label(ctx, inst)?,
        InstrKind::Ret => lower_ret(ctx, inst)?,
        InstrKind::Unknown => ctx.unhandled(inst, "unrecognized instruction")?,
    };
    insts.extend(lowered);
    Ok(insts)
}
