//! Function lowering

use super::instruction::lower_instruction;
use crate::instr::InstrContext;
use crate::LoweringOptions;
use eir_codegen::AsmInst;
use eir_common::CompilerError;
use eir_frontend::Function;
use log::{debug, warn};

/// Lower one function: visibility directive, entry label, prologue, then
/// every instruction in source order
///
/// No epilogue is added here. Only `ret` tears the frame down, so a
/// function without one falls through its last instruction.
pub fn lower_function(function: &Function, options: &LoweringOptions) -> Result<Vec<AsmInst>, CompilerError> {
    debug!("Lowering function '{}' ({} instructions)", function.name, function.instructions.len());

    let ctx = InstrContext::new(&function.name, options);
    let mut insts = vec![
        AsmInst::Global(function.name.clone()),
        AsmInst::Label(function.name.clone()),
    ];
    insts.extend(ctx.frame.gen_prologue());

    for inst in &function.instructions {
        insts.extend(lower_instruction(&ctx, inst)?);
    }

    if !function.has_return() {
        warn!("Function '{}' has no ret; no epilogue emitted", function.name);
    }
    Ok(insts)
}
