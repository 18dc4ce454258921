//! Program lowering
//!
//! Produces the whole assembly item list: the data section with one
//! declaration per global, then the text section with each function, both
//! in declaration order.

pub mod function;
pub mod instruction;

pub use function::lower_function;
pub use instruction::lower_instruction;

use crate::LoweringOptions;
use eir_codegen::{AsmInst, Section};
use eir_common::CompilerError;
use eir_frontend::{Global, Program};
use log::{debug, info};

/// Code alignment, as a power of two
const TEXT_ALIGN: u32 = 2;

/// Lower a whole program
pub fn lower_program(program: &Program, options: &LoweringOptions) -> Result<Vec<AsmInst>, CompilerError> {
    info!(
        "Lowering {} globals and {} functions (strict: {}, annotate: {})",
        program.globals.len(),
        program.functions.len(),
        options.strict,
        options.annotate
    );

    let mut insts = vec![AsmInst::Section(Section::Data)];
    for global in &program.globals {
        insts.push(lower_global(global));
    }

    insts.push(AsmInst::Section(Section::Text));
    insts.push(AsmInst::Align(TEXT_ALIGN));
    for function in &program.functions {
        insts.extend(lower_function(function, options)?);
    }

    info!("Lowering complete, generated {} items", insts.len());
    Ok(insts)
}

/// Data declaration for a global
///
/// Every global is a NUL-terminated string, whatever its declared type, so
/// `puts` can print any of them.
pub fn lower_global(global: &Global) -> AsmInst {
    debug!("Global '{}' ({})", global.name, global.ty);
    AsmInst::Asciz {
        label: global.name.clone(),
        value: global.value.clone(),
    }
}
