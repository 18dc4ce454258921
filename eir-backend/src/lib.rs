//! EclipseIR Compiler - Backend
//!
//! This crate lowers a parsed IR program to AArch64 assembly:
//! - `naming`: the register naming policy (virtual -> physical)
//! - `lower`: program, global and function lowering
//! - `instr`: per-instruction lowering rules

pub mod naming;
pub mod lower;
pub mod instr;

#[cfg(test)]
mod tests;

pub use lower::{lower_function, lower_instruction, lower_program};
pub use naming::{physical_index, register_for, register_name};

use eir_codegen::emit_instructions;
use eir_common::CompilerError;
use eir_frontend::Program;

/// Options for lowering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoweringOptions {
    /// Fail on instructions that would otherwise lower to nothing
    pub strict: bool,
    /// Precede each lowered instruction with its IR text as a comment
    pub annotate: bool,
}

/// Lower a program and render it as assembly text
pub fn compile_to_assembly(program: &Program, options: &LoweringOptions) -> Result<String, CompilerError> {
    let insts = lower_program(program, options)?;
    emit_instructions(&insts).map_err(|e| CompilerError::IoError { message: e.to_string() })
}
