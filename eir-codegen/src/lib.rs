//! EclipseIR Compiler - AArch64 Code Generation Support
//!
//! This crate models the target side of compilation:
//!
//! - Assembly instructions, registers and directives
//! - ABI constants (calling convention, fixed stack frame)
//! - Text emission of a lowered instruction list

pub mod asm;
pub mod abi;
pub mod emit;

pub use asm::{AsmInst, Cond, Reg, Section};
pub use abi::{AbiError, CallingConvention, Frame};
pub use emit::{emit_instructions, write_program, CodegenError, HEADER};
