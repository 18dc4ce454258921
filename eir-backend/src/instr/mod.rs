//! Instruction lowering modules
//!
//! One module per instruction family. Each lowering function receives the
//! IR instruction and an [`InstrContext`] and returns the assembly items for
//! that instruction. A required field that is absent, or a kind with no
//! lowering, produces nothing in lenient mode and an error in strict mode.

pub mod constant;
pub mod arithmetic;
pub mod compare;
pub mod branch;
pub mod call;

pub use constant::lower_const;
pub use arithmetic::{lower_arithmetic, lower_mod};
pub use compare::{condition_for, lower_compare};
pub use branch::{lower_goto, lower_if_goto, lower_label, lower_ret};
pub use call::{lower_call, lower_puts};

use crate::LoweringOptions;
use eir_codegen::{AsmInst, Frame};
use eir_common::CompilerError;
use eir_frontend::Instruction;
use log::warn;

/// Per-function state shared by the instruction lowerings
pub struct InstrContext<'a> {
    pub function: &'a str,
    pub options: &'a LoweringOptions,
    pub frame: Frame,
}

impl<'a> InstrContext<'a> {
    pub fn new(function: &'a str, options: &'a LoweringOptions) -> Self {
        Self {
            function,
            options,
            frame: Frame::new(),
        }
    }

    /// Give up on `inst`: an error in strict mode, otherwise no output
    pub fn unhandled(&self, inst: &Instruction, reason: &str) -> Result<Vec<AsmInst>, CompilerError> {
        let message = format!("{reason}: `{inst}`");
        if self.options.strict {
            return Err(CompilerError::unhandled(self.function, message));
        }
        warn!("{}: emitting nothing for {}", self.function, message);
        Ok(Vec::new())
    }
}
