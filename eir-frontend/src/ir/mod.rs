//! Intermediate Representation
//! 
//! The IR is a flat, register based form: a program is an ordered list of
//! globals followed by an ordered list of functions, and each function is
//! an ordered list of instructions.
//! 
//! ## Architecture
//! 
//! - `instructions` - Instruction kinds, operators and the instruction record
//! - `function` - Function definitions
//! - `module` - Globals and the program they compose into

pub use self::instructions::{BinaryOp, CompareKind, InstrKind, Instruction};
pub use self::function::Function;
pub use self::module::{Global, Program};

mod instructions;
mod function;
mod module;
