//! Function Definitions

use eir_common::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::{InstrKind, Instruction};

/// Function in IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: ValueType,
    /// Instructions in source order, which is also emission order
    pub instructions: Vec<Instruction>,
}

impl Function {
    pub fn new(name: String, return_type: ValueType) -> Self {
        Self {
            name,
            return_type,
            instructions: Vec::new(),
        }
    }

    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Whether any `ret` appears; without one no epilogue is emitted
    pub fn has_return(&self) -> bool {
        self.instructions.iter().any(|i| i.kind == InstrKind::Ret)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "func @{}() -> {} {{", self.name, self.return_type)?;
        for inst in &self.instructions {
            writeln!(f, "  {inst}")?;
        }
        write!(f, "}}")
    }
}
