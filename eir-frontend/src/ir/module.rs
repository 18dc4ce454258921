//! Program and Global Variables
//!
//! Defines the top-level program handed from the parser to code generation.

use eir_common::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::Function;

/// Global definition. Only string and i32 globals exist; the value is
/// kept as the literal text from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Global {
    pub name: String,
    pub ty: ValueType,
    pub value: String,
}

impl Global {
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ValueType::Str,
            value: value.to_string(),
        }
    }

    pub fn int(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ValueType::I32,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Global {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            ValueType::Str => write!(f, "@{} = c\"{}\"", self.name, self.value),
            _ => write!(f, "@{} = i32 {}", self.name, self.value),
        }
    }
}

/// IR Program - globals then functions, both in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub globals: Vec<Global>,
    pub functions: Vec<Function>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn add_global(&mut self, global: Global) {
        self.globals.push(global);
    }

    /// Total number of instructions across all functions
    pub fn instruction_count(&self) -> usize {
        self.functions.iter().map(|f| f.instructions.len()).sum()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for global in &self.globals {
            writeln!(f, "{global}")?;
        }
        for function in &self.functions {
            writeln!(f, "{function}")?;
        }
        Ok(())
    }
}
