//! EclipseIR Compiler - Frontend
//! 
//! This crate provides the frontend components for the EclipseIR compiler:
//! - IR: the program model handed to code generation
//! - Parser: builds the program from IR text, one line at a time

pub mod ir;
pub mod parser;

pub use ir::{BinaryOp, CompareKind, Function, Global, InstrKind, Instruction, Program};
pub use parser::Parser;

use eir_common::{CompilerError, Diagnostic};
use log::info;
use std::path::Path;

/// A parsed program together with the warnings the parser collected
#[derive(Debug)]
pub struct ParsedProgram {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse IR source text into a program
    pub fn parse_source(source: &str) -> Program {
        Parser::new("<input>").parse_source(source)
    }

    /// Parse IR source text, keeping the parser's diagnostics
    pub fn parse_named_source(source: &str, filename: &str) -> ParsedProgram {
        let mut parser = Parser::new(filename);
        let program = parser.parse_source(source);
        ParsedProgram {
            program,
            diagnostics: parser.take_diagnostics(),
        }
    }

    /// Read and parse an IR file. Failing to read the file is the only
    /// error; the contents themselves are parsed best effort, and bytes
    /// that are not UTF-8 become replacement characters.
    pub fn parse_file(path: &Path) -> Result<ParsedProgram, CompilerError> {
        let display = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| CompilerError::input_not_found(&display, &e))?;
        let source = String::from_utf8_lossy(&bytes);

        info!("Parsing {}", display);
        Ok(Self::parse_named_source(&source, &display))
    }
}
