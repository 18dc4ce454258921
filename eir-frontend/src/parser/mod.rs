//! Line oriented IR parser
//!
//! Each input line matches at most one production. Lines are classified in
//! this order: global declaration, function header, ignorable line (blank,
//! brace, comment, or any line outside a function), then the instruction
//! productions in precedence order
//! `const > assignment > goto > if_goto > call > puts > label > ret`.
//!
//! Parsing never fails. Malformed lines keep whatever fields they yielded,
//! and the resulting instruction is kept only if it satisfies the retention
//! rule of [`Instruction::is_retained`]. Every swallowed or partial line is
//! recorded as a warning diagnostic; the program is the same either way.

mod productions;


use eir_common::{Diagnostic, ErrorReporter, SourceLocation};
use log::{debug, trace, warn};
use crate::ir::{Function, Instruction, Program};
use productions::{Matched, INSTRUCTION_PRODUCTIONS};

/// IR text parser
pub struct Parser {
    filename: String,
    reporter: ErrorReporter,
    /// Whether a function header has opened a function body
    in_function: bool,
}

impl Parser {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            reporter: ErrorReporter::new(),
            in_function: false,
        }
    }

    /// Parse a whole source text into a program
    pub fn parse_source(&mut self, source: &str) -> Program {
        let mut program = Program::new();
        self.in_function = false;

        for (index, line) in source.lines().enumerate() {
            self.parse_line(&mut program, line, index as u32 + 1);
        }

        debug!(
            "Parsed {} globals and {} functions ({} instructions) from {}",
            program.globals.len(),
            program.functions.len(),
            program.instruction_count(),
            self.filename
        );
        program
    }

    /// Take the collected diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.reporter.take_diagnostics()
    }

    fn parse_line(&mut self, program: &mut Program, raw: &str, line_number: u32) {
        let location = SourceLocation::of_line(&self.filename, line_number, raw);
        let line = raw.trim();
        trace!("{location}: {line}");

        if line.starts_with('@') {
            self.parse_global(program, line, location);
            return;
        }

        if productions::is_function_header(line) {
            self.parse_function_header(program, line, location);
            return;
        }

        let line = strip_comment(line);
        if line.is_empty() || line.starts_with('}') || line == "{" {
            return;
        }

        if !self.in_function {
            self.warn(location, "ignoring line outside of a function".to_string());
            return;
        }

        let Some(matched) = INSTRUCTION_PRODUCTIONS.iter().find_map(|production| production(line)) else {
            self.warn(location, format!("unrecognized instruction `{line}`"));
            return;
        };

        let Matched { value: instruction, missing } = matched;
        if let Some(field) = missing {
            self.warn(location.clone(), format!("missing {field} in `{line}`"));
        }

        if instruction.is_retained() {
            trace!("  -> {instruction}");
            self.push_instruction(program, instruction);
        } else {
            self.warn(location, format!("discarding instruction without kind, destination or label: `{line}`"));
        }
    }

    fn parse_global(&mut self, program: &mut Program, line: &str, location: SourceLocation) {
        let Some(matched) = productions::global(line) else {
            self.warn(location, format!("malformed global `{line}`"));
            return;
        };

        if let Some(field) = matched.missing {
            self.warn(location, format!("missing {field} in `{line}`"));
        }

        if matched.value.name.is_empty() {
            return;
        }
        trace!("  -> global {}", matched.value);
        program.add_global(matched.value);
    }

    fn parse_function_header(&mut self, program: &mut Program, line: &str, location: SourceLocation) {
        let Some(matched) = productions::function_header(line) else {
            // Lines up to the next valid header have no function to join
            self.in_function = false;
            self.warn(location, format!("malformed function header `{line}`"));
            return;
        };

        if let Some(field) = matched.missing {
            self.warn(location, format!("missing {field} in `{line}`"));
        }

        let header = matched.value;
        trace!("  -> function {} returning {}", header.name, header.return_type);
        program.add_function(Function::new(header.name, header.return_type));
        self.in_function = true;
    }

    fn push_instruction(&mut self, program: &mut Program, instruction: Instruction) {
        if let Some(function) = program.functions.last_mut() {
            function.add_instruction(instruction);
        }
    }

    fn warn(&mut self, location: SourceLocation, message: String) {
        warn!("{location}: {message}");
        self.reporter.warning(message, location);
    }
}

/// Drop a trailing `; comment` from an instruction line
fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}
