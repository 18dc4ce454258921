//! Backend test modules


use crate::{compile_to_assembly, LoweringOptions};
use eir_frontend::Frontend;

/// Parse IR text and compile it with default options
pub(crate) fn compile(source: &str) -> String {
    compile_with(source, &LoweringOptions::default())
}

pub(crate) fn compile_with(source: &str, options: &LoweringOptions) -> String {
    let program = Frontend::parse_source(source);
    compile_to_assembly(&program, options).unwrap()
}

/// Indented instruction lines of the output, without their indentation
pub(crate) fn body_lines(asm: &str) -> Vec<&str> {
    asm.lines()
        .filter(|line| line.starts_with("  "))
        .map(str::trim)
        .collect()
}
