//! Compilation steps behind the command line

use anyhow::{Context, Result};
use eir_backend::{lower_program, LoweringOptions};
use eir_codegen::write_program;
use eir_common::{CompilerError, ErrorReporter};
use eir_frontend::{Frontend, ParsedProgram, Program};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Read and parse the input file
///
/// In strict mode every parser warning is promoted to an error. All of them
/// are printed to stderr and the first one fails the run as
/// [`CompilerError::MalformedLine`].
pub fn parse_input(path: &Path, strict: bool) -> Result<Program> {
    let ParsedProgram { program, diagnostics } = Frontend::parse_file(path)?;
    if !strict {
        return Ok(program);
    }

    let mut reporter = ErrorReporter::new();
    for diagnostic in diagnostics {
        reporter.error(diagnostic.message, diagnostic.location);
    }
    if reporter.has_errors() {
        reporter.print_diagnostics();
        let context = format!("{} in {} (strict mode)", reporter.summary(), path.display());
        if let Some(first) = reporter.take_diagnostics().into_iter().next() {
            return Err(anyhow::Error::new(first.into_error()).context(context));
        }
    }
    Ok(program)
}

/// Write the parsed program as pretty JSON
pub fn dump_ir_json(path: &Path, program: &Program) -> Result<()> {
    let json = serde_json::to_string_pretty(program).context("Failed to serialize IR")?;
    fs::write(path, json).with_context(|| format!("Failed to write IR JSON to {}", path.display()))?;
    info!("IR written to {}", path.display());
    Ok(())
}

/// Lower the program and write its assembly to `path`
///
/// Lowering runs before the file is created, so a strict-mode failure
/// leaves no partial output behind.
pub fn write_assembly_file(path: &Path, program: &Program, options: &LoweringOptions) -> Result<(), CompilerError> {
    let insts = lower_program(program, options)?;

    let display = path.display().to_string();
    let file = File::create(path).map_err(|e| CompilerError::output_not_creatable(&display, &e))?;
    let mut out = BufWriter::new(file);
    write_program(&mut out, &insts).map_err(|e| CompilerError::IoError { message: e.to_string() })?;

    info!("Assembly written to {}", display);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PROGRAM: &str = "@msg = c\"hi\"\nfunc @main() -> i32 {\nputs @msg\n%0 = const i32 0\nret %0\n}\n";

    fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.ir");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = parse_input(&dir.path().join("absent.ir"), false).unwrap_err();
        let err = err.downcast::<CompilerError>().unwrap();
        assert!(matches!(err, CompilerError::InputNotFound { .. }));
    }

    #[test]
    fn test_strict_parse_rejects_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "func @main() -> i32 {\nnonsense\nret\n}\n");

        assert!(parse_input(&input, false).is_ok());

        let err = parse_input(&input, true).unwrap_err();
        assert!(err.to_string().contains("1 error in"));
        match err.downcast_ref::<CompilerError>() {
            Some(CompilerError::MalformedLine { location, .. }) => assert_eq!(location.line, 2),
            other => panic!("expected a malformed line error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_assembly_file() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, PROGRAM);
        let asm = dir.path().join("out.s");

        let program = parse_input(&input, true).unwrap();
        write_assembly_file(&asm, &program, &LoweringOptions::default()).unwrap();

        let text = fs::read_to_string(&asm).unwrap();
        assert!(text.starts_with("// Generated by EclipseIR\n.data\nmsg: .asciz \"hi\"\n"));
        assert!(text.contains("  bl puts\n"));
        assert!(text.ends_with("  ret\n"));
    }

    #[test]
    fn test_output_not_creatable() {
        let dir = TempDir::new().unwrap();
        let asm = dir.path().join("no/such/dir/out.s");
        let err = write_assembly_file(&asm, &Program::new(), &LoweringOptions::default()).unwrap_err();
        assert!(matches!(err, CompilerError::OutputNotCreatable { .. }));
    }

    #[test]
    fn test_strict_lowering_failure_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let asm = dir.path().join("out.s");
        let program = Frontend::parse_source("func @main() -> i32 {\n%0 = frob i32 %1 %2\n}\n");
        let options = LoweringOptions {
            strict: true,
            annotate: false,
        };

        assert!(write_assembly_file(&asm, &program, &options).is_err());
        assert!(!asm.exists());
    }

    #[test]
    fn test_dump_ir_json() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("ir.json");
        let program = Frontend::parse_source(PROGRAM);

        dump_ir_json(&json_path, &program).unwrap();

        let json = fs::read_to_string(&json_path).unwrap();
        let restored: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, program);
    }
}
