//! Assembly text emission
//!
//! Writes a lowered item list as assembler source: a header comment, then
//! one item per line. Machine instructions and comments are indented two
//! spaces; labels and directives start at column 0. Every section switch
//! after the first is preceded by a blank line.

use crate::asm::AsmInst;
use std::io::{self, Write};
use thiserror::Error;

/// First line of every emitted file
pub const HEADER: &str = "// Generated by EclipseIR";

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to write assembly: {0}")]
    Io(#[from] io::Error),

    #[error("Emitted assembly is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Stream the assembly for `instructions` into `out`
pub fn write_program<W: Write>(out: &mut W, instructions: &[AsmInst]) -> Result<(), CodegenError> {
    writeln!(out, "{HEADER}")?;

    let mut seen_section = false;
    for inst in instructions {
        if let AsmInst::Section(_) = inst {
            if seen_section {
                writeln!(out)?;
            }
            seen_section = true;
        }

        if inst.is_indented() {
            writeln!(out, "  {inst}")?;
        } else {
            writeln!(out, "{inst}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render the assembly for `instructions` into a string
pub fn emit_instructions(instructions: &[AsmInst]) -> Result<String, CodegenError> {
    let mut buf = Vec::new();
    write_program(&mut buf, instructions)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::{Reg, Section};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout() {
        let instructions = vec![
            AsmInst::Section(Section::Data),
            AsmInst::Asciz { label: "msg".to_string(), value: "hi".to_string() },
            AsmInst::Section(Section::Text),
            AsmInst::Align(2),
            AsmInst::Global("main".to_string()),
            AsmInst::Label("main".to_string()),
            AsmInst::MovImm(Reg::W(0), 0),
            AsmInst::Ret,
        ];

        let asm = emit_instructions(&instructions).unwrap();
        assert_eq!(
            asm,
            "// Generated by EclipseIR\n\
             .data\n\
             msg: .asciz \"hi\"\n\
             \n\
             .text\n\
             .align 2\n\
             .global main\n\
             main:\n  mov w0, #0\n  ret\n"
        );
    }

    #[test]
    fn test_empty_program_has_header() {
        assert_eq!(emit_instructions(&[]).unwrap(), "// Generated by EclipseIR\n");
    }

    #[test]
    fn test_write_to_failing_sink() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_program(&mut Broken, &[AsmInst::Ret]).unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
