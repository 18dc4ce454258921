//! Error handling for the EclipseIR compiler
//!
//! This module defines the common error type and the diagnostic collector
//! used throughout the compiler. Only the two I/O conditions are fatal in
//! the default mode; everything else is collected as a warning and
//! becomes an error only when strict checking is requested.

use crate::source_loc::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Failed to open input file `{path}`: {message}")]
    InputNotFound {
        path: String,
        message: String,
    },

    #[error("Failed to create assembly file `{path}`: {message}")]
    OutputNotCreatable {
        path: String,
        message: String,
    },

    #[error("Malformed line at {location}: {message}")]
    MalformedLine {
        location: SourceLocation,
        message: String,
    },

    #[error("Unhandled instruction in function `{function}`: {message}")]
    UnhandledInstruction {
        function: String,
        message: String,
    },

    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with location and severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn error(message: String, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Error,
            message,
            location,
        }
    }

    pub fn warning(message: String, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            location,
        }
    }

    /// Convert into the error raised when strict checking rejects the input
    pub fn into_error(self) -> CompilerError {
        CompilerError::MalformedLine {
            location: self.location,
            message: self.message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Error reporter for collecting and displaying diagnostics
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, updating the counters by severity
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error diagnostic
    pub fn error(&mut self, message: String, location: SourceLocation) {
        self.report(Diagnostic::error(message, location));
    }

    /// Report a warning diagnostic
    pub fn warning(&mut self, message: String, location: SourceLocation) {
        self.report(Diagnostic::warning(message, location));
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Take the collected diagnostics, leaving the reporter empty
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match (self.error_count, self.warning_count) {
            (0, 0) => "No errors or warnings".to_string(),
            (0, w) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (e, 0) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (e, w) => format!(
                "{} error{} and {} warning{}",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }
    }
}

impl CompilerError {
    /// Create an error for an input file that cannot be opened
    pub fn input_not_found(path: &str, err: &std::io::Error) -> Self {
        CompilerError::InputNotFound {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// Create an error for an assembly file that cannot be created
    pub fn output_not_creatable(path: &str, err: &std::io::Error) -> Self {
        CompilerError::OutputNotCreatable {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// Create an error for an instruction code generation cannot lower
    pub fn unhandled(function: &str, message: String) -> Self {
        CompilerError::UnhandledInstruction {
            function: function.to_string(),
            message,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let loc = SourceLocation::new("prog.ir", 4, 1);

        let diag = Diagnostic::warning("Unrecognized line".to_string(), loc.clone());
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "Unrecognized line");
        assert_eq!(diag.location, loc);
        assert_eq!(format!("{}", diag), "prog.ir:4:1: warning: Unrecognized line");

        let diag = Diagnostic::error("Unrecognized line".to_string(), loc);
        assert_eq!(format!("{}", diag), "prog.ir:4:1: error: Unrecognized line");
    }

    #[test]
    fn test_error_reporter() {
        let mut reporter = ErrorReporter::new();
        let loc = SourceLocation::new("prog.ir", 1, 1);

        assert!(!reporter.has_errors());

        reporter.warning("Missing operand".to_string(), loc.clone());
        assert!(!reporter.has_errors());

        reporter.error("Bad".to_string(), loc);
        assert!(reporter.has_errors());

        let taken = reporter.take_diagnostics();
        assert_eq!(taken.len(), 2);
        assert!(!reporter.has_errors());
        assert_eq!(reporter.summary(), "No errors or warnings");
    }

    #[test]
    fn test_summary() {
        let mut reporter = ErrorReporter::new();
        assert_eq!(reporter.summary(), "No errors or warnings");

        reporter.warning("one".to_string(), SourceLocation::dummy());
        assert_eq!(reporter.summary(), "1 warning");

        reporter.warning("two".to_string(), SourceLocation::dummy());
        assert_eq!(reporter.summary(), "2 warnings");

        reporter.error("three".to_string(), SourceLocation::dummy());
        assert_eq!(reporter.summary(), "1 error and 2 warnings");
    }

    #[test]
    fn test_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CompilerError::input_not_found("prog.ir", &io);
        assert_eq!(format!("{}", err), "Failed to open input file `prog.ir`: missing");

        let err: CompilerError = io.into();
        assert_eq!(err, CompilerError::IoError { message: "missing".to_string() });
    }

    #[test]
    fn test_diagnostic_into_error() {
        let loc = SourceLocation::new("prog.ir", 2, 3);
        let err = Diagnostic::error("oops".to_string(), loc.clone()).into_error();
        assert_eq!(err, CompilerError::MalformedLine { location: loc, message: "oops".to_string() });
        assert_eq!(format!("{}", err), "Malformed line at prog.ir:2:3: oops");
    }
}
