//! Source location tracking for error reporting
//!
//! IR input is line oriented, so a location is a file name plus a 1-based
//! line and column pointing at the first non-blank character of the line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Create a location with filename
    pub fn new(filename: &str, line: u32, column: u32) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
        }
    }

    /// Create a dummy location for testing
    #[cfg(test)]
    pub fn dummy() -> Self {
        Self::new("<unknown>", 0, 0)
    }

    /// Location of the first non-blank character of `text`, which is line
    /// number `line` (1-based) of `filename`.
    pub fn of_line(filename: &str, line: u32, text: &str) -> Self {
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        Self::new(filename, line, indent as u32 + 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}
