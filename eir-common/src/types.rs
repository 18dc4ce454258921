//! Common types used throughout the compiler
//!
//! This module defines the value types of the IR and the identifier used
//! for virtual registers. Both the parser and the code generator depend
//! on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual register identifier, written `%N` in IR text
pub type VReg = u32;

/// Maximum number of source operands an instruction carries
pub const MAX_OPERANDS: usize = 8;

/// Value types of the IR
///
/// The type selects both the physical register class and whether the
/// integer or floating point form of an instruction is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueType {
    /// 32-bit signed integer
    #[default]
    I32,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// Boolean, held in a 32-bit integer register
    Bool,
    /// String (pointer sized)
    Str,
    /// No value
    Void,
}

impl ValueType {
    /// Map an operand type keyword from IR text.
    ///
    /// Only `f32` and `f64` are distinguished; every other keyword,
    /// including `bool`, reads as `i32`.
    pub fn from_operand_keyword(keyword: &str) -> Self {
        match keyword {
            "f32" => ValueType::F32,
            "f64" => ValueType::F64,
            _ => ValueType::I32,
        }
    }

    /// Map a function return type keyword: `i32` or void
    pub fn from_return_keyword(keyword: &str) -> Self {
        if keyword == "i32" {
            ValueType::I32
        } else {
            ValueType::Void
        }
    }

    /// Check if this type uses floating point registers and instructions
    pub fn is_float(&self) -> bool {
        matches!(self, ValueType::F32 | ValueType::F64)
    }

    /// Check if this type lives in a 32-bit general purpose register
    pub fn is_word(&self) -> bool {
        matches!(self, ValueType::I32 | ValueType::Bool)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::I32 => write!(f, "i32"),
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Str => write!(f, "str"),
            ValueType::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_keywords() {
        assert_eq!(ValueType::from_operand_keyword("f32"), ValueType::F32);
        assert_eq!(ValueType::from_operand_keyword("f64"), ValueType::F64);
        assert_eq!(ValueType::from_operand_keyword("i32"), ValueType::I32);
        // Unknown keywords fall back to i32
        assert_eq!(ValueType::from_operand_keyword("bool"), ValueType::I32);
        assert_eq!(ValueType::from_operand_keyword("i64"), ValueType::I32);
    }

    #[test]
    fn test_return_keywords() {
        assert_eq!(ValueType::from_return_keyword("i32"), ValueType::I32);
        assert_eq!(ValueType::from_return_keyword("void"), ValueType::Void);
        assert_eq!(ValueType::from_return_keyword("f64"), ValueType::Void);
    }

    #[test]
    fn test_register_classes() {
        assert!(ValueType::F32.is_float());
        assert!(ValueType::F64.is_float());
        assert!(!ValueType::I32.is_float());
        assert!(ValueType::Bool.is_word());
        assert!(!ValueType::Str.is_word());
        assert!(!ValueType::Void.is_float());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ValueType::I32), "i32");
        assert_eq!(format!("{}", ValueType::F64), "f64");
        assert_eq!(format!("{}", ValueType::Void), "void");
    }
}
