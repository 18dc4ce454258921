//! AArch64 ABI Implementation
//!
//! The subset of AAPCS64 used by generated code: integer arguments in
//! w0-w7, results in w0/s0/d0, and a fixed frame that saves the frame
//! pointer and link register.

use crate::asm::{AsmInst, Reg};
use eir_common::ValueType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbiError {
    #[error("Too many arguments: {0} (maximum: {1})")]
    TooManyArguments(usize, usize),
}

/// AAPCS64 Calling Convention
///
/// Register Usage:
/// - X0-X7: Arguments and results (W0-W7 for 32-bit values)
/// - S0/D0: Floating point result
/// - X29: Frame pointer
/// - X30: Link register, also the scratch register for constants and
///   modulo quotients once it has been saved by the prologue
pub struct CallingConvention;

impl CallingConvention {
    /// Maximum number of arguments passed in registers
    pub const MAX_REG_ARGS: usize = 8;

    /// Fixed frame size in bytes
    pub const FRAME_SIZE: i32 = 32;

    pub const FRAME_PTR: Reg = Reg::X(29);
    pub const LINK_REG: Reg = Reg::X(30);
    pub const STACK_PTR: Reg = Reg::Sp;

    /// 32-bit scratch register
    pub const SCRATCH: Reg = Reg::W(30);

    /// Register holding the address argument for library calls
    pub const ADDR_ARG: Reg = Reg::X(0);

    /// Get the register for an argument index (0-based)
    pub fn arg_reg(index: usize) -> Result<Reg, AbiError> {
        if index >= Self::MAX_REG_ARGS {
            return Err(AbiError::TooManyArguments(index + 1, Self::MAX_REG_ARGS));
        }
        Ok(Reg::W(index as u8))
    }

    /// Result register for a value of type `ty`
    pub fn return_reg(ty: ValueType) -> Reg {
        match ty {
            ValueType::F32 => Reg::S(0),
            ValueType::F64 => Reg::D(0),
            _ => Reg::W(0),
        }
    }

    /// General purpose scratch whose width matches a floating type, so
    /// `fmov` can copy the bits into the destination
    pub fn float_scratch(ty: ValueType) -> Reg {
        match ty {
            ValueType::F32 => Self::SCRATCH,
            _ => Self::LINK_REG,
        }
    }
}

/// Stack Frame Layout
///
/// Every function gets the same frame: the frame pointer and link register
/// pair stored at the bottom of a fixed allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Total frame size in bytes
    pub size: i32,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub fn new() -> Self {
        Self {
            size: CallingConvention::FRAME_SIZE,
        }
    }

    /// Generate function prologue
    ///
    /// Pushes the frame pointer and link register, then points the frame
    /// pointer at the new frame.
    pub fn gen_prologue(&self) -> Vec<AsmInst> {
        vec![
            AsmInst::StpPre(
                CallingConvention::FRAME_PTR,
                CallingConvention::LINK_REG,
                CallingConvention::STACK_PTR,
                -self.size,
            ),
            AsmInst::Mov(CallingConvention::FRAME_PTR, CallingConvention::STACK_PTR),
        ]
    }

    /// Generate function epilogue, including the return
    pub fn gen_epilogue(&self) -> Vec<AsmInst> {
        vec![
            AsmInst::LdpPost(
                CallingConvention::FRAME_PTR,
                CallingConvention::LINK_REG,
                CallingConvention::STACK_PTR,
                self.size,
            ),
            AsmInst::Ret,
        ]
    }
}
