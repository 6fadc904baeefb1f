//! Instruction encoding.
//!
//! An instruction is a triple of an opcode and two integer operands. What an operand
//! means (register index, immediate, unused) depends on the opcode and on the
//! operand dialect the machine was built with.

use std::fmt;

use super::opcode::Opcode;
use crate::common::error::VmError;

/// One decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation tag.
    pub opcode: Opcode,
    /// First operand; usually the destination register.
    pub arg1: i32,
    /// Second operand; a source register or an immediate.
    pub arg2: i32,
}

impl Instruction {
    /// Creates an instruction.
    pub const fn new(opcode: Opcode, arg1: i32, arg2: i32) -> Self {
        Self { opcode, arg1, arg2 }
    }

    /// Decodes a mnemonic and its operands.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::UnrecognizedInstruction`] if `mnemonic` names no opcode.
    pub fn decode(mnemonic: &str, arg1: i32, arg2: i32) -> Result<Self, VmError> {
        Ok(Self::new(mnemonic.parse()?, arg1, arg2))
    }
}

impl fmt::Display for Instruction {
    /// Formats as `MNEMONIC arg1 arg2`, the form the loader accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.opcode, self.arg1, self.arg2)
    }
}
