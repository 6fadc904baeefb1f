//! Register File.
//!
//! This module provides the `RegisterFile` struct, the machine's eight 16-bit registers.
//! It provides:
//! 1. **Storage:** Eight word-sized slots, all zero at construction.
//! 2. **Bounds Checking:** Reads and writes outside `0..8` fail with `RegisterOutOfRange`.
//! 3. **Special Registers:** Named accessors for the program counter, base-of-stack and I/O registers.
//!
//! The register file never clamps. Because slots are `Word`s, callers wrap their
//! arithmetic into `0..=65535` before writing.

use std::fmt;

use serde::Serialize;

use super::constants::{BOS_REGISTER, IO_REGISTER, PC_REGISTER, REGISTER_COUNT, Word};
use super::error::VmError;

/// The machine's register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterFile {
    regs: [Word; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with every slot set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Creates a register file holding the given values.
    pub const fn from_array(regs: [Word; REGISTER_COUNT]) -> Self {
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] if `idx >= 8`.
    pub fn read(&self, idx: usize) -> Result<Word, VmError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(VmError::RegisterOutOfRange { index: idx as i64 })
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] if `idx >= 8`.
    pub fn write(&mut self, idx: usize, val: Word) -> Result<(), VmError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(VmError::RegisterOutOfRange { index: idx as i64 })?;
        *slot = val;
        Ok(())
    }

    /// Program counter (register 0).
    pub const fn pc(&self) -> Word {
        self.regs[PC_REGISTER]
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, val: Word) {
        self.regs[PC_REGISTER] = val;
    }

    /// Base-of-stack pointer (register 1).
    pub const fn base_of_stack(&self) -> Word {
        self.regs[BOS_REGISTER]
    }

    /// I/O register (register 2).
    pub const fn io(&self) -> Word {
        self.regs[IO_REGISTER]
    }

    /// Sets the I/O register.
    pub const fn set_io(&mut self, val: Word) {
        self.regs[IO_REGISTER] = val;
    }

    /// All register values, indexed by register number.
    pub const fn as_array(&self) -> &[Word; REGISTER_COUNT] {
        &self.regs
    }
}

impl fmt::Display for RegisterFile {
    /// Formats the registers as a bracketed list, `[0, 0, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.regs)
    }
}
