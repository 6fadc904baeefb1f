//! Machine state.
//!
//! A [`State`] is everything that changes while a program runs apart from the output
//! grid: the register file, the stack, and the `top_of_stack` push/pop counter.
//! The executor never edits a live state; it builds the successor from a copy, so a
//! faulting step leaves the previous state intact.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{REGISTER_COUNT, Word};
use crate::common::error::VmError;
use crate::common::reg::RegisterFile;
use crate::core::arch::stack::Stack;

/// Registers, stack and stack-depth telemetry at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct State {
    registers: RegisterFile,
    stack: Stack,
    top_of_stack: usize,
}

impl State {
    /// All-zero registers and an empty stack.
    pub const fn new() -> Self {
        Self {
            registers: RegisterFile::new(),
            stack: Stack::new(),
            top_of_stack: 0,
        }
    }

    /// The register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// The stack.
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Push/pop depth counter.
    ///
    /// Incremented by every push and decremented by every pop the instruction set
    /// performs. No instruction reads it; it exists for inspection only.
    pub const fn top_of_stack(&self) -> usize {
        self.top_of_stack
    }

    /// Program counter (register 0).
    pub const fn program_counter(&self) -> Word {
        self.registers.pc()
    }

    /// Base-of-stack pointer (register 1).
    pub const fn base_of_stack(&self) -> Word {
        self.registers.base_of_stack()
    }

    /// I/O register (register 2).
    pub const fn io_register(&self) -> Word {
        self.registers.io()
    }

    /// Mutable register file, for debuggers and test setup.
    pub const fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    /// Mutable stack, for debuggers and test setup. Edits made here bypass the
    /// `top_of_stack` counter.
    pub const fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Pushes a value, counting it in `top_of_stack`.
    pub fn push(&mut self, val: Word) {
        self.stack.push(val);
        self.top_of_stack += 1;
    }

    /// Pops a value, counting it in `top_of_stack`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Word, VmError> {
        let val = self.stack.pop()?;
        self.top_of_stack = self.top_of_stack.saturating_sub(1);
        Ok(val)
    }

    /// Reads the register named by an instruction operand.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] unless `0 <= operand < 8`.
    pub fn reg(&self, operand: i32) -> Result<Word, VmError> {
        self.registers.read(register_index(operand)?)
    }

    /// Writes the register named by an instruction operand.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] unless `0 <= operand < 8`.
    pub fn set_reg(&mut self, operand: i32, val: Word) -> Result<(), VmError> {
        self.registers.write(register_index(operand)?, val)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State(registers={}, stack={:?})",
            self.registers,
            self.stack.as_slice()
        )
    }
}

/// Converts a register operand into a register index.
///
/// # Errors
///
/// Returns [`VmError::RegisterOutOfRange`] unless `0 <= operand < 8`.
pub fn register_index(operand: i32) -> Result<usize, VmError> {
    usize::try_from(operand)
        .ok()
        .filter(|&idx| idx < REGISTER_COUNT)
        .ok_or(VmError::RegisterOutOfRange {
            index: i64::from(operand),
        })
}
