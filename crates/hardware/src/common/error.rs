//! Error definitions.
//!
//! This module defines every failure the workspace can report. It provides:
//! 1. **Execution Faults:** `VmError`, the fatal conditions raised while stepping the machine.
//! 2. **Loader Errors:** `LoadError`, raised while turning assembly or grid text into values.
//! 3. **Configuration Errors:** `ConfigError`, raised while reading or validating a `Config`.
//!
//! None of these are recovered locally. A `VmError` aborts the running program and
//! leaves the machine state exactly as it was before the failing step.

use std::io;

use thiserror::Error;

use super::constants::Word;

/// Fatal execution faults.
///
/// Each variant aborts the running program. The step that raised it produces no new
/// state and no grid mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VmError {
    /// `step` was called without an explicit instruction while the program counter
    /// lies outside the program.
    #[error("VM has halted (pc {pc} is outside a program of {len} instructions)")]
    HaltedMachine {
        /// Program counter at the time of the call.
        pc: Word,
        /// Number of instructions in the program.
        len: usize,
    },

    /// The mnemonic does not name an opcode of the instruction set.
    #[error("unrecognized instruction `{mnemonic}`")]
    UnrecognizedInstruction {
        /// The offending mnemonic.
        mnemonic: String,
    },

    /// A pop or relative stack access referenced a slot outside the stack.
    ///
    /// A pop from an empty stack reports address `-1`.
    #[error("stack underflow: address {addr} is outside a stack of {len} values")]
    StackUnderflow {
        /// The stack address that was accessed.
        addr: i64,
        /// Stack length at the time of the access.
        len: usize,
    },

    /// An `INPUT` or `OUTPUT` coordinate lies outside the grid.
    #[error("grid coordinate ({x}, {y}) is outside the {size}x{size} grid")]
    GridOutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Grid side length.
        size: usize,
    },

    /// An operand referenced a register that does not exist.
    #[error("register index {index} is out of range (0..8)")]
    RegisterOutOfRange {
        /// The offending register operand.
        index: i64,
    },
}

/// Errors raised while loading assembly programs and grids from text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The line names an opcode the machine does not know.
    #[error("line {line}: {source}")]
    Instruction {
        /// 1-based source line.
        line: usize,
        /// Underlying decode failure.
        #[source]
        source: VmError,
    },

    /// An instruction operand is not a decimal integer.
    #[error("line {line}: invalid operand `{token}`")]
    InvalidOperand {
        /// 1-based source line.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A grid cell is not an integer in `0..=65535`.
    #[error("line {line}: invalid grid value `{token}`")]
    InvalidGridValue {
        /// 1-based source line.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// The grid text has more rows or columns than the configured grid.
    #[error("line {line}: {source}")]
    Grid {
        /// 1-based source line.
        line: usize,
        /// The out-of-bounds write that was rejected.
        #[source]
        source: VmError,
    },

    /// The file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading, validating or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config `{path}`: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// The grid side length is zero.
    #[error("io_size must be at least 1")]
    ZeroGridSize,

    /// The grid side length exceeds what word coordinates can address.
    #[error("io_size {size} exceeds the maximum of {max}")]
    GridTooLarge {
        /// Configured side length.
        size: usize,
        /// Largest supported side length.
        max: usize,
    },

    /// The supplied input grid does not match the configured side length.
    #[error("input grid is {actual}x{actual} but the machine is configured for {expected}x{expected}")]
    GridSizeMismatch {
        /// Configured side length.
        expected: usize,
        /// Side length of the supplied grid.
        actual: usize,
    },
}
