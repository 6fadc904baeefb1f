//! Instruction Set Definitions.
//!
//! Contains the opcode set, the instruction triple, the program store and the
//! disassembler. Operand meaning is resolved at execution time by the machine's
//! dialect (see [`Dialect`](crate::core::vm::operands::Dialect)).

/// Program disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction triple and decoding.
pub mod instruction;

/// Closed opcode set and per-opcode metadata.
pub mod opcode;

/// Immutable program store.
pub mod program;

pub use instruction::Instruction;
pub use opcode::{AluOp, Opcode};
pub use program::Program;
