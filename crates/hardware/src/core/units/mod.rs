//! Execution units.
//!
//! The machine has a single functional unit: the word ALU.

/// Word arithmetic, logic, shift and comparison operations.
pub mod alu;
