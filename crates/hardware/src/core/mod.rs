//! Machine core.
//!
//! This module contains the machine's storage, its execution unit and the virtual
//! machine that drives them.

/// Storage components (stack, grids).
pub mod arch;

/// Execution units (ALU).
pub mod units;

/// The virtual machine, its state and the instruction executor.
pub mod vm;

pub use self::vm::Vm;
