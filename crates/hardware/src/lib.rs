//! Grid virtual machine library.
//!
//! This crate implements a small register-and-stack virtual machine that runs
//! hand-written assembly against a square input grid and produces an output grid:
//! 1. **Core:** Register file, stack, grids, and the per-instruction transition function.
//! 2. **ISA:** The closed opcode set, instructions, programs and the disassembler.
//! 3. **Dialects:** Stack-operand and register-operand addressing, chosen per machine.
//! 4. **Simulation:** Text loader, bounded driver loop, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use gridvm_core::{Dialect, Grid, Program, Vm};
//!
//! let program = Program::from_triples([("CONST", 3, 7), ("PUSH", 3, 0)]).unwrap();
//! let mut vm = Vm::new(program, Grid::new(16), Dialect::Register);
//! let steps = vm.run().unwrap();
//!
//! assert_eq!(steps, 2);
//! assert_eq!(vm.state().registers().read(3).unwrap(), 7);
//! assert_eq!(vm.state().stack().as_slice(), &[7]);
//! assert!(!vm.is_running());
//! ```

/// Common types and constants (word, registers, errors).
pub mod common;
/// Run configuration (defaults, JSON loading, validation).
pub mod config;
/// Machine core (storage, ALU, VM and executor).
pub mod core;
/// Instruction set (opcodes, instructions, programs, disassembly).
pub mod isa;
/// Loader and simulator driver.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Fatal execution faults.
pub use crate::common::error::VmError;
/// Square I/O grid.
pub use crate::core::arch::grid::Grid;
/// Operand-addressing dialect.
pub use crate::core::vm::operands::Dialect;
/// Machine state (registers, stack, telemetry).
pub use crate::core::vm::state::State;
/// The virtual machine.
pub use crate::core::vm::Vm;
/// Decoded instruction and opcode.
pub use crate::isa::{Instruction, Opcode, Program};
/// Driver that owns a machine and its run policy.
pub use crate::sim::Simulator;
