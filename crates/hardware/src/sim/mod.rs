//! Simulation utilities and program loading.
//!
//! Provides the text loader for programs and grids, and the simulator that drives a
//! machine under a run policy.

/// Assembly and grid text loading.
pub mod loader;

/// Bounded, traced, instrumented execution of a machine.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
