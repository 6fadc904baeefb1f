//! Machine storage components.
//!
//! This module contains the storage the instruction set operates on, next to the
//! register file in [`common::reg`](crate::common::reg). It includes:
//! 1. **Stack:** The growable value stack with push/pop and indexed access.
//! 2. **Grid:** The square input and output matrices.

/// Square word matrices for grid I/O.
pub mod grid;

/// Growable value stack.
pub mod stack;

pub use grid::Grid;
pub use stack::Stack;
