//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the VM. It includes:
//! 1. **Register Layout:** Register count and the indices of the special-purpose registers.
//! 2. **Word Constants:** The machine word type and its maximum value.
//! 3. **Grid Constants:** The default side length of the I/O grids.

/// Machine word. Every register, stack slot and grid cell holds one.
pub type Word = u16;

/// Largest value a machine word can hold.
pub const MAX_WORD: Word = Word::MAX;

/// Number of slots in the register file.
pub const REGISTER_COUNT: usize = 8;

/// Register holding the index of the next instruction to execute.
pub const PC_REGISTER: usize = 0;

/// Register holding the base offset for relative stack addressing (`LOAD`/`STORE`).
pub const BOS_REGISTER: usize = 1;

/// Register holding the value transferred by `INPUT` and `OUTPUT`.
pub const IO_REGISTER: usize = 2;

/// Side length of the input and output grids when none is configured.
pub const DEFAULT_IO_SIZE: usize = 16;

/// Largest grid side length. Coordinates are words, so no cell beyond it is addressable.
pub const MAX_IO_SIZE: usize = 1 << 16;
