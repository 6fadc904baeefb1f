//! Common utilities and types used throughout the VM.
//!
//! This module provides the building blocks shared by every other component. It includes:
//! 1. **Constants:** The word type, register layout and default grid size.
//! 2. **Error Handling:** Execution faults, loader errors and configuration errors.
//! 3. **Register Management:** The bounds-checked register file.

/// Machine-wide constants.
pub mod constants;

/// Error types for execution, loading and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MAX_WORD, Word};
pub use error::{ConfigError, LoadError, VmError};
pub use reg::RegisterFile;
