//! Stack Memory.
//!
//! This module implements the machine's growable value stack. It provides:
//! 1. **LIFO Access:** `push` and `pop` at the end of the stack.
//! 2. **Indexed Access:** `read` and `write` by absolute address, used by `LOAD`/`STORE`.
//! 3. **Bounds Enforcement:** Any access outside the current stack fails with `StackUnderflow`.

use serde::Serialize;

use crate::common::constants::Word;
use crate::common::error::VmError;

/// Growable stack of machine words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Stack {
    values: Vec<Word>,
}

impl Stack {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends a value.
    pub fn push(&mut self, val: Word) {
        self.values.push(val);
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Word, VmError> {
        self.values.pop().ok_or(VmError::StackUnderflow {
            addr: -1,
            len: 0,
        })
    }

    /// Reads the slot at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackUnderflow`] if `addr >= len()`.
    pub fn read(&self, addr: usize) -> Result<Word, VmError> {
        self.values
            .get(addr)
            .copied()
            .ok_or_else(|| self.out_of_bounds(addr))
    }

    /// Overwrites the slot at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackUnderflow`] if `addr >= len()`.
    pub fn write(&mut self, addr: usize, val: Word) -> Result<(), VmError> {
        let len = self.values.len();
        let slot = self.values.get_mut(addr).ok_or(VmError::StackUnderflow {
            addr: addr as i64,
            len,
        })?;
        *slot = val;
        Ok(())
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The stack contents, bottom first.
    pub fn as_slice(&self) -> &[Word] {
        &self.values
    }

    fn out_of_bounds(&self, addr: usize) -> VmError {
        VmError::StackUnderflow {
            addr: addr as i64,
            len: self.values.len(),
        }
    }
}

impl From<Vec<Word>> for Stack {
    fn from(values: Vec<Word>) -> Self {
        Self { values }
    }
}
