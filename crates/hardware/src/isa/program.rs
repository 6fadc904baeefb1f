//! Program store.
//!
//! A [`Program`] is the immutable, ordered instruction sequence a machine executes.
//! The program counter selects the next instruction; nothing rewrites the program
//! at runtime.

use std::ops::Index;
use std::slice;

use super::instruction::Instruction;
use crate::common::error::VmError;

/// Immutable instruction sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an instruction sequence.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Decodes a sequence of `(mnemonic, arg1, arg2)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::UnrecognizedInstruction`] for the first unknown mnemonic.
    pub fn from_triples<'a, I>(triples: I) -> Result<Self, VmError>
    where
        I: IntoIterator<Item = (&'a str, i32, i32)>,
    {
        triples
            .into_iter()
            .map(|(mnemonic, arg1, arg2)| Instruction::decode(mnemonic, arg1, arg2))
            .collect()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Iterates over the instructions in order.
    pub fn iter(&self) -> slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// The instructions as a slice.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
