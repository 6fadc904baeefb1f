//! Operand dialects.
//!
//! Two conventions exist for where an instruction finds its operands and leaves its
//! result:
//! 1. **Stack operands:** operators pop their inputs and push their result; `INPUT`,
//!    `OUTPUT` and `JUMPIF` pop coordinates and conditions.
//! 2. **Register operands:** operators read `arg1`/`arg2` as registers and write the
//!    result back to `arg1`; coordinates and conditions come from registers.
//!
//! A [`Dialect`] is chosen once per machine. The executor is written against
//! [`OperandResolver`], so the two dialects differ only in this module.

use serde::{Deserialize, Serialize};

use super::state::State;
use crate::common::constants::Word;
use crate::common::error::VmError;

/// Operand-addressing convention, fixed at machine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Dialect {
    /// Operators take their inputs from, and leave results on, the stack.
    #[default]
    #[serde(alias = "STACK_OPERANDS", alias = "stack")]
    Stack,
    /// Operators take their inputs from, and leave results in, registers.
    #[serde(alias = "REGISTER_OPERANDS", alias = "register")]
    Register,
}

impl Dialect {
    /// The operand resolver implementing this dialect.
    pub const fn resolver(self) -> &'static dyn OperandResolver {
        match self {
            Self::Stack => &StackOperands,
            Self::Register => &RegisterOperands,
        }
    }

    /// Short lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Register => "register",
        }
    }
}

/// Where instructions fetch operands from and deliver results to.
///
/// `r` and `s` are the instruction's first and second operands. Implementations
/// mutate the successor state they are handed; the executor discards it on error.
pub trait OperandResolver: Sync {
    /// Executes `CONST arg1 arg2`. Immediates wrap into a word, so `-1` loads 0xFFFF.
    fn constant(&self, state: &mut State, arg1: i32, arg2: i32) -> Result<(), VmError>;

    /// Fetches the operand of `NOT`.
    fn unary(&self, state: &mut State, r: i32) -> Result<Word, VmError>;

    /// Fetches `(x, y)` for a binary operator.
    fn binary(&self, state: &mut State, r: i32, s: i32) -> Result<(Word, Word), VmError>;

    /// Delivers the result of `NOT` or a binary operator.
    fn result(&self, state: &mut State, r: i32, val: Word) -> Result<(), VmError>;

    /// Fetches the `JUMPIF` condition.
    fn condition(&self, state: &mut State, s: i32) -> Result<Word, VmError>;

    /// Fetches `(x, y)` grid coordinates for `INPUT` and `OUTPUT`.
    fn coordinates(&self, state: &mut State, r: i32, s: i32) -> Result<(Word, Word), VmError>;
}

/// Stack-operand dialect.
#[derive(Debug)]
pub struct StackOperands;

impl StackOperands {
    /// Pops `y`, then `x`, so `x` is the value pushed first.
    fn pop_pair(state: &mut State) -> Result<(Word, Word), VmError> {
        let y = state.pop()?;
        let x = state.pop()?;
        Ok((x, y))
    }
}

impl OperandResolver for StackOperands {
    /// Pushes `arg1`; assemblers emit the one-operand form `CONST k`.
    fn constant(&self, state: &mut State, k: i32, _arg2: i32) -> Result<(), VmError> {
        state.push(k as Word);
        Ok(())
    }

    fn unary(&self, state: &mut State, _r: i32) -> Result<Word, VmError> {
        state.pop()
    }

    fn binary(&self, state: &mut State, _r: i32, _s: i32) -> Result<(Word, Word), VmError> {
        Self::pop_pair(state)
    }

    fn result(&self, state: &mut State, _r: i32, val: Word) -> Result<(), VmError> {
        state.push(val);
        Ok(())
    }

    fn condition(&self, state: &mut State, _s: i32) -> Result<Word, VmError> {
        state.pop()
    }

    fn coordinates(&self, state: &mut State, _r: i32, _s: i32) -> Result<(Word, Word), VmError> {
        Self::pop_pair(state)
    }
}

/// Register-operand dialect.
#[derive(Debug)]
pub struct RegisterOperands;

impl OperandResolver for RegisterOperands {
    fn constant(&self, state: &mut State, r: i32, k: i32) -> Result<(), VmError> {
        state.set_reg(r, k as Word)
    }

    fn unary(&self, state: &mut State, r: i32) -> Result<Word, VmError> {
        state.reg(r)
    }

    fn binary(&self, state: &mut State, r: i32, s: i32) -> Result<(Word, Word), VmError> {
        Ok((state.reg(r)?, state.reg(s)?))
    }

    fn result(&self, state: &mut State, r: i32, val: Word) -> Result<(), VmError> {
        state.set_reg(r, val)
    }

    fn condition(&self, state: &mut State, s: i32) -> Result<Word, VmError> {
        state.reg(s)
    }

    fn coordinates(&self, state: &mut State, r: i32, s: i32) -> Result<(Word, Word), VmError> {
        Ok((state.reg(r)?, state.reg(s)?))
    }
}
