//! Instruction Execution.
//!
//! This module implements the machine's state-transition function. It performs:
//! 1. **Program Counter Advance:** Every step increments the PC before the instruction acts.
//! 2. **Dispatch:** One match arm per opcode, with operand placement delegated to the dialect.
//! 3. **Effect Reporting:** Grid reads, grid writes and jumps are returned alongside the new state.
//!
//! [`execute`] never touches the state it is given. It clones it, applies the
//! instruction to the clone and hands back the result, so a fault leaves the caller's
//! state as it was. Output grid writes are returned as an [`Effect`] for the caller to
//! apply once the step has succeeded.

use super::operands::Dialect;
use super::state::State;
use crate::common::constants::{BOS_REGISTER, IO_REGISTER, Word};
use crate::common::error::VmError;
use crate::core::arch::grid::Grid;
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;
use crate::isa::opcode::Opcode;

/// Externally visible side effect of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Registers and stack only.
    None,
    /// A `JUMPIF` was evaluated.
    Jump {
        /// Address held in the target register.
        target: Word,
        /// Whether the condition was zero and the PC was overwritten.
        taken: bool,
    },
    /// An input grid cell was read into the I/O register.
    Input {
        /// Column.
        x: Word,
        /// Row.
        y: Word,
        /// Value read.
        value: Word,
    },
    /// The I/O register is to be written to an output grid cell.
    Output {
        /// Column.
        x: Word,
        /// Row.
        y: Word,
        /// Value to write.
        value: Word,
    },
}

/// Result of a successful step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Successor state.
    pub state: State,
    /// Side effect of the step.
    pub effect: Effect,
}

/// Executes one instruction against `state`.
///
/// `input` is read by `INPUT`; `output` is only consulted for bounds so that an
/// out-of-range `OUTPUT` fails before anything is committed.
///
/// # Errors
///
/// Returns the [`VmError`] raised by the instruction. No successor state is produced.
pub fn execute(
    dialect: Dialect,
    state: &State,
    inst: Instruction,
    input: &Grid,
    output: &Grid,
) -> Result<Transition, VmError> {
    let ops = dialect.resolver();
    let Instruction {
        opcode,
        arg1: r,
        arg2: s,
    } = inst;

    let mut next = state.clone();
    let pc = next.program_counter().wrapping_add(1);
    next.registers_mut().set_pc(pc);

    let effect = match opcode {
        Opcode::Noop => Effect::None,
        Opcode::Const => {
            ops.constant(&mut next, r, s)?;
            Effect::None
        }
        Opcode::Push => {
            let val = next.reg(r)?;
            next.push(val);
            Effect::None
        }
        Opcode::Pop => {
            let val = next.pop()?;
            next.set_reg(r, val)?;
            Effect::None
        }
        Opcode::Load => {
            let addr = stack_address(&next, s)?;
            let val = next.stack().read(addr)?;
            next.set_reg(r, val)?;
            Effect::None
        }
        Opcode::Store => {
            let addr = stack_address(&next, s)?;
            let val = next.reg(r)?;
            next.stack_mut().write(addr, val)?;
            Effect::None
        }
        Opcode::Copy => {
            let val = next.reg(s)?;
            next.set_reg(r, val)?;
            Effect::None
        }
        Opcode::JumpIf => {
            let cond = ops.condition(&mut next, s)?;
            let target = next.reg(r)?;
            let taken = cond == 0;
            if taken {
                next.registers_mut().set_pc(target);
            }
            Effect::Jump { target, taken }
        }
        Opcode::Not => {
            let x = ops.unary(&mut next, r)?;
            ops.result(&mut next, r, Alu::not(x))?;
            Effect::None
        }
        Opcode::Alu(op) => {
            let (x, y) = ops.binary(&mut next, r, s)?;
            ops.result(&mut next, r, Alu::execute(op, x, y))?;
            Effect::None
        }
        Opcode::Input => {
            let (x, y) = ops.coordinates(&mut next, r, s)?;
            let value = input.read(usize::from(x), usize::from(y))?;
            next.registers_mut().write(IO_REGISTER, value)?;
            Effect::Input { x, y, value }
        }
        Opcode::Output => {
            let (x, y) = ops.coordinates(&mut next, r, s)?;
            let _ = output.index(usize::from(x), usize::from(y))?;
            Effect::Output {
                x,
                y,
                value: next.io_register(),
            }
        }
    };

    Ok(Transition {
        state: next,
        effect,
    })
}

/// Absolute stack address `BOS + reg[s]` for `LOAD`/`STORE`.
fn stack_address(state: &State, s: i32) -> Result<usize, VmError> {
    let base = state.registers().read(BOS_REGISTER)?;
    Ok(usize::from(base) + usize::from(state.reg(s)?))
}
