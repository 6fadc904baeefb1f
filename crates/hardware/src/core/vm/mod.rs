//! Virtual machine.
//!
//! This module ties the machine together. It provides:
//! 1. **Construction:** A [`Vm`] owns a program, an input grid, an output grid and a state.
//! 2. **Stepping:** `step` fetches at the PC and commits the executor's transition.
//! 3. **Inspection:** Read-only access to the state, grids and program, plus `snapshot`.
//!
//! The machine does no logging and applies no step limit; both are policies of the
//! driver in [`sim::simulator`](crate::sim::simulator).

/// State-transition function.
pub mod execution;

/// Operand dialects and their resolvers.
pub mod operands;

/// Registers, stack and telemetry.
pub mod state;

use self::execution::{Effect, Transition};
use self::operands::Dialect;
use self::state::State;
use crate::common::constants::Word;
use crate::common::error::VmError;
use crate::core::arch::grid::Grid;
use crate::isa::instruction::Instruction;
use crate::isa::program::Program;

/// Record of one committed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Program counter before the step.
    pub pc: Word,
    /// Instruction that was executed.
    pub instruction: Instruction,
    /// Its side effect.
    pub effect: Effect,
}

/// A single machine instance.
///
/// Instances share nothing, so separate machines may run on separate threads. One
/// instance is driven by one caller at a time through `&mut self`.
#[derive(Clone, Debug)]
pub struct Vm {
    program: Program,
    dialect: Dialect,
    state: State,
    input: Grid,
    output: Grid,
}

impl Vm {
    /// Creates a machine with zeroed registers, an empty stack and a zeroed output
    /// grid the same size as `input`.
    pub fn new(program: Program, input: Grid, dialect: Dialect) -> Self {
        let output = Grid::new(input.size());
        Self {
            program,
            dialect,
            state: State::new(),
            input,
            output,
        }
    }

    /// Whether the program counter addresses an instruction.
    pub fn is_running(&self) -> bool {
        usize::from(self.state.program_counter()) < self.program.len()
    }

    /// Executes the instruction at the program counter.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::HaltedMachine`] if the machine is not running, or the fault
    /// raised by the instruction. On error the state and output grid are unchanged.
    pub fn step(&mut self) -> Result<StepInfo, VmError> {
        let pc = self.state.program_counter();
        let inst = *self
            .program
            .get(usize::from(pc))
            .ok_or(VmError::HaltedMachine {
                pc,
                len: self.program.len(),
            })?;
        self.commit(pc, inst)
    }

    /// Executes `inst` as if it were at the program counter, whether or not the
    /// machine is running.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the instruction. On error the state and output
    /// grid are unchanged.
    pub fn step_with(&mut self, inst: Instruction) -> Result<StepInfo, VmError> {
        self.commit(self.state.program_counter(), inst)
    }

    /// Steps until the machine halts, returning the number of steps taken.
    ///
    /// A program that never halts never returns; use
    /// [`Simulator`](crate::sim::simulator::Simulator) to bound execution.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised.
    pub fn run(&mut self) -> Result<u64, VmError> {
        let mut steps = 0;
        while self.is_running() {
            let _ = self.step()?;
            steps += 1;
        }
        Ok(steps)
    }

    fn commit(&mut self, pc: Word, inst: Instruction) -> Result<StepInfo, VmError> {
        let Transition { state, effect } =
            execution::execute(self.dialect, &self.state, inst, &self.input, &self.output)?;

        debug_assert_eq!(
            state.stack().len() as i64 - self.state.stack().len() as i64,
            i64::from(inst.opcode.stack_delta(self.dialect)),
            "stack delta mismatch for {inst}"
        );

        if let Effect::Output { x, y, value } = effect {
            self.output.write(usize::from(x), usize::from(y), value)?;
        }
        self.state = state;

        Ok(StepInfo {
            pc,
            instruction: inst,
            effect,
        })
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> State {
        self.state.clone()
    }

    /// Current state.
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Mutable state, for debuggers and test setup.
    pub const fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// The program being executed.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Operand dialect.
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Input grid.
    pub const fn input_grid(&self) -> &Grid {
        &self.input
    }

    /// Output grid.
    pub const fn output_grid(&self) -> &Grid {
        &self.output
    }
}
