//! Simulator: owns the machine together with its run policy and statistics.
//!
//! The [`Vm`] only knows how to take one step. The simulator decides how many steps
//! to take, logs them, counts them and optionally keeps a snapshot of every state
//! for stepping backwards through a run.

use tracing::{debug, error, trace, warn};

use crate::common::error::{ConfigError, VmError};
use crate::config::{Config, GeneralConfig};
use crate::core::arch::grid::Grid;
use crate::core::vm::state::State;
use crate::core::vm::{StepInfo, Vm};
use crate::isa::program::Program;
use crate::stats::SimStats;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program counter left the program.
    Halted {
        /// Steps taken in this run.
        steps: u64,
    },
    /// The configured step ceiling was reached first.
    StepLimit {
        /// Steps taken in this run.
        steps: u64,
    },
}

/// Top-level simulator: machine + run policy + statistics.
#[derive(Debug)]
pub struct Simulator {
    /// The machine being driven.
    pub vm: Vm,
    /// Statistics accumulated over every `tick`.
    pub stats: SimStats,
    trace: bool,
    max_steps: Option<u64>,
    history: Option<Vec<State>>,
}

impl Simulator {
    /// Wraps a machine with the given run policy.
    pub fn new(vm: Vm, general: &GeneralConfig) -> Self {
        Self {
            vm,
            stats: SimStats::default(),
            trace: general.trace_instructions,
            max_steps: general.max_steps,
            history: None,
        }
    }

    /// Builds the machine described by `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GridSizeMismatch`] if `input` is not
    /// `machine.io_size` on a side, or the error reported by
    /// [`Config::validate`].
    pub fn from_config(program: Program, input: Grid, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        if input.size() != config.machine.io_size {
            return Err(ConfigError::GridSizeMismatch {
                expected: config.machine.io_size,
                actual: input.size(),
            });
        }
        let vm = Vm::new(program, input, config.machine.dialect);
        Ok(Self::new(vm, &config.general))
    }

    /// Records a snapshot of the state after every step, starting with the current one.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.history = Some(vec![self.vm.snapshot()]);
        self
    }

    /// Recorded states, oldest first. Empty unless [`with_history`](Self::with_history)
    /// was used.
    pub fn history(&self) -> &[State] {
        self.history.as_deref().unwrap_or_default()
    }

    /// Executes one step, updating statistics and history.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the machine.
    pub fn tick(&mut self) -> Result<StepInfo, VmError> {
        let info = self.vm.step().inspect_err(|e| {
            error!(pc = self.vm.state().program_counter(), error = %e, "execution fault");
        })?;

        if self.trace {
            trace!(
                pc = info.pc,
                instruction = %info.instruction,
                state = %self.vm.state(),
                "executed"
            );
        }

        self.stats.record(&info, self.vm.state().stack().len());
        if let Some(history) = self.history.as_mut() {
            history.push(self.vm.snapshot());
        }
        Ok(info)
    }

    /// Steps until the program halts or the step ceiling is reached.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by the machine.
    pub fn run(&mut self) -> Result<RunOutcome, VmError> {
        debug!(
            instructions = self.vm.program().len(),
            dialect = self.vm.dialect().name(),
            max_steps = ?self.max_steps,
            "starting run"
        );

        let mut steps = 0;
        while self.vm.is_running() {
            if self.max_steps.is_some_and(|limit| steps >= limit) {
                warn!(steps, pc = self.vm.state().program_counter(), "step limit reached");
                return Ok(RunOutcome::StepLimit { steps });
            }
            let _ = self.tick()?;
            steps += 1;
        }

        debug!(steps, pc = self.vm.state().program_counter(), "halted");
        Ok(RunOutcome::Halted { steps })
    }
}
