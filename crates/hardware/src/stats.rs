//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Step count:** Total instructions executed.
//! 2. **Instruction mix:** Counts per opcode mnemonic.
//! 3. **Control flow:** `JUMPIF` evaluations split into taken and not taken.
//! 4. **Grid traffic:** Input cells read and output cells written.
//! 5. **Stack usage:** Peak stack depth observed after any step.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::core::vm::StepInfo;
use crate::core::vm::execution::Effect;

/// Statistics for one run.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Instructions executed.
    pub steps: u64,
    /// Instructions executed, by mnemonic.
    pub opcode_counts: BTreeMap<&'static str, u64>,
    /// `JUMPIF`s whose condition was zero.
    pub jumps_taken: u64,
    /// `JUMPIF`s that fell through.
    pub jumps_not_taken: u64,
    /// Input grid cells read.
    pub grid_reads: u64,
    /// Output grid cells written.
    pub grid_writes: u64,
    /// Largest stack length seen after a step.
    pub peak_stack_depth: usize,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            opcode_counts: BTreeMap::new(),
            jumps_taken: 0,
            jumps_not_taken: 0,
            grid_reads: 0,
            grid_writes: 0,
            peak_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Accounts for one committed step that left `stack_depth` values on the stack.
    pub fn record(&mut self, info: &StepInfo, stack_depth: usize) {
        self.steps += 1;
        *self
            .opcode_counts
            .entry(info.instruction.opcode.mnemonic())
            .or_insert(0) += 1;

        match info.effect {
            Effect::Jump { taken: true, .. } => self.jumps_taken += 1,
            Effect::Jump { taken: false, .. } => self.jumps_not_taken += 1,
            Effect::Input { .. } => self.grid_reads += 1,
            Effect::Output { .. } => self.grid_writes += 1,
            Effect::None => {}
        }

        self.peak_stack_depth = self.peak_stack_depth.max(stack_depth);
    }

    /// Number of times the opcode with `mnemonic` was executed.
    pub fn count(&self, mnemonic: &str) -> u64 {
        self.opcode_counts.get(mnemonic).copied().unwrap_or(0)
    }

    /// Prints a report to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.steps as f64 / elapsed / 1e6
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("EXECUTION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {elapsed:.4} s");
        println!("steps                    {}", self.steps);
        println!("rate                     {rate:.2} M steps/s");
        println!("peak_stack_depth         {}", self.peak_stack_depth);
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  jumps_taken            {}", self.jumps_taken);
        println!("  jumps_not_taken        {}", self.jumps_not_taken);
        println!("----------------------------------------------------------");
        println!("GRID I/O");
        println!("  reads                  {}", self.grid_reads);
        println!("  writes                 {}", self.grid_writes);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        for (mnemonic, count) in &self.opcode_counts {
            let pct = if self.steps > 0 {
                *count as f64 / self.steps as f64 * 100.0
            } else {
                0.0
            };
            println!("  {mnemonic:<22} {count:<10} ({pct:.1}%)");
        }
        println!("==========================================================");
    }
}
