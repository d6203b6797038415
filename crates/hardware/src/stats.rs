//! Simulation statistics collection and reporting.
//!
//! This module tracks the performance counters for the simulator:
//! 1. **Cycles:** Completed functional cycles. The halting cycle performs no
//!    work and is not counted.
//! 2. **Instructions:** Words fetched and executed, excluding the halt
//!    sentinel.
//! 3. **Derived metrics:** Average CPI and IPC, reported at the end of the
//!    run.

/// Counters collected over a simulation run.
///
/// In a single-cycle machine every executed instruction costs exactly one
/// cycle, so CPI and IPC both come out at one for any program that runs at
/// least one instruction. The counters are kept separate anyway so the
/// derived metrics stay honest about what was measured.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,
}

impl SimStats {
    /// Average cycles per instruction, or zero when nothing retired.
    #[must_use]
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Instructions per cycle, or zero when no cycle completed.
    #[must_use]
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints the end-of-run performance report to stdout.
    pub fn print(&self) {
        println!("Total Execution Cycles: {}", self.cycles);
        println!("Total Instructions Executed: {}", self.instructions_retired);
        println!("Average CPI: {:.2}", self.cpi());
        println!("Instructions Per Cycle (IPC): {:.2}", self.ipc());
    }
}
