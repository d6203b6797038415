//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the
//! container for the entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and both memories.
//! 2. **Stage Records:** Holds the per-cycle records the five stages fill in
//!    order, plus the record set for the following cycle.
//! 3. **Cycle Control:** Steps the stages, detects the halt conditions, and
//!    rolls the machine forward one cycle at a time.

use std::mem;

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::latches::{IfEntry, StageState};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::mem::{DataMem, InstrMem};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The CPU executes one instruction per cycle by running all five stages back
/// to back, then swapping in the next-cycle record set. The fetch record of
/// the next cycle is the only carried state; every other record is rebuilt
/// from scratch each cycle.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose register file.
    pub regs: Gpr,
    /// Instruction memory.
    pub imem: InstrMem,
    /// Data memory.
    pub dmem: DataMem,
    /// Stage records for the cycle in flight.
    pub state: StageState,
    /// Stage records for the following cycle.
    pub next: StageState,
    /// Performance statistics.
    pub stats: SimStats,
    /// Set once the halt sentinel is fetched or fetch runs past the image.
    pub halted: bool,
    /// Enable per-stage tracing.
    pub trace: bool,
}

impl Cpu {
    /// Creates a new CPU instance over the given memories.
    ///
    /// # Arguments
    ///
    /// * `imem` - Instruction memory holding the program image.
    /// * `dmem` - Data memory.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with the first fetch aimed at the configured start PC.
    #[must_use]
    pub fn new(imem: InstrMem, dmem: DataMem, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            imem,
            dmem,
            state: StageState {
                fetch: IfEntry {
                    pc: config.general.start_pc,
                    idle: false,
                },
                ..Default::default()
            },
            next: StageState::default(),
            stats: SimStats::default(),
            halted: false,
            trace: config.general.trace_stages,
        }
    }

    /// Runs the five stages for the current cycle.
    ///
    /// Fetch runs first and decides whether the machine halts this cycle; a
    /// halting cycle performs no further work, leaving the register file and
    /// data memory exactly as the previous cycle left them. Otherwise the
    /// remaining four stages run in order on the fetched instruction.
    ///
    /// The caller observes the outcome through [`Cpu::halted`] and the
    /// next-cycle fetch record, then commits it with [`Cpu::advance`].
    ///
    /// # Errors
    ///
    /// Propagates decode, memory, and register file errors from the stages.
    /// The machine state is not rolled back on error.
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }
        fetch_stage(self);
        if self.halted {
            return Ok(());
        }
        decode_stage(self)?;
        execute_stage(self);
        mem_stage(self)?;
        wb_stage(self)?;
        Ok(())
    }

    /// Rolls the machine forward into the next cycle.
    ///
    /// The next-cycle records become current and a fresh default set takes
    /// their place. The cycle counter advances only for functional cycles;
    /// the halting cycle does no work and is not counted.
    pub fn advance(&mut self) {
        self.state = mem::take(&mut self.next);
        if !self.halted {
            self.stats.cycles += 1;
        }
    }
}
