//! Simulator shell.
//!
//! The [`Simulator`] owns the CPU together with the result file paths. Each
//! tick runs one cycle and appends the per-cycle snapshots; the driver loops
//! on [`Simulator::tick`] until [`Simulator::halted`] reports true, then
//! [`Simulator::finalize`] writes the data memory dump and prints the
//! performance report.

use std::path::{Path, PathBuf};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::{loader, output};

/// Top-level simulator: CPU state plus the I/O directory it reports into.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memories, stage records, stats).
    pub cpu: Cpu,
    rf_path: PathBuf,
    state_path: PathBuf,
    dmem_path: PathBuf,
}

impl Simulator {
    /// Creates a simulator over the images found in `iodir`.
    ///
    /// Loads `imem.txt` and `dmem.txt` from the directory and aims the first
    /// fetch at the configured start PC. The result files land in the same
    /// directory.
    ///
    /// # Arguments
    ///
    /// * `iodir` - Directory holding the input images and receiving results.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Errors
    ///
    /// Fails when either image cannot be read or parsed.
    pub fn new(iodir: &Path, config: &Config) -> Result<Self, SimError> {
        let imem = loader::load_instruction_image(iodir)?;
        let dmem = loader::load_data_image(iodir, config)?;
        Ok(Self {
            cpu: Cpu::new(imem, dmem, config),
            rf_path: iodir.join(output::RF_RESULT_FILE),
            state_path: iodir.join(output::STATE_RESULT_FILE),
            dmem_path: iodir.join(output::DMEM_RESULT_FILE),
        })
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Runs the stages, appends the register file and machine state
    /// snapshots labeled with the current cycle, and rolls the CPU into the
    /// next cycle. The halting cycle writes its snapshots like any other;
    /// ticking an already halted simulator does nothing.
    ///
    /// # Errors
    ///
    /// Propagates stage failures and snapshot write failures.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.cpu.halted {
            return Ok(());
        }
        self.cpu.step()?;

        let cycle = self.cpu.stats.cycles;
        output::write_register_snapshot(&self.rf_path, cycle, &self.cpu.regs.values())?;
        output::write_state_snapshot(&self.state_path, cycle, &self.cpu.next.fetch)?;

        self.cpu.advance();
        Ok(())
    }

    /// Whether the machine has reached the halt state.
    ///
    /// Once true, further ticks do nothing and the driver should stop its
    /// loop and call [`Simulator::finalize`].
    #[must_use]
    pub const fn halted(&self) -> bool {
        self.cpu.halted
    }

    /// Writes the final data memory dump and prints the performance report.
    ///
    /// # Errors
    ///
    /// Fails when the dump file cannot be written.
    pub fn finalize(&self) -> Result<(), SimError> {
        output::write_data_dump(&self.dmem_path, self.cpu.dmem.dump())?;
        self.cpu.stats.print();
        Ok(())
    }
}
