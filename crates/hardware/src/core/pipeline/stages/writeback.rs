//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the cycle. It commits the
//! instruction's result to the register file. Writes to register zero are
//! swallowed by the register file itself.

use crate::common::SimError;
use crate::core::Cpu;

/// Executes the writeback stage.
///
/// Commits the value carried by the writeback record to the destination
/// register when the instruction writes one. Branches, stores, and idle
/// cycles leave the register file untouched.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Errors
///
/// Returns [`SimError::RegisterIndex`] if the destination index is out of
/// range.
pub fn wb_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let wb = cpu.state.writeback.clone();

    if wb.reg_write {
        cpu.regs.write(wb.rd, wb.value)?;
        if cpu.trace {
            eprintln!("WB  x{} <= {:#x}", wb.rd, wb.value);
        }
    }
    Ok(())
}
