//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the cycle. Loads read a word
//! from data memory at the address computed by execute; stores write the
//! second register operand there. Every other instruction passes its ALU
//! result through untouched.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::WbEntry;

/// Executes the memory access stage.
///
/// For a load the writeback value becomes the word read from data memory; for
/// a store the ALU result is used as the address and the store operand is
/// written there. Instructions that touch no memory forward the ALU result to
/// writeback unchanged.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Errors
///
/// Returns [`SimError::DataAddress`] when a load or store address is negative
/// or past the configured data memory limit.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let mem = cpu.state.memory.clone();

    let mut value = mem.alu;
    if mem.ctrl.mem_read {
        value = cpu.dmem.read(mem.alu)?;
        if cpu.trace {
            eprintln!("MEM LOAD addr={:#x} data={value:#x}", mem.alu);
        }
    } else if mem.ctrl.mem_write {
        cpu.dmem.write(mem.alu, mem.store_data)?;
        if cpu.trace {
            eprintln!("MEM STORE addr={:#x} data={:#x}", mem.alu, mem.store_data);
        }
    }

    cpu.state.writeback = WbEntry {
        value,
        rd: mem.rd,
        reg_write: mem.ctrl.reg_write,
    };
    Ok(())
}
