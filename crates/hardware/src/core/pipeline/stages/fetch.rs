//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the cycle. It reads the
//! instruction word addressed by the current program counter, advances the
//! next-cycle PC past it, and detects the two halt conditions: the all-ones
//! sentinel opcode and fetch running past the end of the instruction store.

use crate::core::Cpu;
use crate::core::pipeline::latches::IfEntry;
use crate::isa::instruction::{INSTRUCTION_BYTES, InstructionBits};
use crate::isa::opcodes;

/// Executes the instruction fetch stage.
///
/// Reads the instruction word at the current PC from the instruction store and
/// forwards it to the decode stage. The default next-cycle PC is the current
/// PC plus four; a taken branch or jump overrides it later in the cycle.
///
/// A word whose opcode field is the halt sentinel stops the machine with the
/// PC held at the sentinel's address. A fetch past the end of the store stops
/// the machine the same way. In both cases the next fetch record is marked
/// idle and no instruction enters decode this cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.state.fetch.pc;

    match cpu.imem.fetch(pc) {
        Some(word) if word.opcode() == opcodes::OP_HALT => {
            if cpu.trace {
                eprintln!("IF  pc={pc:#010x} # halt");
            }
            cpu.next.fetch = IfEntry { pc, idle: true };
            cpu.halted = true;
        }
        Some(word) => {
            if cpu.trace {
                eprintln!("IF  pc={pc:#010x} inst={word:#010x}");
            }
            cpu.next.fetch = IfEntry {
                pc: pc.wrapping_add(INSTRUCTION_BYTES),
                idle: false,
            };
            cpu.state.decode.instr = Some(word);
            cpu.stats.instructions_retired += 1;
        }
        None => {
            if cpu.trace {
                eprintln!("IF  pc={pc:#010x} # end of image");
            }
            cpu.next.fetch = IfEntry { pc, idle: true };
            cpu.halted = true;
        }
    }
}
