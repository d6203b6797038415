//! Execute (EX) Stage.
//!
//! This module implements the third stage of the cycle. It performs the
//! following:
//! 1. **Operand Selection:** Chooses the second ALU operand from the register
//!    value or the immediate.
//! 2. **Arithmetic Execution:** Performs the ALU operation with wrapping
//!    two's complement arithmetic.
//! 3. **Branch Resolution:** Tests the branch condition and redirects the
//!    next-cycle PC for taken branches and jumps.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemEntry;
use crate::core::pipeline::signals::{AluOp, OpBSrc};
use crate::isa::funct3;
use crate::isa::instruction::INSTRUCTION_BYTES;

/// Executes the instruction execute stage.
///
/// Consumes the record produced by decode, performs the ALU operation, and
/// resolves control flow. Conditional branches test the subtraction result
/// against zero; the jump selector is unconditionally taken and replaces the
/// ALU result with the link address (the jump's own PC plus four). Taken
/// redirects overwrite the sequential next-cycle PC that fetch installed.
///
/// The result is pushed into the memory-stage record together with the store
/// operand.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(cpu: &mut Cpu) {
    let ex = cpu.state.execute.clone();

    let op_a = ex.rv1;
    let op_b = match ex.ctrl.b_src {
        OpBSrc::Reg2 => ex.rv2,
        OpBSrc::Imm => ex.imm,
    };

    let mut alu = match ex.ctrl.alu {
        AluOp::Add => op_a.wrapping_add(op_b),
        AluOp::Sub => op_a.wrapping_sub(op_b),
        AluOp::Xor => op_a ^ op_b,
        AluOp::Or => op_a | op_b,
        AluOp::And => op_a & op_b,
    };

    if cpu.trace {
        eprintln!("EX  a={op_a} b={op_b} alu={alu}");
    }

    if ex.ctrl.branch {
        let taken = match ex.funct3 {
            funct3::BEQ => alu == 0,
            funct3::BNE => alu != 0,
            funct3::JUMP => true,
            _ => false,
        };
        if taken {
            // The fetch record still holds this instruction's own address;
            // fetch wrote the incremented PC to the next-cycle record only.
            let pc = cpu.state.fetch.pc;
            if ex.funct3 == funct3::JUMP {
                alu = pc.wrapping_add(INSTRUCTION_BYTES) as i32;
            }
            cpu.next.fetch.pc = pc.wrapping_add(ex.imm as u32);
            if cpu.trace {
                eprintln!("EX  redirect target={:#010x}", cpu.next.fetch.pc);
            }
        }
    }

    cpu.state.memory = MemEntry {
        alu,
        store_data: ex.rv2,
        rd: ex.rd,
        ctrl: ex.ctrl,
    };
}
