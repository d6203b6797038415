//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the cycle. It performs the
//! following:
//! 1. **Decoding:** Converts raw 32-bit instruction bits into control signals
//!    using the ISA decoder.
//! 2. **Register Read:** Reads the source operands (rs1, rs2) from the
//!    register file.
//! 3. **Control Generation:** Generates the ALU and memory control signals
//!    for the Execute stage.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::ExEntry;
use crate::core::pipeline::signals::{AluOp, ControlSignals, OpBSrc};
use crate::isa::decode::decode as instruction_decode;
use crate::isa::{funct3, funct7, opcodes};

/// Executes the instruction decode stage.
///
/// Takes the instruction word forwarded by fetch, decodes its fields, reads
/// the source registers, and pushes operands plus control signals into the
/// execute record. A cycle in which fetch forwarded nothing leaves the
/// execute record idle.
///
/// Branches and stores carry destination register zero so that no writeback
/// occurs for them. `JAL` has no funct3 field of its own; decode stamps the
/// record with the reserved jump selector so execute can recognize it.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Errors
///
/// Returns [`SimError::UnmappedDecode`] when the word's opcode or function
/// codes name no supported instruction, and [`SimError::RegisterIndex`] if an
/// operand read fails.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(word) = cpu.state.decode.instr else {
        return Ok(());
    };

    let cycle = cpu.stats.cycles;
    let d = instruction_decode(word);

    let mut c = ControlSignals {
        b_src: OpBSrc::Imm,
        alu: AluOp::Add,
        ..Default::default()
    };
    let mut f3 = d.funct3;

    match d.opcode {
        opcodes::OP_REG => {
            c.reg_write = true;
            c.b_src = OpBSrc::Reg2;
            c.alu = match d.funct3 {
                funct3::ADD_SUB => match d.funct7 {
                    funct7::BASE => AluOp::Add,
                    funct7::SUB => AluOp::Sub,
                    _ => return Err(SimError::UnmappedDecode { word, cycle }),
                },
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                _ => return Err(SimError::UnmappedDecode { word, cycle }),
            };
        }
        opcodes::OP_IMM => {
            c.reg_write = true;
            c.alu = match d.funct3 {
                funct3::ADD_SUB => AluOp::Add,
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                _ => return Err(SimError::UnmappedDecode { word, cycle }),
            };
        }
        opcodes::OP_LOAD => {
            if d.funct3 != funct3::LW {
                return Err(SimError::UnmappedDecode { word, cycle });
            }
            c.reg_write = true;
            c.mem_read = true;
        }
        opcodes::OP_STORE => {
            if d.funct3 != funct3::SW {
                return Err(SimError::UnmappedDecode { word, cycle });
            }
            c.mem_write = true;
        }
        opcodes::OP_BRANCH => {
            if d.funct3 != funct3::BEQ && d.funct3 != funct3::BNE {
                return Err(SimError::UnmappedDecode { word, cycle });
            }
            c.branch = true;
            c.b_src = OpBSrc::Reg2;
            c.alu = AluOp::Sub;
        }
        opcodes::OP_JAL => {
            c.reg_write = true;
            c.branch = true;
            c.b_src = OpBSrc::Reg2;
            f3 = funct3::JUMP;
        }
        _ => return Err(SimError::UnmappedDecode { word, cycle }),
    }

    // JAL computes its result from the PC alone, so its rs1/rs2 bits are
    // immediate bits and must not reach the register file.
    let (rv1, rv2) = if d.opcode == opcodes::OP_JAL {
        (0, 0)
    } else {
        (cpu.regs.read(d.rs1)?, cpu.regs.read(d.rs2)?)
    };
    let rd = if c.reg_write { d.rd } else { 0 };

    if cpu.trace {
        eprintln!("ID  inst={word:#010x} rd={rd} imm={}", d.imm);
    }

    cpu.state.execute = ExEntry {
        rv1,
        rv2,
        imm: d.imm,
        rd,
        funct3: f3,
        ctrl: c,
    };
    Ok(())
}
