//! Stage record structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five logical stages:
//! Fetch → Decode → Execute → Memory → Writeback. With a single instruction in
//! flight, the records of one cycle are filled in stage order and discarded
//! when the cycle completes; only the fetch record survives into the next
//! cycle, carrying the updated program counter.

use crate::core::pipeline::signals::ControlSignals;

/// Entry produced by the fetch stage.
///
/// Carries the program counter and the idle marker that signals the halt
/// condition to the rest of the machine.
#[derive(Clone, Debug, Default)]
pub struct IfEntry {
    /// Program counter of the instruction being fetched.
    pub pc: u32,
    /// Whether fetch produced no instruction this cycle (sentinel or end of image).
    pub idle: bool,
}

/// Entry consumed by the decode stage.
#[derive(Clone, Debug, Default)]
pub struct IdEntry {
    /// Raw 32-bit instruction encoding, or `None` on an idle cycle.
    pub instr: Option<u32>,
}

/// Entry consumed by the execute stage.
///
/// Contains decoded operand values, the sign-extended immediate, and the
/// control signals that steer the remainder of the cycle.
#[derive(Clone, Debug, Default)]
pub struct ExEntry {
    /// Value read from the rs1 register.
    pub rv1: i32,
    /// Value read from the rs2 register.
    pub rv2: i32,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Destination register index (rd).
    pub rd: usize,
    /// Branch condition selector, or the reserved jump marker for `JAL`.
    pub funct3: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry consumed by the memory stage.
#[derive(Clone, Debug, Default)]
pub struct MemEntry {
    /// ALU computation result, or the address for memory operations.
    pub alu: i32,
    /// Data to be stored (for store instructions).
    pub store_data: i32,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals for the memory and writeback stages.
    pub ctrl: ControlSignals,
}

/// Entry consumed by the writeback stage.
#[derive(Clone, Debug, Default)]
pub struct WbEntry {
    /// Final value to write back (loaded word for loads, ALU result otherwise).
    pub value: i32,
    /// Destination register index (rd).
    pub rd: usize,
    /// Enable write to the destination register.
    pub reg_write: bool,
}

/// The complete set of stage records for one cycle.
///
/// The core holds two of these: the current cycle's records and the set being
/// prepared for the next cycle. At the cycle boundary the next set replaces
/// the current one wholesale, so no stale values leak across cycles.
#[derive(Clone, Debug, Default)]
pub struct StageState {
    /// Fetch stage record.
    pub fetch: IfEntry,
    /// Decode stage record.
    pub decode: IdEntry,
    /// Execute stage record.
    pub execute: ExEntry,
    /// Memory stage record.
    pub memory: MemEntry,
    /// Writeback stage record.
    pub writeback: WbEntry,
}
