//! RV32I single-cycle simulator library.
//!
//! This crate implements a cycle-accurate simulator for a single-cycle RV32I
//! subset datapath. Every cycle fetches one instruction word, decodes it into
//! typed control signals, executes it, performs at most one data-memory
//! access, and writes the result back to the register file:
//! 1. **Core:** Datapath orchestration, stage records, and the register file.
//! 2. **Mem:** Byte-addressable instruction and data stores.
//! 3. **ISA:** Opcode/funct constants, field extraction, immediate decoding.
//! 4. **Sim:** Image loader, per-cycle result writers, and the simulator shell.
//! 5. **Stats:** Cycle/instruction counters and the performance summary.

/// Common types (error definitions).
pub mod common;
/// Simulator configuration (defaults, config structures).
pub mod config;
/// CPU core (datapath, stage records, register file).
pub mod core;
/// Instruction set (opcodes, funct codes, decode helpers).
pub mod isa;
/// Instruction and data stores.
pub mod mem;
/// Image loader, result writers, and run orchestration.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, both stores, and the stage state.
pub use crate::core::Cpu;
/// Error type for every fallible operation in the crate.
pub use crate::common::SimError;
/// Simulator shell; drives the CPU and the per-cycle writers together.
pub use crate::sim::Simulator;
