//! Datapath core components.
//!
//! This module contains the state and logic of the single-cycle datapath.
//! It includes the following modules:
//! 1. **Arch:** Architectural register state.
//! 2. **Cpu:** The core that sequences one instruction through all five stages per cycle.
//! 3. **Pipeline:** Stage records, control signals, and the stage functions themselves.

/// Architectural register state.
pub mod arch;

/// CPU core definition and per-cycle sequencing.
pub mod cpu;

/// Stage records, control signals, and stage execution.
pub mod pipeline;

pub use cpu::Cpu;
