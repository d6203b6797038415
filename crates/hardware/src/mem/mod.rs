//! Byte-addressable memory models.
//!
//! The simulator keeps its program image and its data in two separate
//! stores. Both are flat byte vectors holding big-endian words; word
//! accesses align their address down to a four byte boundary.

/// Auto-extending data memory.
pub mod data;

/// Read-only instruction memory.
pub mod instr;

pub use data::DataMem;
pub use instr::InstrMem;
