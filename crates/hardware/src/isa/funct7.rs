//! Function codes (funct7) for the simulated RV32I subset.
//!
//! The `funct7` field (bits 31-25) distinguishes R-type operations that share
//! the same `funct3` (ADD vs SUB).

/// Default operation (ADD, XOR, OR, AND).
pub const BASE: u32 = 0b0000000;

/// Alternate operation (SUB).
pub const SUB: u32 = 0b0100000;
