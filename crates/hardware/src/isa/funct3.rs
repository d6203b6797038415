//! Function codes (funct3) for the simulated RV32I subset.
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g. BEQ vs BNE, ADD vs XOR).

/// Load Word.
pub const LW: u32 = 0b010;

/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;

/// Add / Subtract (funct7 selects which).
pub const ADD_SUB: u32 = 0b000;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

/// Reserved selector carried by JAL through the execute stage, where it marks
/// the branch as unconditional.
pub const JUMP: u32 = 0b111;
