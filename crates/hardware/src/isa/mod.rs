//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the opcode and function-code constants for the simulated RV32I
//! subset together with field extraction and immediate decoding.
//!
//! # Supported classes
//!
//! * Register arithmetic: ADD, SUB, XOR, OR, AND.
//! * Immediate arithmetic: ADDI, XORI, ORI, ANDI.
//! * Memory: LW, SW.
//! * Control transfer: BEQ, BNE, JAL.
//! * The all-ones halt sentinel.

/// Instruction field extraction and immediate decoding.
pub mod decode;

/// funct3 selector constants.
pub mod funct3;

/// funct7 selector constants.
pub mod funct7;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcode constants.
pub mod opcodes;
