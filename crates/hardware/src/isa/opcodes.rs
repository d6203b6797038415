//! Major opcodes for the simulated RV32I subset.
//!
//! Defines the major opcodes (bits 6-0) for the supported instruction classes.
//! Any other opcode value fails decode.

/// Load instructions (LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, XORI, ORI, ANDI).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, XOR, OR, AND).
pub const OP_REG: u32 = 0b0110011;

/// Conditional Branch instructions (BEQ, BNE).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// Halt sentinel. All seven opcode bits set; not a real RV32I opcode. The
/// fetch stage treats a word carrying it as the program terminator.
pub const OP_HALT: u32 = 0b1111111;
