//! Control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Categorizes the ALU operations of the RV32I subset.
//! 2. **Operand Selection:** Defines the source for the second ALU input (register or immediate).
//! 3. **Stage Control:** Carries memory access and register write enables to later stages.

/// ALU operation types for integer instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Integer addition (default value).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Source for the second ALU operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpBSrc {
    /// Use sign-extended immediate value.
    #[default]
    Imm,

    /// Use `rs2` register value.
    Reg2,
}

/// Control signals generated during instruction decode.
///
/// Contains all signals that steer execution, memory access, and writeback for
/// the instruction currently in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction may redirect the program counter (`BEQ`/`BNE`/`JAL`).
    pub branch: bool,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// ALU operation to perform.
    pub alu: AluOp,
}
