//! Stage implementations for the single-cycle datapath.
//!
//! This module contains the individual implementations for the five logical
//! stages executed in order within each cycle. It includes:
//! 1. **Fetch:** Retrieves the instruction word at the PC and detects the halt condition.
//! 2. **Decode:** Classifies the instruction and reads operands into the execute record.
//! 3. **Execute:** Performs the ALU operation and resolves branch and jump targets.
//! 4. **Memory:** Handles the data load or store of the instruction, if any.
//! 5. **Writeback:** Commits the final value to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
