//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RV32I
//! architecture. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Reporting:** Provides a snapshot of the complete register state for trace output.

use crate::common::SimError;

/// Number of architectural registers in the file.
pub const REGISTER_COUNT: usize = 32;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [i32; REGISTER_COUNT],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` always returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterIndex`] if `idx` is 32 or greater.
    pub fn read(&self, idx: usize) -> Result<i32, SimError> {
        match self.regs.get(idx) {
            Some(_) if idx == 0 => Ok(0),
            Some(val) => Ok(*val),
            None => Err(SimError::RegisterIndex { index: idx }),
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register `x0` are silently ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterIndex`] if `idx` is 32 or greater.
    pub fn write(&mut self, idx: usize, val: i32) -> Result<(), SimError> {
        match self.regs.get_mut(idx) {
            Some(_) if idx == 0 => Ok(()),
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(SimError::RegisterIndex { index: idx }),
        }
    }

    /// Returns a snapshot of all 32 register values in index order.
    ///
    /// Used by the reporting layer to dump register state after each cycle.
    pub fn values(&self) -> [i32; REGISTER_COUNT] {
        self.regs
    }
}
