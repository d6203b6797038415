//! RISC-V architecture-specific components.
//!
//! This module contains the implementation of the core architectural elements.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation.

/// General-Purpose Register file implementation.
pub mod gpr;
