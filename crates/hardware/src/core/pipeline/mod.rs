//! Stage plumbing for the single-cycle datapath.
//!
//! This module defines the records carried between the five logical stages of a
//! cycle, the control signals attached to them, and the stage functions that
//! consume and produce them.

/// Stage record structures for inter-stage communication.
pub mod latches;

/// Control signals and ALU operation selection.
pub mod signals;

/// The five stage functions, executed in order each cycle.
pub mod stages;
