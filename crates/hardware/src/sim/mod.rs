//! Simulation assembly and file I/O.
//!
//! Provides the memory image loaders, the per-cycle result writers, and the
//! top-level [`Simulator`] that drives the CPU and the writers together.

/// Memory image loading.
pub mod loader;

/// Result file writers.
pub mod output;

/// Run loop driver.
pub mod simulator;

pub use simulator::Simulator;
