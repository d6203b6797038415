//! Shared types used across the simulator.

pub mod error;

pub use error::SimError;
