//! # ISA Tests
//!
//! This module aggregates tests for the RV32I subset decoding logic.
