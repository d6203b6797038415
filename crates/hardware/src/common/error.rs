//! Error types for simulator construction and execution.

use thiserror::Error;

/// Errors that can occur while loading images, configuring the simulator, or
/// stepping the datapath.
#[derive(Debug, Error)]
pub enum SimError {
    /// A register index outside the architectural file was requested.
    #[error("register index {index} out of range (file has 32 registers)")]
    RegisterIndex {
        /// The offending index.
        index: usize,
    },

    /// The decode stage saw an instruction word it has no mapping for.
    #[error("cannot decode instruction {word:#010x} at cycle {cycle}")]
    UnmappedDecode {
        /// The raw instruction word.
        word: u32,
        /// The cycle on which the word reached decode.
        cycle: u64,
    },

    /// A data memory access fell outside the addressable range.
    #[error("data address {addr} outside memory (limit {limit} bytes)")]
    DataAddress {
        /// The byte address the datapath produced.
        addr: i32,
        /// The configured memory limit in bytes.
        limit: usize,
    },

    /// A memory image file contained a line that is not an 8-bit binary byte.
    #[error("malformed memory image {path} at line {line}")]
    ImageFormat {
        /// Path of the image file.
        path: String,
        /// One-based line number of the bad line.
        line: usize,
    },

    /// An underlying filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
