//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values for the start PC and the data memory
//!    growth limit.
//! 2. **Structures:** Hierarchical config covering general behavior and the
//!    memory model.
//!
//! Configuration is supplied as a JSON file via [`Config::load`], or use
//! `Config::default()` when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline behavior when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Address of the first instruction fetched.
    pub const START_PC: u32 = 0;

    /// Maximum size in bytes the data memory may grow to (64 KiB).
    ///
    /// Accesses whose aligned word would cross this boundary fail instead
    /// of extending the memory.
    pub const DATA_LIMIT: usize = 64 * 1024;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv32_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.data_limit_bytes, 65536);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rv32_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_stages": true,
///         "start_pc": 0
///     },
///     "memory": {
///         "data_limit_bytes": 4096
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_stages);
/// assert_eq!(config.memory.data_limit_bytes, 4096);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON file to read.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] when the file cannot be read and
    /// [`SimError::Config`] when its contents are not valid JSON for this
    /// structure.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-stage tracing to stderr
    #[serde(default)]
    pub trace_stages: bool,

    /// Address of the first instruction fetched
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_stages: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Maximum size in bytes the data memory may grow to
    #[serde(default = "MemoryConfig::default_data_limit")]
    pub data_limit_bytes: usize,
}

impl MemoryConfig {
    /// Returns the default data memory growth limit.
    fn default_data_limit() -> usize {
        defaults::DATA_LIMIT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_limit_bytes: defaults::DATA_LIMIT,
        }
    }
}
