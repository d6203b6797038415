//! Memory image loading.
//!
//! Programs arrive as text files holding one byte per line, written as eight
//! binary digits, most significant byte of each word first. This module reads
//! those files into the byte vectors backing the two memories. It performs:
//! 1. **Image parsing:** Validates every line and reports the first bad one
//!    by number.
//! 2. **Memory construction:** Builds the instruction and data stores from
//!    the conventional file names inside the I/O directory.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::mem::{DataMem, InstrMem};

/// File name of the instruction image inside the I/O directory.
pub const IMEM_FILE: &str = "imem.txt";

/// File name of the data image inside the I/O directory.
pub const DMEM_FILE: &str = "dmem.txt";

/// Reads a memory image file into raw bytes.
///
/// Each line must hold exactly eight binary digits. Trailing blank lines are
/// tolerated; a blank or malformed line anywhere else fails.
///
/// # Arguments
///
/// * `path` - Path of the image file.
///
/// # Returns
///
/// One byte per retained line, in file order.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be read and
/// [`SimError::ImageFormat`] naming the first line that is not eight binary
/// digits.
pub fn load_image(path: &Path) -> Result<Vec<u8>, SimError> {
    let text = fs::read_to_string(path)?;
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        let _ = lines.pop();
    }

    let mut bytes = Vec::with_capacity(lines.len());
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let bad = || SimError::ImageFormat {
            path: path.display().to_string(),
            line: idx + 1,
        };
        if line.len() != 8 {
            return Err(bad());
        }
        bytes.push(u8::from_str_radix(line, 2).map_err(|_| bad())?);
    }
    Ok(bytes)
}

/// Loads the instruction image from the I/O directory.
///
/// # Arguments
///
/// * `iodir` - Directory holding `imem.txt`.
///
/// # Errors
///
/// Propagates [`load_image`] failures.
pub fn load_instruction_image(iodir: &Path) -> Result<InstrMem, SimError> {
    Ok(InstrMem::new(load_image(&iodir.join(IMEM_FILE))?))
}

/// Loads the data image from the I/O directory.
///
/// The resulting memory may grow past the image up to the configured limit.
///
/// # Arguments
///
/// * `iodir` - Directory holding `dmem.txt`.
/// * `config` - Supplies the growth limit.
///
/// # Errors
///
/// Propagates [`load_image`] failures.
pub fn load_data_image(iodir: &Path, config: &Config) -> Result<DataMem, SimError> {
    Ok(DataMem::new(
        load_image(&iodir.join(DMEM_FILE))?,
        config.memory.data_limit_bytes,
    ))
}
