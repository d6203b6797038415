//! Result file writers.
//!
//! The simulator reports through three text files in the I/O directory: a
//! register file snapshot and a machine state snapshot appended after every
//! cycle, and a data memory dump written once at the end of the run. The
//! first cycle truncates the per-cycle files so stale results from an
//! earlier run never survive.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::SimError;
use crate::core::arch::gpr::REGISTER_COUNT;
use crate::core::pipeline::latches::IfEntry;

/// File name of the per-cycle register file snapshots.
pub const RF_RESULT_FILE: &str = "RFResult.txt";

/// File name of the per-cycle machine state snapshots.
pub const STATE_RESULT_FILE: &str = "StateResult_SS.txt";

/// File name of the final data memory dump.
pub const DMEM_RESULT_FILE: &str = "SS_DMEMResult.txt";

/// Width of the rule separating successive snapshots.
const RULE_WIDTH: usize = 70;

/// Opens a snapshot file, truncating on the first cycle and appending after.
fn open_snapshot(path: &Path, cycle: u64) -> Result<File, SimError> {
    let file = if cycle == 0 {
        File::create(path)?
    } else {
        OpenOptions::new().append(true).create(true).open(path)?
    };
    Ok(file)
}

/// Appends the register file snapshot for one cycle.
///
/// Every register prints as thirty-two binary digits of its two's complement
/// value, x0 first.
///
/// # Arguments
///
/// * `path` - Snapshot file path.
/// * `cycle` - Cycle label for the snapshot header.
/// * `values` - Register values in index order.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be opened or written.
pub fn write_register_snapshot(
    path: &Path,
    cycle: u64,
    values: &[i32; REGISTER_COUNT],
) -> Result<(), SimError> {
    let mut out = BufWriter::new(open_snapshot(path, cycle)?);
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "State of RF after executing cycle:{cycle}")?;
    for val in values {
        writeln!(out, "{:032b}", *val as u32)?;
    }
    out.flush()?;
    Ok(())
}

/// Appends the machine state snapshot for one cycle.
///
/// Reports the fetch record the cycle produced: the PC the next cycle will
/// fetch from and whether fetch has gone idle.
///
/// # Arguments
///
/// * `path` - Snapshot file path.
/// * `cycle` - Cycle label for the snapshot header.
/// * `fetch` - Next-cycle fetch record.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be opened or written.
pub fn write_state_snapshot(path: &Path, cycle: u64, fetch: &IfEntry) -> Result<(), SimError> {
    let mut out = BufWriter::new(open_snapshot(path, cycle)?);
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "State after executing cycle: {cycle}")?;
    writeln!(out, "IF.PC: {}", fetch.pc)?;
    writeln!(out, "IF.nop: {}", if fetch.idle { "True" } else { "False" })?;
    out.flush()?;
    Ok(())
}

/// Writes the final data memory dump, one byte per line in binary.
///
/// # Arguments
///
/// * `path` - Dump file path.
/// * `bytes` - Data memory contents.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be created or written.
pub fn write_data_dump(path: &Path, bytes: &[u8]) -> Result<(), SimError> {
    let mut out = BufWriter::new(File::create(path)?);
    for byte in bytes {
        writeln!(out, "{byte:08b}")?;
    }
    out.flush()?;
    Ok(())
}
