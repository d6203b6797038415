//! RV32I single-cycle simulator CLI.
//!
//! This binary points the simulator at a directory of memory images and runs
//! the program to completion. It performs:
//! 1. **Setup:** Resolves the I/O directory and loads the optional JSON
//!    configuration.
//! 2. **Run:** Ticks the simulator until the machine halts, appending the
//!    per-cycle snapshot files as it goes.
//! 3. **Report:** Dumps the final data memory and prints the performance
//!    summary.

use std::io;
use std::path::{self, Path, PathBuf};
use std::{env, process};

use clap::Parser;

use rv32_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RV32I single-cycle simulator",
    long_about = "Simulates an RV32I subset program one instruction per cycle.\n\nThe I/O directory must contain imem.txt and dmem.txt, each holding one byte per line as eight binary digits. Per-cycle register and machine state snapshots plus the final data memory dump are written back into the same directory.\n\nExamples:\n  sim --iodir testcases/case0\n  sim --iodir testcases/case0 --config sim.json"
)]
struct Cli {
    /// Directory containing the input files (defaults to the working directory).
    #[arg(long, default_value = "")]
    iodir: PathBuf,

    /// Optional JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] FATAL: Could not load config '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let iodir = match resolve_iodir(&cli.iodir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "[!] FATAL: Could not resolve I/O directory '{}': {e}",
                cli.iodir.display()
            );
            process::exit(1);
        }
    };
    println!("IO Directory: {}", iodir.display());

    let mut sim = match Simulator::new(&iodir, &config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    while !sim.halted() {
        if let Err(e) = sim.tick() {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
    if let Err(e) = sim.finalize() {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Resolves the I/O directory to an absolute path.
///
/// An empty argument means the current working directory. The directory is
/// not required to exist yet; missing inputs surface when loading.
fn resolve_iodir(dir: &Path) -> io::Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        env::current_dir()
    } else {
        path::absolute(dir)
    }
}
