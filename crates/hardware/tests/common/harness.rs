use rv32_core::config::Config;
use rv32_core::core::Cpu;
use rv32_core::mem::{DataMem, InstrMem};

/// Ceiling on test program length; trips the harness assert on runaway loops.
pub const MAX_CYCLES: u64 = 10_000;

/// Flattens instruction words into the big-endian byte image the loader
/// would produce from an `imem.txt` file.
pub fn image_from_words(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

pub struct TestContext {
    pub cpu: Cpu,
}

impl TestContext {
    /// Builds a CPU around the given program with an empty data store.
    pub fn new(program: &[u32]) -> Self {
        Self::with_data(program, &[])
    }

    /// Builds a CPU around the given program and pre-seeded data words.
    pub fn with_data(program: &[u32], data: &[i32]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = Config::default();
        let imem = InstrMem::new(image_from_words(program));
        let dmem = DataMem::new(
            data.iter().flat_map(|w| w.to_be_bytes()).collect(),
            config.memory.data_limit_bytes,
        );

        Self {
            cpu: Cpu::new(imem, dmem, &config),
        }
    }

    /// Executes one full cycle: all five stages, then the cycle boundary.
    pub fn step_once(&mut self) {
        self.cpu.step().unwrap();
        self.cpu.advance();
    }

    /// Runs until the machine halts, panicking if it never does.
    pub fn run(&mut self) {
        while !self.cpu.halted {
            assert!(
                self.cpu.stats.cycles < MAX_CYCLES,
                "program did not halt within {MAX_CYCLES} cycles"
            );
            self.step_once();
        }
        log::debug!("halted after {} cycles", self.cpu.stats.cycles);
    }

    /// Reads a register, panicking on a bad index.
    pub fn reg(&self, idx: usize) -> i32 {
        self.cpu.regs.read(idx).unwrap()
    }
}
