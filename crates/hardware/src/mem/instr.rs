//! Read-only instruction memory.
//!
//! Holds the program image loaded at startup. Fetch addresses align down to
//! a word boundary; a fetch past the end of the image yields nothing, which
//! the fetch stage treats as the end of the program.

/// Instruction memory backed by a flat byte vector.
#[derive(Clone, Debug, Default)]
pub struct InstrMem {
    bytes: Vec<u8>,
}

impl InstrMem {
    /// Creates an instruction memory over a loaded program image.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The raw image, one byte per line of the source file.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Reads the instruction word covering `addr`.
    ///
    /// The address is aligned down to a four byte boundary and the word is
    /// assembled big-endian. Returns `None` when the aligned word is not
    /// fully inside the image.
    #[must_use]
    pub fn fetch(&self, addr: u32) -> Option<u32> {
        let base = (addr as usize) & !3;
        let end = base + 4;
        if end > self.bytes.len() {
            return None;
        }
        Some(u32::from_be_bytes([
            self.bytes[base],
            self.bytes[base + 1],
            self.bytes[base + 2],
            self.bytes[base + 3],
        ]))
    }

    /// Returns the image size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the image holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
