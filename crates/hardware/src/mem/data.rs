//! Auto-extending data memory.
//!
//! Data memory starts out holding whatever the data image provided and grows
//! with zero fill whenever an access lands past its current length, up to a
//! configured limit. Addresses are signed because they come out of the ALU;
//! a negative address is always an error.

use crate::common::SimError;

/// Data memory backed by a flat byte vector with a growth limit.
#[derive(Clone, Debug)]
pub struct DataMem {
    bytes: Vec<u8>,
    limit: usize,
}

impl DataMem {
    /// Creates a data memory over a loaded data image.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The initial contents, one byte per line of the source file.
    /// * `limit` - Maximum size in bytes the memory may grow to.
    #[must_use]
    pub const fn new(bytes: Vec<u8>, limit: usize) -> Self {
        Self { bytes, limit }
    }

    /// Reads the word covering `addr`, growing the memory to include it.
    ///
    /// The address is aligned down to a four byte boundary and the word is
    /// assembled big-endian. A read past the current length extends the
    /// memory with zeros first, so such reads return zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataAddress`] when `addr` is negative or the
    /// aligned word would cross the growth limit.
    pub fn read(&mut self, addr: i32) -> Result<i32, SimError> {
        let (base, end) = self.span(addr)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[base..end]);
        Ok(i32::from_be_bytes(word))
    }

    /// Writes `word` big-endian at `addr`, growing the memory to include it.
    ///
    /// The address is aligned down to a four byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataAddress`] when `addr` is negative or the
    /// aligned word would cross the growth limit.
    pub fn write(&mut self, addr: i32, word: i32) -> Result<(), SimError> {
        let (base, end) = self.span(addr)?;
        self.bytes[base..end].copy_from_slice(&word.to_be_bytes());
        Ok(())
    }

    /// Returns the current contents for dumping.
    #[must_use]
    pub fn dump(&self) -> &[u8] {
        &self.bytes
    }

    /// Validates `addr` and returns the aligned word's byte range, extending
    /// the backing vector with zeros so the range is in bounds.
    fn span(&mut self, addr: i32) -> Result<(usize, usize), SimError> {
        if addr < 0 {
            return Err(SimError::DataAddress {
                addr,
                limit: self.limit,
            });
        }
        let base = (addr as usize) & !3;
        let end = base + 4;
        if end > self.limit {
            return Err(SimError::DataAddress {
                addr,
                limit: self.limit,
            });
        }
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        Ok((base, end))
    }
}
