//! ROM (the loaded program) and RAM (data memory), both word-addressed over
//! the 15-bit address space.

use std::error::Error;
use std::fmt;

use crate::constants::{RAM_SIZE, ROM_SIZE};
use crate::{Address, Word};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MemoryError {
    /// A ROM image was not exactly [`ROM_SIZE`] words long.
    WrongImageSize { expected: usize, actual: usize },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::WrongImageSize { expected, actual } => write!(
                f,
                "ROM image must contain exactly {} words, got {}",
                expected, actual
            ),
        }
    }
}

impl Error for MemoryError {}

/// Read-only instruction memory, addressed by the program counter.
#[derive(Clone, Debug)]
pub struct Rom {
    words: Vec<Word>,
}

impl Rom {
    /// Builds a ROM from a full-size image. `image.len()` must equal
    /// [`ROM_SIZE`]; use [`crate::bits::create_image`] to pad a short program.
    pub fn new(image: Vec<Word>) -> Result<Rom, MemoryError> {
        if image.len() != ROM_SIZE {
            return Err(MemoryError::WrongImageSize {
                expected: ROM_SIZE,
                actual: image.len(),
            });
        }
        Ok(Rom { words: image })
    }

    pub fn read(&self, address: Address) -> Word {
        self.words[address as usize % ROM_SIZE]
    }
}

/// Read/write data memory.
#[derive(Clone, Debug)]
pub struct Ram {
    words: Vec<Word>,
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            words: vec![0; RAM_SIZE],
        }
    }

    /// Reads without side effects, for external inspection.
    pub fn peek(&self, address: Address) -> Word {
        self.words[address as usize % RAM_SIZE]
    }

    /// Combinational read with an optional same-cycle write: if `write` is
    /// set, `data` is stored at `address` before the (old or new) value is
    /// returned, matching the RAM chip's `out` pin following its `in`/`load`
    /// inputs within a single cycle.
    pub fn access(&mut self, address: Address, data: Word, write: bool) -> Word {
        let index = address as usize % RAM_SIZE;
        if write {
            self.words[index] = data;
        }
        self.words[index]
    }
}

impl Default for Ram {
    fn default() -> Ram {
        Ram::new()
    }
}
