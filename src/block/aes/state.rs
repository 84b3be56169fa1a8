//! The cipher working block
//!
//! A [`State`] is the 16-byte block the round transformations operate on,
//! viewed as a 4x4 byte grid in column-major order: byte `i` of the flat
//! buffer sits at row `i % 4`, column `i / 4`. The flat import/export order
//! and every engine transform agree on this layout.

use zeroize::Zeroize;

use crate::error::{validate, Result};

use super::BLOCK_SIZE;

/// The 16-byte cipher working block, a 4x4 byte grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct State {
    bytes: [u8; BLOCK_SIZE],
}

impl State {
    /// Create a state from a 16-byte array
    pub fn new(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create an all-zero state
    pub fn zeroed() -> Self {
        Self {
            bytes: [0u8; BLOCK_SIZE],
        }
    }

    /// Create a state from a slice, if it is exactly one block long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("state block", bytes.len(), BLOCK_SIZE)?;

        let mut buf = [0u8; BLOCK_SIZE];
        buf.copy_from_slice(bytes);
        Ok(Self { bytes: buf })
    }

    /// The flat byte representation, column-major
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.bytes
    }

    /// Mutable access to the flat byte representation
    pub fn as_bytes_mut(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.bytes
    }

    /// The byte at the given grid position
    pub fn byte(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < 4 && col < 4);
        self.bytes[4 * col + row]
    }

    /// XOR another state into this one byte-for-byte
    ///
    /// This is the sole step that mixes key material into the block during a
    /// round, and it is its own inverse.
    pub fn xor_with(&mut self, other: &State) {
        for (b, o) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *b ^= o;
        }
    }
}
