//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for all three key strengths. The cipher drives
//! the [`engine`] transforms and the [`schedule`] expansion through the fixed
//! round pipeline; one expanded [`KeySchedule`] serves every block encrypted
//! under the same key.
//!
//! Side-channel resistance is out of scope here: substitution is a plain
//! table lookup and no constant-time guarantees are made.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::types::{Key, KeyLength};

use super::BlockCipher;

pub mod engine;
pub mod schedule;
pub mod state;

pub use engine::Mode;
pub use schedule::KeySchedule;
pub use state::State;

use engine::{byte_sub, mix_columns, shift_rows};

/// Cipher block size in bytes, for every key strength
pub const BLOCK_SIZE: usize = 16;

/// The AES cipher with its expanded key schedule
///
/// Holds the round keys for one [`Key`], ready to transform any number of
/// blocks. The schedule is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Create a cipher from a raw key, expanding the schedule internally
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: KeySchedule::new(key),
        }
    }

    /// Create a cipher around an already-expanded schedule
    pub fn from_schedule(schedule: KeySchedule) -> Self {
        Self { schedule }
    }

    /// The schedule backing this cipher
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// The key strength this cipher was built for
    pub fn key_length(&self) -> KeyLength {
        self.schedule.key_length()
    }

    /// Run the encrypt round pipeline over one state in place
    pub fn encrypt_state(&self, state: &mut State) -> Result<()> {
        let num_rounds = self.schedule.num_rounds();

        // initial whitening
        state.xor_with(self.schedule.round_key(0)?);

        for round in 1..=num_rounds {
            byte_sub(state, Mode::Encrypt);
            shift_rows(state, Mode::Encrypt);
            // the final round omits the column mix
            if round != num_rounds {
                mix_columns(state, Mode::Encrypt);
            }
            state.xor_with(self.schedule.round_key(round)?);
        }
        Ok(())
    }

    /// Run the decrypt round pipeline over one state in place
    ///
    /// Exact inverse of [`Aes::encrypt_state`]: round keys are applied before
    /// the inverse column mix within each round, and the mix is skipped on
    /// the entry round. The sequence matches the standard inverse cipher.
    pub fn decrypt_state(&self, state: &mut State) -> Result<()> {
        let num_rounds = self.schedule.num_rounds();

        for round in (1..=num_rounds).rev() {
            state.xor_with(self.schedule.round_key(round)?);
            if round != num_rounds {
                mix_columns(state, Mode::Decrypt);
            }
            shift_rows(state, Mode::Decrypt);
            byte_sub(state, Mode::Decrypt);
        }

        // final whitening
        state.xor_with(self.schedule.round_key(0)?);
        Ok(())
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), BLOCK_SIZE)?;

        let mut state = State::from_slice(block)?;
        self.encrypt_state(&mut state)?;
        block.copy_from_slice(state.as_bytes());
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), BLOCK_SIZE)?;

        let mut state = State::from_slice(block)?;
        self.decrypt_state(&mut state)?;
        block.copy_from_slice(state.as_bytes());
        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn name(&self) -> &'static str {
        self.schedule.key_length().name()
    }
}

/// One-shot single-block encryption
///
/// Expands the schedule for this call only and discards it afterwards; use
/// [`Aes::new`] when more than one block is processed under the same key.
pub fn encrypt_block(key: &Key, block: &mut [u8]) -> Result<()> {
    Aes::new(key).encrypt_block(block)
}

/// One-shot single-block decryption, the counterpart of [`encrypt_block`]
pub fn decrypt_block(key: &Key, block: &mut [u8]) -> Result<()> {
    Aes::new(key).decrypt_block(block)
}
