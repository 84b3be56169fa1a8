//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. The key schedule is expanded
//! once when the cipher is built and reused across every block of the
//! message; blocks are processed strictly in order, as each block's
//! transformation depends on the previous block's ciphertext.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::Nonce;

/// CBC mode over any block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self> {
        validate::length("CBC initialization vector", N, cipher.block_size())?;

        Ok(Self {
            cipher,
            iv: iv.as_ref().to_vec(),
        })
    }

    /// Encrypts a block-aligned message in place
    ///
    /// Block `i` is XORed with the ciphertext of block `i - 1` (the IV for
    /// block 0) and then encrypted, in order. An empty message is a no-op.
    /// Padding for messages that are not block-aligned must be applied by
    /// the caller beforehand.
    pub fn encrypt_in_place(&self, message: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC plaintext", message.len(), block_size)?;

        let mut prev = self.iv.clone();
        for block in message.chunks_exact_mut(block_size) {
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            self.cipher.encrypt_block(block)?;
            prev.copy_from_slice(block);
        }
        Ok(())
    }

    /// Decrypts a block-aligned message in place
    ///
    /// Each ciphertext block is snapshotted before it is overwritten by the
    /// block decryption, because block `i + 1` chains against the original
    /// ciphertext of block `i`, not its decrypted value.
    pub fn decrypt_in_place(&self, message: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC ciphertext", message.len(), block_size)?;

        let mut prev = self.iv.clone();
        for block in message.chunks_exact_mut(block_size) {
            let snapshot = block.to_vec();
            self.cipher.decrypt_block(block)?;
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            prev = snapshot;
        }
        Ok(())
    }

    /// Encrypts a message, returning the ciphertext as a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.encrypt_in_place(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message, returning the plaintext as a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place(&mut plaintext)?;
        Ok(plaintext)
    }

    /// Generate a random 16-byte IV
    pub fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> Nonce<16> {
        Nonce::random(rng)
    }
}
