//! Block cipher core and modes of operation
//!
//! The cipher itself lives in [`aes`]; [`modes`] composes it into multi-block
//! message operations through the [`BlockCipher`] seam.

use crate::error::Result;

pub mod aes;
#[cfg(feature = "alloc")]
pub mod modes;

// Re-exports
pub use aes::Aes;
#[cfg(feature = "alloc")]
pub use modes::cbc::Cbc;

/// Trait for block ciphers operating in place on single blocks
///
/// Modes of operation are written against this trait rather than a concrete
/// cipher, keeping the chaining logic independent of the key strength.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size(&self) -> usize;

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;
}
