//! Secret key type with strength binding
//!
//! The key length is validated once at construction and carried alongside
//! the material, so every later strength decision (round count, expansion
//! rule) is a total function of the key.

use core::fmt;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Cipher key strength, determined by the key length in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLength {
    /// 128-bit key, 10 rounds
    Bits128,
    /// 192-bit key, 12 rounds
    Bits192,
    /// 256-bit key, 14 rounds
    Bits256,
}

impl KeyLength {
    /// Key size in bytes
    pub const fn key_size(self) -> usize {
        match self {
            KeyLength::Bits128 => 16,
            KeyLength::Bits192 => 24,
            KeyLength::Bits256 => 32,
        }
    }

    /// Key size in 4-byte words (the `Nk` of the expansion rule)
    pub const fn key_words(self) -> usize {
        self.key_size() / 4
    }

    /// Number of cipher rounds for this strength
    pub const fn num_rounds(self) -> usize {
        match self {
            KeyLength::Bits128 => 10,
            KeyLength::Bits192 => 12,
            KeyLength::Bits256 => 14,
        }
    }

    /// Algorithm name for this strength
    pub const fn name(self) -> &'static str {
        match self {
            KeyLength::Bits128 => "AES-128",
            KeyLength::Bits192 => "AES-192",
            KeyLength::Bits256 => "AES-256",
        }
    }

    /// Map a key length in bytes to its strength
    ///
    /// Any length other than 16, 24, or 32 is a configuration error and is
    /// rejected here rather than producing a degenerate cipher.
    pub fn from_key_size(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeyLength::Bits128),
            24 => Ok(KeyLength::Bits192),
            32 => Ok(KeyLength::Bits256),
            _ => Err(Error::KeyLength { actual: len }),
        }
    }
}

/// Secret key material for the cipher
///
/// Never mutated after construction and zeroized on drop. Only the leading
/// `length.key_size()` bytes of the backing buffer are active.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; 32],
    #[zeroize(skip)]
    length: KeyLength,
}

impl Key {
    /// Create a key from a byte slice of length 16, 24, or 32
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let length = KeyLength::from_key_size(bytes.len())?;
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, length })
    }

    /// Generate a random key of the given strength
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, length: KeyLength) -> Self {
        let mut buf = [0u8; 32];
        rng.fill_bytes(&mut buf[..length.key_size()]);
        Self { bytes: buf, length }
    }

    /// The strength of this key
    pub fn length(&self) -> KeyLength {
        self.length
    }

    /// The key material
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.length.key_size()]
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && bool::from(self.as_bytes().ct_eq(other.as_bytes()))
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({}, [REDACTED])", self.length.name())
    }
}
