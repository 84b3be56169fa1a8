//! Rijndael (AES) block cipher with CBC chained-mode message encryption
//!
//! This crate implements the Advanced Encryption Standard block cipher as
//! specified in FIPS 197 for all three key strengths (128, 192, and 256 bit),
//! together with the Cipher Block Chaining mode of operation from
//! NIST SP 800-38A for multi-block messages.
//!
//! The crate covers the cipher core only: callers supply block-aligned byte
//! buffers and receive transformed buffers back. Padding, key derivation,
//! authenticated encryption, and I/O belong to surrounding layers.
//!
//! # Security Features
//!
//! Sensitive material is handled with care even though constant-time
//! execution is not a goal of this implementation:
//!
//! - Keys and expanded round keys are zeroized on drop
//! - Key comparison runs in constant time
//! - Secret-bearing types have redacted `Debug` output
//!
//! # Example
//!
//! ```
//! use rijndael::{Aes, Cbc, Key, Nonce};
//!
//! let key = Key::new(&[0x2b; 16]).unwrap();
//! let iv = Nonce::<16>::new([0x01; 16]);
//!
//! let cbc = Cbc::new(Aes::new(&key), &iv).unwrap();
//! let mut message = [0x42u8; 32]; // two blocks, already aligned
//! cbc.encrypt_in_place(&mut message).unwrap();
//! cbc.decrypt_in_place(&mut message).unwrap();
//! assert_eq!(message, [0x42u8; 32]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::aes::{Aes, KeySchedule, Mode, State};
#[cfg(feature = "alloc")]
pub use block::modes::cbc::Cbc;
pub use block::BlockCipher;

// Type system
pub mod types;
pub use types::{Key, KeyLength, Nonce};
