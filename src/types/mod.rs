//! Type-safe wrappers for key material and initialization vectors
//!
//! This module provides domain-specific types with runtime validation at
//! construction, so the cipher core never sees a malformed buffer.

// Submodules
pub mod key;
pub mod nonce;

// Re-export main types
pub use key::{Key, KeyLength};
pub use nonce::Nonce;
