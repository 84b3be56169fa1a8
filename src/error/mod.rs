//! Error handling for the cipher core

use core::fmt;

/// The error type for cipher operations
///
/// Every variant is a deterministic caller-precondition violation; there is
/// no transient-failure class in this crate and no retry semantics apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Unrecognized key length (must be 16, 24, or 32 bytes)
    KeyLength {
        /// Actual length in bytes
        actual: usize,
    },

    /// Round-key lookup outside the expanded schedule
    RoundKey {
        /// Requested round index
        round: usize,
        /// Number of round keys in the schedule
        limit: usize,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::KeyLength { actual } => {
                write!(
                    f,
                    "Invalid key length {}: expected 16, 24, or 32 bytes",
                    actual
                )
            }
            Error::RoundKey { round, limit } => {
                write!(
                    f,
                    "Round key index {} out of range: schedule holds {} round keys",
                    round, limit
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
