//! Rijndael key expansion
//!
//! Expands a [`Key`] into `numRounds + 1` round keys. The key is split into
//! `Nk` big-endian 4-byte words (4, 6, or 8 by strength); each later word is
//! the XOR of the word `Nk` positions back with the previous word, where
//! every `Nk`-th word is first rotated, substituted through the forward
//! S-box, and XORed with a round constant, and for the 256-bit strength the
//! word halfway between two round-constant steps gets an extra substitution
//! without rotation. Round key `r` is words `4r..4r+3`, one word per column.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::types::{Key, KeyLength};

use super::engine::SBOX;
use super::state::State;

/// Round constants for the key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Round keys for the largest strength: 14 rounds + whitening key
const MAX_ROUND_KEYS: usize = 15;

/// Substitutes each byte in a word using the forward S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[bytes[0] as usize],
        SBOX[bytes[1] as usize],
        SBOX[bytes[2] as usize],
        SBOX[bytes[3] as usize],
    ])
}

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// The expanded sequence of round keys derived from one [`Key`]
///
/// Construction performs the full expansion, so a schedule is always usable
/// once it exists; it is immutable afterwards and meant to be computed once
/// per message and shared across all block operations. Round key 0 is the
/// original key material, round key `num_rounds()` is the last one applied.
/// The expanded material is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: [State; MAX_ROUND_KEYS],
    #[zeroize(skip)]
    length: KeyLength,
}

impl KeySchedule {
    /// Expand the given key into its round-key sequence
    pub fn new(key: &Key) -> Self {
        let nk = key.length().key_words();
        let num_rounds = key.length().num_rounds();
        let total_words = 4 * (num_rounds + 1);

        let mut words = [0u32; 4 * MAX_ROUND_KEYS];
        for (i, chunk) in key.as_bytes().chunks_exact(4).enumerate() {
            words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total_words {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rotate_word(temp)) ^ RCON[i / nk];
            } else if nk == 8 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        let mut round_keys = [State::zeroed(); MAX_ROUND_KEYS];
        for (r, round_key) in round_keys.iter_mut().take(num_rounds + 1).enumerate() {
            let mut bytes = [0u8; 16];
            for col in 0..4 {
                bytes[4 * col..4 * col + 4].copy_from_slice(&words[4 * r + col].to_be_bytes());
            }
            *round_key = State::new(bytes);
        }
        words.zeroize();

        Self {
            round_keys,
            length: key.length(),
        }
    }

    /// The key strength this schedule was expanded for
    pub fn key_length(&self) -> KeyLength {
        self.length
    }

    /// Number of cipher rounds this schedule covers
    pub fn num_rounds(&self) -> usize {
        self.length.num_rounds()
    }

    /// Look up the round key for the given round index
    ///
    /// Fails when `round` lies outside `[0, num_rounds()]`.
    pub fn round_key(&self, round: usize) -> Result<&State> {
        let limit = self.num_rounds() + 1;
        if round >= limit {
            return Err(Error::RoundKey { round, limit });
        }
        Ok(&self.round_keys[round])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyLength;

    #[test]
    fn round_key_count_follows_strength() {
        for (len, rounds) in [(16usize, 10usize), (24, 12), (32, 14)] {
            let key = Key::new(&vec![0u8; len]).unwrap();
            let schedule = KeySchedule::new(&key);
            assert_eq!(schedule.num_rounds(), rounds);
            assert!(schedule.round_key(rounds).is_ok());
            assert_eq!(
                schedule.round_key(rounds + 1).unwrap_err(),
                Error::RoundKey {
                    round: rounds + 1,
                    limit: rounds + 1,
                }
            );
        }
    }

    #[test]
    fn round_key_zero_is_the_key_material() {
        let material: Vec<u8> = (0..32).collect();
        for len in [16usize, 24, 32] {
            let key = Key::new(&material[..len]).unwrap();
            let schedule = KeySchedule::new(&key);
            assert_eq!(
                &schedule.round_key(0).unwrap().as_bytes()[..],
                &material[..16],
                "first round key must be the leading key bytes"
            );
        }
    }

    #[test]
    fn expansion_matches_standard_aes128_example() {
        // FIPS 197 appendix A.1: the last four expanded words for the key
        // 2b7e151628aed2a6abf7158809cf4f3c are d014f9a8 c9ee2589 e13f0cc8 b6630ca6
        let key_bytes = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let key = Key::new(&key_bytes).unwrap();
        assert_eq!(key.length(), KeyLength::Bits128);
        let schedule = KeySchedule::new(&key);
        let expected_last = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(schedule.round_key(10).unwrap().as_bytes(), &expected_last);
    }

    #[test]
    fn sub_word_uses_forward_table() {
        assert_eq!(sub_word(0x00000000), 0x63636363);
        assert_eq!(rotate_word(0x01020304), 0x02030401);
    }
}
