//! Key types for AES-128.

use crate::block::{Block, BLOCK_LEN};

/// Number of round keys produced for AES-128 (whitening key plus ten rounds).
pub const ROUND_KEY_COUNT: usize = 11;

/// Total size of the expanded key schedule in bytes.
pub const SCHEDULE_LEN: usize = ROUND_KEY_COUNT * BLOCK_LEN;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_LEN] {
        let mut out = [0u8; SCHEDULE_LEN];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_LEN).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}
