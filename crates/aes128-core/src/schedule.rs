//! AES-128 key expansion.

use crate::block::BLOCK_LEN;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::sbox;

/// Round constants consumed at each round-key boundary, `Rcon[1..=10]`.
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Words in the root key.
const NK: usize = 4;

/// Words in the expanded schedule.
const WORDS: usize = ROUND_KEY_COUNT * NK;

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `i` is words `4i..4i+3` of the schedule; the first round key is
/// the root key itself.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in NK..WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / NK - 1];
        }
        w[i] = xor_word(w[i - NK], temp);
    }

    let mut round_keys = [[0u8; BLOCK_LEN]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(NK)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}
