//! AES-128 round engine and single-block encryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::expand_key;
use crate::trace::{Observer, Snapshot, Stage};

/// Number of rounds after the initial whitening.
pub const ROUNDS: usize = 10;

#[inline]
fn emit<O: Observer + ?Sized>(observer: &mut O, round: usize, stage: Stage, state: &Block) {
    observer.observe(&Snapshot {
        round,
        stage,
        state: *state,
    });
}

/// Runs the fixed AES-128 round sequence over `block`, reporting every
/// intermediate state to `observer`.
///
/// The final round omits MixColumns.
pub fn encrypt_rounds<O: Observer + ?Sized>(
    block: &Block,
    round_keys: &RoundKeys,
    observer: &mut O,
) -> Block {
    let mut state = *block;
    emit(observer, 0, Stage::Input, &state);

    add_round_key(&mut state, round_keys.get(0));
    emit(observer, 0, Stage::AddRoundKey, &state);

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        emit(observer, round, Stage::SubBytes, &state);
        shift_rows(&mut state);
        emit(observer, round, Stage::ShiftRows, &state);
        mix_columns(&mut state);
        emit(observer, round, Stage::MixColumns, &state);
        add_round_key(&mut state, round_keys.get(round));
        emit(observer, round, Stage::AddRoundKey, &state);
    }

    sub_bytes(&mut state);
    emit(observer, ROUNDS, Stage::SubBytes, &state);
    shift_rows(&mut state);
    emit(observer, ROUNDS, Stage::ShiftRows, &state);
    add_round_key(&mut state, round_keys.get(ROUNDS));
    emit(observer, ROUNDS, Stage::AddRoundKey, &state);

    state
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_with_round_keys(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_rounds(block, round_keys, &mut |_: &Snapshot| {})
}

/// Encrypts a single 16-byte block under `key`.
pub fn encrypt_block(plaintext: &Block, key: &Aes128Key) -> Block {
    encrypt_with_round_keys(plaintext, &expand_key(key))
}

/// Encrypts a single block under `key`, reporting all intermediate states.
pub fn encrypt_block_traced<O: Observer + ?Sized>(
    plaintext: &Block,
    key: &Aes128Key,
    observer: &mut O,
) -> Block {
    encrypt_rounds(plaintext, &expand_key(key), observer)
}
