//! AES-128 block encryption following FIPS-197, with optional visibility into
//! every intermediate state.
//!
//! This crate provides:
//! - Key schedule for AES-128.
//! - The round transforms and the fixed ten-round engine.
//! - An [`Observer`] hook that receives a labelled snapshot after each
//!   transform, plus a [`Trace`] recorder.
//! - Constant-operation GF(2^8) arithmetic in [`gf`].
//!
//! Only the forward cipher over a single block is implemented. Table lookups in
//! SubBytes are not side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
mod round;
mod sbox;
mod schedule;
mod trace;

pub use crate::block::{column_major_index, Block, BLOCK_LEN};
pub use crate::cipher::{
    encrypt_block, encrypt_block_traced, encrypt_rounds, encrypt_with_round_keys, ROUNDS,
};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT, SCHEDULE_LEN};
pub use crate::round::{
    add_round_key, mix_columns, rotate_rows, shift_rows, sub_bytes, SHIFT_ROWS_OFFSETS,
};
pub use crate::sbox::sbox;
pub use crate::schedule::{expand_key, RCON};
pub use crate::trace::{Grid, Observer, Snapshot, Stage, Trace, FULL_TRACE_LEN};
