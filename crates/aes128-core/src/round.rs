//! AES round transformations.

use crate::block::{column_major_index, xor_in_place, Block};
use crate::gf::xtime;
use crate::sbox::sbox;

/// Left rotation applied to each row by ShiftRows.
pub const SHIFT_ROWS_OFFSETS: [usize; 4] = [0, 1, 2, 3];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Rotates row `r` of the state left by `offsets[r]` positions.
///
/// Rows are strided in column-major storage, so each row is gathered across
/// the four columns, rotated, then scattered back.
pub fn rotate_rows(state: &mut Block, offsets: &[usize; 4]) {
    for (row, &offset) in offsets.iter().enumerate() {
        let mut gathered = [0u8; 4];
        for (column, byte) in gathered.iter_mut().enumerate() {
            *byte = state[column_major_index(column, row)];
        }
        gathered.rotate_left(offset % 4);
        for (column, byte) in gathered.iter().enumerate() {
            state[column_major_index(column, row)] = *byte;
        }
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    rotate_rows(state, &SHIFT_ROWS_OFFSETS);
}

/// Row `i` of the circulant matrix is `a[i] ^ sum ^ 2 * (a[i] ^ a[i + 1])`.
fn mix_single_column(col: &mut [u8; 4]) {
    let a = *col;
    let sum = a[0] ^ a[1] ^ a[2] ^ a[3];
    for (i, out) in col.iter_mut().enumerate() {
        *out = a[i] ^ sum ^ xtime(a[i] ^ a[(i + 1) % 4]);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
