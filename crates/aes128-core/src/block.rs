//! Block representation helpers.

/// Number of bytes in an AES block.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes, stored column-major as a 4x4 grid.
pub type Block = [u8; BLOCK_LEN];

/// Linear index of the byte at `column`, `row` in a column-major block.
#[inline]
pub const fn column_major_index(column: usize, row: usize) -> usize {
    4 * column + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_layout() {
        assert_eq!(column_major_index(0, 0), 0);
        assert_eq!(column_major_index(0, 3), 3);
        assert_eq!(column_major_index(1, 0), 4);
        assert_eq!(column_major_index(3, 2), 14);
    }

    #[test]
    fn xor_with_self_clears() {
        let mut block: Block = core::array::from_fn(|i| i as u8 * 17);
        let copy = block;
        xor_in_place(&mut block, &copy);
        assert_eq!(block, [0u8; BLOCK_LEN]);
    }
}
