//! Hex parsing for block-sized command-line arguments.

use aes128_core::{Block, BLOCK_LEN};

/// Hex characters needed to spell one block.
pub const BLOCK_HEX_LEN: usize = BLOCK_LEN * 2;

/// Rejected hex argument.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexArgError {
    #[error("expected {expected} hex characters, got {found}")]
    InputLength { expected: usize, found: usize },

    #[error("invalid hex digit {ch:?} at position {index}")]
    InvalidHexDigit { ch: char, index: usize },

    #[error(transparent)]
    Decode(hex::FromHexError),
}

/// Decodes exactly 32 hex characters (either case) into a block.
pub fn parse_block_hex(input: &str) -> Result<Block, HexArgError> {
    let found = input.chars().count();
    if found != BLOCK_HEX_LEN {
        return Err(HexArgError::InputLength {
            expected: BLOCK_HEX_LEN,
            found,
        });
    }
    // the decoder reports byte offsets, so multi-byte characters are caught here
    if let Some((index, ch)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(HexArgError::InvalidHexDigit { ch, index });
    }

    let mut block = [0u8; BLOCK_LEN];
    hex::decode_to_slice(input, &mut block).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            HexArgError::InvalidHexDigit { ch: c, index }
        }
        other => HexArgError::Decode(other),
    })?;
    Ok(block)
}
