//! Output encodings of a genesis state.

use crate::{Error, Result};
use ethereum_common::{
    beacon::{BLOCK_HEADER_SSZ_LEN, TEE_BLOCK_HEADER_SSZ_LEN},
    ssz::{Encode, BYTES_PER_LENGTH_OFFSET},
};
use std::{fmt, str::FromStr};

/// Bytes of `genesis_time`, `genesis_validators_root`, `slot` and `fork`.
pub const STATE_PREFIX_LEN: usize = 8 + 32 + 8 + 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Ssz,
    Json,
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "ssz" | "application/octet-stream" => Ok(Self::Ssz),
            "text" | "json" | "application/json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ssz => "application/octet-stream",
            Self::Json => "application/json",
        })
    }
}

/// Outcome of the check of the first offset of an encoded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetCheck {
    /// The encoding ends before the offset table.
    TooShort,
    Consistent { offset: u32 },
    /// The offset points into the fixed part that precedes it.
    IntoFixedPart { offset: u32, position: usize },
}

/// Reads the first variable-field offset of an encoded state, the offset of
/// `historical_roots` that follows the header and the two root vectors.
///
/// An offset pointing before its own position means the encoder sized the
/// header differently from what it wrote.
pub fn check_first_offset(
    bytes: &[u8],
    header_len: usize,
    slots_per_historical_root: usize,
) -> OffsetCheck {
    let position = STATE_PREFIX_LEN + header_len + 2 * slots_per_historical_root * 32;
    let Some(raw) = bytes.get(position..position + BYTES_PER_LENGTH_OFFSET) else {
        return OffsetCheck::TooShort;
    };

    let mut offset = [0u8; BYTES_PER_LENGTH_OFFSET];
    offset.copy_from_slice(raw);
    let offset = u32::from_le_bytes(offset);

    log::info!("First offset at position {position}: {offset}");
    log::info!(
        "Fixed prefix ends at {} (TEE header) or {} (standard header)",
        STATE_PREFIX_LEN + TEE_BLOCK_HEADER_SSZ_LEN,
        STATE_PREFIX_LEN + BLOCK_HEADER_SSZ_LEN
    );

    match offset as usize <= position {
        true => {
            log::warn!(
                "Offset {offset} points into the fixed part ending at {position}, the encoder \
                 sized the {header_len} bytes header differently"
            );

            OffsetCheck::IntoFixedPart { offset, position }
        }
        false => OffsetCheck::Consistent { offset },
    }
}

/// SSZ encoding of `state` whose latest block header is `header`. The layout
/// check is advisory and never fails the encoding.
pub fn encode_ssz<S, H>(state: &S, header: &H, slots_per_historical_root: usize) -> Vec<u8>
where
    S: Encode,
    H: Encode,
{
    let header_len = header.ssz_bytes_len();
    log::info!(
        "Block header SSZ size before state encoding: {header_len} bytes (expected TEE: \
         {TEE_BLOCK_HEADER_SSZ_LEN}, standard: {BLOCK_HEADER_SSZ_LEN})"
    );

    let bytes = state.as_ssz_bytes();
    check_first_offset(&bytes, header_len, slots_per_historical_root);
    log::info!("Total beacon state SSZ size: {} bytes", bytes.len());

    bytes
}
