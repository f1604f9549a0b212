//! Fixed-width little-endian integer codec.
//!
//! Decoding requires the input slice to have exactly the width of the
//! target integer. Anything shorter or longer is a layout error, never
//! silently padded or truncated.

use crate::error::VestingError;

pub const U64_LEN: usize = 8;
pub const U32_LEN: usize = 4;

pub fn encode_u64(value: u64) -> [u8; U64_LEN] {
    value.to_le_bytes()
}

pub fn decode_u64(bytes: &[u8]) -> Result<u64, VestingError> {
    let bytes: [u8; U64_LEN] = bytes.try_into().map_err(|_| VestingError::Layout {
        expected: U64_LEN,
        got: bytes.len(),
    })?;
    Ok(u64::from_le_bytes(bytes))
}

pub fn encode_u32(value: u32) -> [u8; U32_LEN] {
    value.to_le_bytes()
}

pub fn decode_u32(bytes: &[u8]) -> Result<u32, VestingError> {
    let bytes: [u8; U32_LEN] = bytes.try_into().map_err(|_| VestingError::Layout {
        expected: U32_LEN,
        got: bytes.len(),
    })?;
    Ok(u32::from_le_bytes(bytes))
}
