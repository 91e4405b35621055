// crates/chrmap-core/src/pattern/bitpack.rs

use crate::error::{ChrError, Result};
use crate::tile::TILE_SIDE;

/// Pack a group of exactly 8 binary values into one byte.
///
/// Bit order is MSB-first: the element at index `i` lands at bit
/// position `7 - i`, so the first element is the high-order bit.
///
/// Requirements:
/// - `bits` must have length 8.
/// - Every element must be exactly 0 or 1.
pub fn pack_bits(bits: &[u8]) -> Result<u8> {
    if bits.len() != TILE_SIDE {
        return Err(ChrError::BitGroup(format!(
            "need exactly {} bits, got {}",
            TILE_SIDE,
            bits.len()
        )));
    }

    let mut out = 0u8;
    for (i, &bit) in bits.iter().enumerate() {
        match bit {
            0 => {}
            1 => out |= 1u8 << (7 - i),
            _ => {
                return Err(ChrError::BitGroup(format!(
                    "bit out of range: value={} at index={}",
                    bit, i
                )));
            }
        }
    }
    Ok(out)
}

/// Pack a full 64-bit plane (row-major) into its 8 row bytes.
pub fn pack_plane(bits: &[u8]) -> Result<[u8; TILE_SIDE]> {
    if bits.len() != TILE_SIDE * TILE_SIDE {
        return Err(ChrError::BitGroup(format!(
            "need exactly {} plane bits, got {}",
            TILE_SIDE * TILE_SIDE,
            bits.len()
        )));
    }

    let mut out = [0u8; TILE_SIDE];
    for (row, chunk) in bits.chunks_exact(TILE_SIDE).enumerate() {
        out[row] = pack_bits(chunk)?;
    }
    Ok(out)
}
