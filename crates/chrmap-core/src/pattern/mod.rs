// crates/chrmap-core/src/pattern/mod.rs
//
// 2-bit-per-pixel planar encoding. Per tile: each pixel's palette slot
// is split into a low and a high bit; each 64-bit plane packs into 8
// row bytes, MSB = leftmost pixel. The pattern table is the per-tile
// concatenation, low plane first, in ascending registry ID order.

pub mod bitpack;

use crate::error::{ChrError, Result};
use crate::palette::Color;
use crate::tile::registry::TileRegistry;
use crate::tile::{Tile, TILE_PIXELS, TILE_SIDE};

/// Bytes one tile contributes to the pattern table.
pub const ENTRY_BYTES: usize = 2 * TILE_SIDE;

/// The two bit planes of one distinct tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PatternEntry {
    pub low: [u8; TILE_SIDE],
    pub high: [u8; TILE_SIDE],
}

impl PatternEntry {
    /// 16 bytes: low plane rows then high plane rows.
    #[inline]
    pub fn to_bytes(self) -> [u8; ENTRY_BYTES] {
        let mut out = [0u8; ENTRY_BYTES];
        out[..TILE_SIDE].copy_from_slice(&self.low);
        out[TILE_SIDE..].copy_from_slice(&self.high);
        out
    }
}

/// Encode one tile into its two planes.
///
/// Callers have already run the validator; an unresolvable pixel here
/// is still refused rather than encoded as garbage.
pub fn encode_tile(tile: &Tile) -> Result<PatternEntry> {
    let mut low_bits = [0u8; TILE_PIXELS];
    let mut high_bits = [0u8; TILE_PIXELS];

    for (i, &argb) in tile.pixels.iter().enumerate() {
        let slot = match Color::from_argb(argb) {
            Some(c) => c.slot(),
            None => {
                return Err(ChrError::UnknownColor {
                    argb,
                    tile: 0,
                    pixel: i,
                });
            }
        };
        low_bits[i] = slot & 1;
        high_bits[i] = slot >> 1;
    }

    Ok(PatternEntry {
        low: bitpack::pack_plane(&low_bits)?,
        high: bitpack::pack_plane(&high_bits)?,
    })
}

/// Full pattern table: 16 bytes per distinct tile, ascending ID order.
pub fn pattern_table(registry: &TileRegistry) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(registry.distinct() * ENTRY_BYTES);
    for (id, tile) in registry.tiles().iter().enumerate() {
        let entry = encode_tile(tile).map_err(|e| match e {
            ChrError::UnknownColor { argb, pixel, .. } => ChrError::UnknownColor {
                argb,
                tile: id,
                pixel,
            },
            other => other,
        })?;
        out.extend_from_slice(&entry.to_bytes());
    }
    Ok(out)
}

/// Read one pixel's slot back out of an entry. Test-side inverse of
/// `encode_tile`; also what a PPU does per dot.
pub fn slot_at(entry: &PatternEntry, x: usize, y: usize) -> u8 {
    debug_assert!(x < TILE_SIDE && y < TILE_SIDE);
    let low = (entry.low[y] >> (7 - x)) & 1;
    let high = (entry.high[y] >> (7 - x)) & 1;
    (high << 1) | low
}
