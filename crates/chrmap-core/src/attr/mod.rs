// crates/chrmap-core/src/attr/mod.rs
//
// Attribute table derivation. 16x16 screen tiles regroup into 8x8
// blocks of 2x2 tiles; each block gets one palette bit; the 8x8 bit
// grid regroups again into 4x4 super-blocks of one packed byte each,
// so the table is 16 bytes.

pub mod quad;

use crate::palette::Color;
use crate::tile::{Tile, GRID_SIDE};

/// Blocks per row/column after the first regrouping.
pub const BLOCK_SIDE: usize = GRID_SIDE / 2;
/// Super-blocks per row/column after the second regrouping.
pub const SUPER_SIDE: usize = BLOCK_SIDE / 2;
/// Attribute table length in bytes.
pub const ATTR_BYTES: usize = SUPER_SIDE * SUPER_SIDE;

/// Palette bit for one 2x2 tile block: 1 iff any pixel anywhere in the
/// block is one of the marker colors (white/pink), else 0. Existence
/// test over the block's full pixel content, independent of position.
pub fn block_palette(block: &[Tile; 4]) -> u8 {
    let marker = block.iter().any(|tile| {
        tile.pixels
            .iter()
            .any(|&p| p == Color::White.argb() || p == Color::Pink.argb())
    });
    marker as u8
}

/// The 8x8 grid of block palette bits for the whole screen, row-major.
pub fn block_grid(tiles: &[Tile]) -> Vec<u8> {
    quad::quad_groups(tiles, GRID_SIDE)
        .iter()
        .map(block_palette)
        .collect()
}

/// Pack one super-block's four palette bits, ordered
/// [top-left, top-right, bottom-left, bottom-right], into one byte.
/// Each bit sits in the low bit of its own 2-bit quadrant field.
#[inline]
pub fn pack_attr_byte(bits: [u8; 4]) -> u8 {
    bits[0] | (bits[1] << 2) | (bits[2] << 4) | (bits[3] << 6)
}

/// Full attribute table: 16 bytes, row-major over the 4x4 super-block
/// grid.
pub fn attribute_table(tiles: &[Tile]) -> Vec<u8> {
    let bits = block_grid(tiles);
    quad::quad_groups(&bits, BLOCK_SIDE)
        .into_iter()
        .map(pack_attr_byte)
        .collect()
}
