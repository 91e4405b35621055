use crate::error::{ChrError, Result};
use crate::palette::Color;
use crate::tile::Tile;

/// True iff every pixel of the tile is a member of the closed color set.
/// (The 64-pixel length is carried by the `Tile` type itself.)
pub fn tile_is_valid(tile: &Tile) -> bool {
    tile.pixels.iter().all(|&p| Color::from_argb(p).is_some())
}

/// Global precondition for the whole pipeline: a single invalid pixel
/// anywhere aborts the run before any artifact is produced.
///
/// Reports the first offending tile/pixel in scan order.
pub fn validate_tiles(tiles: &[Tile]) -> Result<()> {
    for (ti, tile) in tiles.iter().enumerate() {
        for (pi, &argb) in tile.pixels.iter().enumerate() {
            if Color::from_argb(argb).is_none() {
                return Err(ChrError::UnknownColor {
                    argb,
                    tile: ti,
                    pixel: pi,
                });
            }
        }
    }
    Ok(())
}
