// crates/chrmap-core/src/tile/extract.rs

use crate::error::{ChrError, Result};
use crate::tile::{PixelGrid, Tile, GRID_SIDE, IMAGE_SIDE, TILE_PIXELS, TILE_SIDE};

/// Slice the grid into the 256 screen tiles, row-major over the 16x16
/// tile grid, each tile row-major over its 8x8 pixels.
///
/// The 128x128 dimension is a precondition: anything else is fatal, and
/// no downstream stage runs.
pub fn extract_tiles(grid: &PixelGrid) -> Result<Vec<Tile>> {
    if grid.width() != IMAGE_SIDE || grid.height() != IMAGE_SIDE {
        return Err(ChrError::Dimension {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut tiles = Vec::with_capacity(GRID_SIDE * GRID_SIDE);
    for ty in 0..GRID_SIDE {
        for tx in 0..GRID_SIDE {
            let mut pixels = [0u32; TILE_PIXELS];
            for y in 0..TILE_SIDE {
                for x in 0..TILE_SIDE {
                    pixels[y * TILE_SIDE + x] = grid.at(tx * TILE_SIDE + x, ty * TILE_SIDE + y);
                }
            }
            tiles.push(Tile { pixels });
        }
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::GRID_TILES;

    #[test]
    fn rejects_non_square_input() {
        let grid = PixelGrid::new(128, 64, vec![0; 128 * 64]).unwrap();
        assert!(matches!(
            extract_tiles(&grid),
            Err(ChrError::Dimension {
                width: 128,
                height: 64
            })
        ));
    }

    #[test]
    fn tiles_are_row_major_both_levels() {
        // Pixel value = its own (x, y), so every slice is checkable.
        let mut pixels = Vec::with_capacity(IMAGE_SIDE * IMAGE_SIDE);
        for y in 0..IMAGE_SIDE {
            for x in 0..IMAGE_SIDE {
                pixels.push(((y as u32) << 16) | x as u32);
            }
        }
        let grid = PixelGrid::new(IMAGE_SIDE, IMAGE_SIDE, pixels).unwrap();
        let tiles = extract_tiles(&grid).unwrap();
        assert_eq!(tiles.len(), GRID_TILES);

        // Tile (tx=3, ty=2), pixel (x=5, y=7) is image pixel (29, 23).
        let t = &tiles[2 * GRID_SIDE + 3];
        assert_eq!(t.pixels[7 * TILE_SIDE + 5], (23 << 16) | 29);
    }
}
