// crates/chrmap-core/src/tile/registry.rs

use std::collections::HashMap;

use crate::tile::Tile;

/// Injective mapping from distinct tile to dense 0-based ID.
///
/// IDs are assigned in first-occurrence order while scanning tile
/// positions row-major. That order is the contract: it never depends on
/// tile content ordering, so a given image always yields the same IDs.
///
/// A 256-position grid can hold at most 256 distinct tiles, so IDs
/// always fit in a byte and the nametable is one byte per position.
pub struct TileRegistry {
    ids: HashMap<Tile, u8>,
    order: Vec<Tile>,
}

impl TileRegistry {
    /// Scan tiles once in position order; a tile not yet seen gets the
    /// next ID (current registry size). Returns the registry and the
    /// nametable: one ID byte per position, in the original order.
    pub fn build(tiles: &[Tile]) -> (TileRegistry, Vec<u8>) {
        let mut ids: HashMap<Tile, u8> = HashMap::new();
        let mut order: Vec<Tile> = Vec::new();
        let mut nametable = Vec::with_capacity(tiles.len());

        for tile in tiles {
            let id = match ids.get(tile) {
                Some(&id) => id,
                None => {
                    debug_assert!(order.len() < 256, "more distinct tiles than positions");
                    let id = order.len() as u8;
                    ids.insert(*tile, id);
                    order.push(*tile);
                    id
                }
            };
            nametable.push(id);
        }

        (TileRegistry { ids, order }, nametable)
    }

    /// Number of distinct tiles registered.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Distinct tiles in ascending ID order.
    pub fn tiles(&self) -> &[Tile] {
        &self.order
    }

    pub fn id_of(&self, tile: &Tile) -> Option<u8> {
        self.ids.get(tile).copied()
    }
}
