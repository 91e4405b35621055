// crates/chrmap-core/src/encode.rs

use crate::attr;
use crate::digest;
use crate::error::Result;
use crate::pattern;
use crate::tile::extract::extract_tiles;
use crate::tile::registry::TileRegistry;
use crate::tile::PixelGrid;
use crate::validate;

/// The three tables the PPU needs, each an immutable byte sequence
/// ready to be written verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    /// 256 bytes: tile ID per screen position, row-major 16x16.
    pub nametable: Vec<u8>,
    /// 16 bytes per distinct tile: low plane rows then high plane rows.
    pub pattern: Vec<u8>,
    /// 16 bytes: packed block palette bits, row-major 4x4 super-blocks.
    pub attribute: Vec<u8>,
}

impl Artifacts {
    pub fn distinct_tiles(&self) -> usize {
        self.pattern.len() / pattern::ENTRY_BYTES
    }

    /// Stable 16-byte ID over the three tables, hex-encoded. Two runs
    /// over the same image always agree.
    pub fn id_hex(&self) -> String {
        let mut all =
            Vec::with_capacity(self.nametable.len() + self.pattern.len() + self.attribute.len());
        all.extend_from_slice(&self.nametable);
        all.extend_from_slice(&self.pattern);
        all.extend_from_slice(&self.attribute);
        digest::hex16(&digest::blake3_16(&all))
    }
}

/// Run the whole pipeline over a decoded grid.
///
/// Stage order is fixed: extract -> validate -> dedup/nametable ->
/// pattern table -> attribute table. Every stage is a pure function
/// over the previous one, and a failure in any stage means no
/// artifacts at all.
pub fn encode_grid(grid: &PixelGrid) -> Result<Artifacts> {
    let tiles = extract_tiles(grid)?;
    validate::validate_tiles(&tiles)?;

    let (registry, nametable) = TileRegistry::build(&tiles);
    let pattern = pattern::pattern_table(&registry)?;
    let attribute = attr::attribute_table(&tiles);

    Ok(Artifacts {
        nametable,
        pattern,
        attribute,
    })
}
