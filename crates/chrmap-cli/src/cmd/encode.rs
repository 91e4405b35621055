use clap::Args;
use log::info;

use chrmap_core::digest;
use chrmap_core::encode_grid;

use crate::io::{bin, image};

#[derive(Args)]
pub struct EncodeArgs {
    /// Source bitmap (128x128 PNG using the six known colors)
    #[arg(long, default_value = "background.png")]
    pub r#in: String,

    /// Nametable output path (256 bytes, one tile ID per position)
    #[arg(long, default_value = "nametable.bin")]
    pub nametable: String,

    /// Pattern table output path (16 bytes per distinct tile)
    #[arg(long, default_value = "pattern.bin")]
    pub pattern: String,

    /// Attribute table output path (16 bytes)
    #[arg(long, default_value = "attribute.bin")]
    pub attribute: String,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let grid = image::load_png(&args.r#in)?;
    info!("decoded {}: {}x{}", args.r#in, grid.width(), grid.height());

    let art = encode_grid(&grid)?;
    info!("encoded: {} distinct tiles", art.distinct_tiles());

    // No partial output: the three writes happen only once the whole
    // pipeline has succeeded.
    bin::write_artifact(&args.nametable, &art.nametable)?;
    bin::write_artifact(&args.pattern, &art.pattern)?;
    bin::write_artifact(&args.attribute, &art.attribute)?;

    eprintln!(
        "encode ok: in={} distinct_tiles={} nametable={}B crc=0x{:08X} pattern={}B crc=0x{:08X} attribute={}B crc=0x{:08X} id={}",
        args.r#in,
        art.distinct_tiles(),
        art.nametable.len(),
        digest::crc32(&art.nametable),
        art.pattern.len(),
        digest::crc32(&art.pattern),
        art.attribute.len(),
        digest::crc32(&art.attribute),
        art.id_hex(),
    );

    Ok(())
}
