use clap::Args;

use chrmap_core::digest;
use chrmap_core::{encode_grid, Color};

use crate::io::image;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Source bitmap to analyze
    #[arg(long, default_value = "background.png")]
    pub r#in: String,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let grid = image::load_png(&args.r#in)?;
    let n = grid.pixels().len() as u64;

    // Per-color histogram over the raw grid, plus anything unknown.
    let mut counts = [0u64; 6];
    let mut unknown: u64 = 0;
    for &p in grid.pixels() {
        match Color::ALL.iter().position(|c| c.argb() == p) {
            Some(i) => counts[i] += 1,
            None => unknown += 1,
        }
    }

    eprintln!("--- analyze ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("size            = {}x{}", grid.width(), grid.height());
    eprintln!("pixels          = {}", n);
    for (i, c) in Color::ALL.iter().enumerate() {
        let pct = if n == 0 {
            0.0
        } else {
            (counts[i] as f64) * 100.0 / (n as f64)
        };
        eprintln!(
            "color {:<11} slot={} sys=${:02X} count={} ({:.3}%)",
            format!("{c:?}"),
            c.slot(),
            c.system_index(),
            counts[i],
            pct
        );
    }
    eprintln!("unknown_pixels  = {}", unknown);

    eprintln!("--- artifacts ---");
    if unknown > 0 {
        eprintln!("skipped: image does not validate ({unknown} unknown pixels)");
        return Ok(());
    }

    let art = encode_grid(&grid)?;
    eprintln!("distinct_tiles  = {}", art.distinct_tiles());
    eprintln!(
        "nametable       = {} bytes crc=0x{:08X}",
        art.nametable.len(),
        digest::crc32(&art.nametable)
    );
    eprintln!(
        "pattern         = {} bytes crc=0x{:08X}",
        art.pattern.len(),
        digest::crc32(&art.pattern)
    );
    eprintln!(
        "attribute       = {} bytes crc=0x{:08X}",
        art.attribute.len(),
        digest::crc32(&art.attribute)
    );
    eprintln!("artifact_id     = {}", art.id_hex());

    Ok(())
}
