use clap::Args;

use chrmap_core::tile::extract::extract_tiles;
use chrmap_core::validate;

use crate::io::image;

#[derive(Args)]
pub struct CheckArgs {
    /// Source bitmap to validate
    #[arg(long, default_value = "background.png")]
    pub r#in: String,
}

/// Dimension and color validation only; writes nothing. The exit
/// status is the signal, the error message names the failing check.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let grid = image::load_png(&args.r#in)?;
    let tiles = extract_tiles(&grid)?;
    validate::validate_tiles(&tiles)?;

    eprintln!(
        "check ok: {} ({} tiles, every pixel a known color)",
        args.r#in,
        tiles.len()
    );
    Ok(())
}
