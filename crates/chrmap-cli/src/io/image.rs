// crates/chrmap-cli/src/io/image.rs

use anyhow::Context;
use chrmap_core::PixelGrid;

/// Decode a PNG into a row-major ARGB grid.
///
/// Accepts 8-bit RGB and RGBA. The known colors are fully opaque, so
/// RGB pixels get alpha 0xFF; RGBA alpha is kept as-is, which means a
/// translucent pixel fails color validation downstream instead of
/// silently aliasing a known color.
pub fn load_png(path: &str) -> anyhow::Result<PixelGrid> {
    let file = std::fs::File::open(path).with_context(|| format!("open image: {path}"))?;
    let decoder = png::Decoder::new(file);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("read png info: {path}"))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("decode png frame: {path}"))?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        anyhow::bail!("unsupported png bit depth {:?} (need 8)", info.bit_depth);
    }

    let (width, height) = (info.width as usize, info.height as usize);
    let mut pixels = Vec::with_capacity(width * height);
    match info.color_type {
        png::ColorType::Rgb => {
            for px in bytes.chunks_exact(3) {
                pixels.push(argb(0xFF, px[0], px[1], px[2]));
            }
        }
        png::ColorType::Rgba => {
            for px in bytes.chunks_exact(4) {
                pixels.push(argb(px[3], px[0], px[1], px[2]));
            }
        }
        other => anyhow::bail!("unsupported png color type {other:?} (need RGB or RGBA)"),
    }

    Ok(PixelGrid::new(width, height, pixels)?)
}

#[inline]
fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
