use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChrError>;

#[derive(Debug, Error)]
pub enum ChrError {
    #[error("dimension error: expected a 128x128 pixel grid, got {width}x{height}")]
    Dimension { width: usize, height: usize },

    #[error("unknown color 0x{argb:08X} at tile {tile}, pixel {pixel}")]
    UnknownColor { argb: u32, tile: usize, pixel: usize },

    #[error("bit group error: {0}")]
    BitGroup(String),
}
