pub mod error;
pub mod validate;

pub mod palette;
pub mod tile;
pub mod pattern;
pub mod attr;
pub mod digest;
pub mod encode;

pub use crate::encode::{encode_grid, Artifacts};
pub use crate::palette::Color;
pub use crate::tile::{PixelGrid, Tile};
