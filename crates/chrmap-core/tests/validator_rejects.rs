// crates/chrmap-core/tests/validator_rejects.rs

use chrmap_core::error::ChrError;
use chrmap_core::tile::IMAGE_SIDE;
use chrmap_core::validate::{tile_is_valid, validate_tiles};
use chrmap_core::{encode_grid, Color, PixelGrid, Tile};

#[test]
fn one_bad_pixel_out_of_64_rejects_the_tile() {
    let mut tile = Tile::solid(Color::DarkGreen.argb());
    assert!(tile_is_valid(&tile));

    tile.pixels[37] = 0xFFDE_ADBE;
    assert!(!tile_is_valid(&tile));

    let err = validate_tiles(&[Tile::solid(Color::Grey.argb()), tile]).unwrap_err();
    match err {
        ChrError::UnknownColor { argb, tile, pixel } => {
            assert_eq!(argb, 0xFFDE_ADBE);
            assert_eq!(tile, 1);
            assert_eq!(pixel, 37);
        }
        other => panic!("expected UnknownColor, got {other:?}"),
    }
}

#[test]
fn a_single_stray_pixel_fails_the_whole_run() {
    let mut pixels = vec![Color::Grey.argb(); IMAGE_SIDE * IMAGE_SIDE];
    pixels[IMAGE_SIDE * 40 + 77] = 0xFF01_0203;
    let grid = PixelGrid::new(IMAGE_SIDE, IMAGE_SIDE, pixels).unwrap();

    assert!(matches!(
        encode_grid(&grid),
        Err(ChrError::UnknownColor { argb: 0xFF01_0203, .. })
    ));
}

#[test]
fn every_named_color_passes() {
    for c in Color::ALL {
        assert!(tile_is_valid(&Tile::solid(c.argb())), "{c:?}");
    }
}
