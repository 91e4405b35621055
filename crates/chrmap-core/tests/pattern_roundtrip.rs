// crates/chrmap-core/tests/pattern_roundtrip.rs

use chrmap_core::pattern::{encode_tile, slot_at};
use chrmap_core::tile::{TILE_PIXELS, TILE_SIDE};
use chrmap_core::{Color, Tile};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

fn random_valid_tile(seed: &mut u64) -> Tile {
    let mut pixels = [0u32; TILE_PIXELS];
    for p in pixels.iter_mut() {
        let pick = (lcg_next(seed) >> 60) as usize % Color::ALL.len();
        *p = Color::ALL[pick].argb();
    }
    Tile { pixels }
}

#[test]
fn planes_reconstruct_every_palette_slot() {
    let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;

    for round in 0..64 {
        let tile = random_valid_tile(&mut seed);
        let entry = encode_tile(&tile).expect("encode ok");

        for y in 0..TILE_SIDE {
            for x in 0..TILE_SIDE {
                let argb = tile.pixels[y * TILE_SIDE + x];
                let want = Color::from_argb(argb).unwrap().slot();
                let got = slot_at(&entry, x, y);
                assert_eq!(got, want, "round={round} x={x} y={y}");
            }
        }
    }
}

#[test]
fn entry_bytes_are_low_plane_then_high_plane() {
    // Solid black: slot 1 -> low plane all ones, high plane all zero.
    let entry = encode_tile(&Tile::solid(Color::Black.argb())).unwrap();
    let bytes = entry.to_bytes();
    assert_eq!(&bytes[..8], &[0xFF; 8]);
    assert_eq!(&bytes[8..], &[0x00; 8]);

    // Solid pink: slot 3 -> both planes all ones.
    let entry = encode_tile(&Tile::solid(Color::Pink.argb())).unwrap();
    let bytes = entry.to_bytes();
    assert_eq!(bytes, [0xFF; 16]);
}

#[test]
fn aliased_colors_encode_to_identical_planes() {
    // LightGreen and White share slot 2; their pattern entries cannot
    // differ. The attribute table is what tells them apart on screen.
    let a = encode_tile(&Tile::solid(Color::LightGreen.argb())).unwrap();
    let b = encode_tile(&Tile::solid(Color::White.argb())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn refuses_a_tile_with_an_unknown_pixel() {
    let mut tile = Tile::solid(Color::Grey.argb());
    tile.pixels[10] = 0xFF10_2030;
    assert!(encode_tile(&tile).is_err());
}
