// crates/chrmap-core/src/palette.rs

/// The closed set of colors a source bitmap may use.
///
/// Each color carries three fixed mappings:
/// - a 32-bit ARGB pixel value (what the decoded bitmap contains),
/// - a 2-bit palette slot (what the pattern planes encode),
/// - an index into the NES master palette (reporting only; no emitted
///   artifact uses it).
///
/// LightGreen/White and DarkGreen/Pink intentionally share a slot: the
/// slot collision is resolved per 2x2 tile block by the attribute table,
/// which flips those blocks to the alternate palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Grey,
    Black,
    LightGreen,
    DarkGreen,
    White,
    Pink,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Grey,
        Color::Black,
        Color::LightGreen,
        Color::DarkGreen,
        Color::White,
        Color::Pink,
    ];

    /// ARGB pixel value as found in the decoded bitmap (alpha always 0xFF).
    pub const fn argb(self) -> u32 {
        match self {
            Color::Grey => 0xFF7C_7C7C,
            Color::Black => 0xFF00_0000,
            Color::LightGreen => 0xFF58_D854,
            Color::DarkGreen => 0xFF00_A800,
            Color::White => 0xFFFC_FCFC,
            Color::Pink => 0xFFF8_B8F8,
        }
    }

    /// 2-bit palette slot written into the pattern planes.
    pub const fn slot(self) -> u8 {
        match self {
            Color::Grey => 0,
            Color::Black => 1,
            Color::LightGreen | Color::White => 2,
            Color::DarkGreen | Color::Pink => 3,
        }
    }

    /// Index into the NES master palette for this color.
    pub const fn system_index(self) -> u8 {
        match self {
            Color::Grey => 0x00,
            Color::Black => 0x0F,
            Color::LightGreen => 0x2A,
            Color::DarkGreen => 0x1A,
            Color::White => 0x30,
            Color::Pink => 0x34,
        }
    }

    /// True for the marker colors that force a block onto the alternate
    /// palette regardless of the rest of the block's content.
    pub const fn forces_alt_palette(self) -> bool {
        matches!(self, Color::White | Color::Pink)
    }

    /// Reverse lookup from a decoded pixel value. None means the pixel
    /// is not part of the closed color set.
    pub fn from_argb(argb: u32) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.argb() == argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_lookup_is_total_over_the_closed_set() {
        for c in Color::ALL {
            assert_eq!(Color::from_argb(c.argb()), Some(c));
        }
        assert_eq!(Color::from_argb(0xFF12_3456), None);
    }

    #[test]
    fn slot_aliasing_pairs() {
        assert_eq!(Color::LightGreen.slot(), Color::White.slot());
        assert_eq!(Color::DarkGreen.slot(), Color::Pink.slot());
        assert_ne!(Color::LightGreen.slot(), Color::DarkGreen.slot());
    }

    #[test]
    fn only_white_and_pink_are_markers() {
        for c in Color::ALL {
            let expect = c == Color::White || c == Color::Pink;
            assert_eq!(c.forces_alt_palette(), expect, "{c:?}");
        }
    }
}
