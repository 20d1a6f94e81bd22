//! The two reverse-engineered 16-color Warlords palettes
//!
//! PCK pixels are 4-bit indices; these tables map them to full RGB. Neither
//! table is stored in the game files - `MAIN` was measured from the title
//! screen artwork of `MAIN.PCK`, and `GAME` is the VGA DAC palette the game
//! programs at startup (6-bit channel values, shifted up to 8 bits here).
//! Which table applies to which file is a policy decision left to the
//! caller.

use crate::common::{AssetError, Result, PALETTE_SIZE};

/// An ordered 16-entry RGB color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; PALETTE_SIZE],
}

/// Palette measured from MAIN.PCK title artwork
pub const MAIN: Palette = Palette {
    colors: [
        [0x00, 0x00, 0x00],
        [0xf7, 0xf7, 0xf7],
        [0x9e, 0x86, 0x5a],
        [0x78, 0x65, 0x40],
        [0x58, 0x45, 0x31],
        [0xc6, 0x00, 0x00],
        [0x34, 0x34, 0x34],
        [0x6e, 0x06, 0x0f],
        [0x58, 0x45, 0x31],
        [0xa4, 0x00, 0x04],
        [0x55, 0x55, 0x66],
        [0x78, 0x65, 0x40],
        [0xe2, 0x93, 0x6f],
        [0x99, 0x86, 0x60],
        [0xdd, 0xb6, 0x3f],
        [0xb6, 0xb7, 0x92],
    ],
};

/// In-game VGA DAC palette (6-bit values scaled by 4)
pub const GAME: Palette = Palette {
    colors: [
        [0x00 << 2, 0x00 << 2, 0x00 << 2],
        [0x3d << 2, 0x3d << 2, 0x3d << 2],
        [0x25 << 2, 0x25 << 2, 0x25 << 2],
        [0x1d << 2, 0x1d << 2, 0x1d << 2],
        [0x15 << 2, 0x15 << 2, 0x15 << 2],
        [0x00 << 2, 0x00 << 2, 0x00 << 2],
        [0x25 << 2, 0x15 << 2, 0x00 << 2],
        [0x19 << 2, 0x0d << 2, 0x00 << 2],
        [0x00 << 2, 0x21 << 2, 0x31 << 2],
        [0x00 << 2, 0x15 << 2, 0x31 << 2],
        [0x00 << 2, 0x19 << 2, 0x00 << 2],
        [0x0a << 2, 0x21 << 2, 0x0a << 2],
        [0x15 << 2, 0x25 << 2, 0x15 << 2],
        [0x31 << 2, 0x00 << 2, 0x00 << 2],
        [0x31 << 2, 0x21 << 2, 0x00 << 2],
        [0x31 << 2, 0x31 << 2, 0x00 << 2],
    ],
};

impl Palette {
    /// Look up one of the built-in palettes by name
    ///
    /// Recognized names are `"main"` and `"game"`; anything else fails with
    /// [`AssetError::UnknownPalette`].
    pub fn by_name(name: &str) -> Result<&'static Palette> {
        match name {
            "main" => Ok(&MAIN),
            "game" => Ok(&GAME),
            other => Err(AssetError::UnknownPalette(other.to_string())),
        }
    }

    /// RGB triple for a 4-bit color index
    ///
    /// # Panics
    /// Panics if `index >= 16`. Indices produced by the planar
    /// reconstructor are 4 bits wide and cannot reach this.
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.colors[index as usize]
    }
}
