//! warlords-assets - Rust decoders for Warlords binary asset formats
//!
//! This crate provides pure Rust decoders for the two proprietary asset
//! formats of the classic Warlords strategy game (1990, DOS era): the
//! LZSS-compressed planar bitmaps stored as `.PCK` files in the game's
//! `PICTS` directory, and the fixed-grid `.MAP` tile maps such as
//! `ILLURIA.MAP`. Both formats were recovered by inspection; there is no
//! original encoder and the crate is decode-only.
//!
//! # Features
//!
//! - **PCK decoding** - LZSS-style decompression plus EGA-style 4-plane
//!   bitmap reconstruction into an RGBA raster
//! - Two reverse-engineered 16-color palettes (`main` and `game`)
//! - Optional transparent color index
//! - **MAP decoding** - 16-bit tile-grid parsing with attribute/ID split,
//!   plus a scenery atlas and compositor for rendering full map canvases
//!
//! # Example - Decoding a PCK bitmap
//!
//! ```no_run
//! use warlords_assets::{decode_pck_bytes, Palette};
//!
//! let data = std::fs::read("PICTS/MAIN.PCK")?;
//! let image = decode_pck_bytes(&data, Palette::by_name("main")?, None)?;
//! println!("{}x{} RGBA pixels", image.width(), image.height());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example - Decoding a tile map
//!
//! ```no_run
//! use warlords_assets::TileMap;
//!
//! let data = std::fs::read("ILLURIA.MAP")?;
//! // Grid dimensions are not stored in the file; Illuria is 109x156.
//! let map = TileMap::from_bytes(&data, 109, 156)?;
//! println!("tile at (0, 0): {:#04x}", map.tile_id(0, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod error;
pub mod map;
pub mod palette;
pub mod pck;
pub mod raster;

// Re-export commonly used types
pub use common::{
    AssetError, PckHeader, Result, PALETTE_SIZE, PCK_HEADER_SIZE, PIXELS_PER_BYTE, PLANE_COUNT,
};
pub use map::{SceneryAtlas, TileMap, TileMapping};
pub use palette::Palette;
pub use pck::PlanarImage;
pub use raster::RasterImage;

// Convenience functions

/// Decode a complete PCK file (header plus compressed payload) into an
/// RGBA raster
///
/// # Arguments
/// * `data` - The raw file bytes, starting with the 6-byte header
/// * `palette` - The 16-color palette to resolve pixel indices against
/// * `transparent` - Optional color index rendered fully transparent
///
/// # Returns
/// The reconstructed raster, with every source row doubled to correct for
/// the original display's non-square pixels
pub fn decode_pck_bytes(
    data: &[u8],
    palette: &Palette,
    transparent: Option<u8>,
) -> Result<RasterImage> {
    pck::decode_bytes(data, palette, transparent)
}

/// Decompress a complete PCK file into its raw planar payload
///
/// Stops after the LZSS stage, for callers that want the undecoded
/// four-plane buffer together with the parsed header.
pub fn decompress_pck_bytes(data: &[u8]) -> Result<(PckHeader, Vec<u8>)> {
    pck::decompressed(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        // Common types are accessible from the crate root
        let _ = Palette::by_name("game").unwrap();
        assert_eq!(PLANE_COUNT, 4);

        // Convenience functions are accessible and reject garbage
        assert!(decode_pck_bytes(&[0u8; 2], Palette::by_name("main").unwrap(), None).is_err());
    }
}
