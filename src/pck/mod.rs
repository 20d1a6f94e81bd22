//! PCK bitmap decoding
//!
//! PCK files from the game's `PICTS` directory hold one full-screen image
//! each: a 6-byte header followed by an LZSS-compressed payload that expands
//! into four EGA-style bit-planes. Decoding runs in two stages, both
//! synchronous and fully buffered:
//!
//! 1. [`lzss::decompress`] expands the payload into the raw planar buffer;
//! 2. [`PlanarImage::reconstruct`] combines one bit from each plane per
//!    pixel into a palette index and resolves it to RGBA.

pub mod lzss;
mod planar;

pub use planar::PlanarImage;

use crate::common::{PckHeader, Result};
use crate::palette::Palette;
use crate::raster::RasterImage;
use std::io::Read;
use std::path::Path;

/// Decode a complete PCK file from a byte slice
///
/// Runs header parsing, decompression, plane validation, and pixel
/// reconstruction in one call. `transparent` selects a color index to
/// render with alpha 0.
pub fn decode_bytes(
    data: &[u8],
    palette: &Palette,
    transparent: Option<u8>,
) -> Result<RasterImage> {
    let (header, planes) = decompressed(data)?;
    let planar = PlanarImage::from_buffer(&planes, header.width, header.height)?;
    Ok(planar.reconstruct(palette, transparent))
}

/// Decode a complete PCK file from any [`Read`] source
///
/// The format has no end-of-stream marker, so the whole input is buffered
/// before decoding starts.
pub fn decode_reader<R: Read>(
    mut reader: R,
    palette: &Palette,
    transparent: Option<u8>,
) -> Result<RasterImage> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_bytes(&data, palette, transparent)
}

/// Decode a PCK file from disk
pub fn decode_file<P: AsRef<Path>>(
    path: P,
    palette: &Palette,
    transparent: Option<u8>,
) -> Result<RasterImage> {
    let data = std::fs::read(path)?;
    decode_bytes(&data, palette, transparent)
}

/// Parse the header and decompress the payload, without reconstructing
/// pixels
///
/// Useful for inspecting the raw four-plane buffer or re-interpreting it
/// with a custom palette pipeline.
pub fn decompressed(data: &[u8]) -> Result<(PckHeader, Vec<u8>)> {
    let (header, payload) = PckHeader::parse(data)?;
    let planes = lzss::decompress(&header, payload)?;
    Ok((header, planes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    // 8x1 image: planes are 1 byte each, stored as a single literal run
    fn tiny_pck() -> Vec<u8> {
        let mut data = vec![0x00, 0x00, 0x08, 0x00, 0x01, 0x00];
        data.extend_from_slice(&[0x03, 0x80, 0x00, 0x00, 0x00]);
        data
    }

    #[test]
    fn test_decode_bytes_end_to_end() {
        let image = decode_bytes(&tiny_pck(), &palette::MAIN, None).unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 2); // row doubling
        assert_eq!(image.pixel(0, 0), [0xf7, 0xf7, 0xf7, 255]); // index 1
        assert_eq!(image.pixel(1, 0), [0x00, 0x00, 0x00, 255]); // index 0
    }

    #[test]
    fn test_decode_reader_matches_bytes() {
        let data = tiny_pck();
        let from_bytes = decode_bytes(&data, &palette::GAME, Some(0)).unwrap();
        let from_reader =
            decode_reader(std::io::Cursor::new(&data), &palette::GAME, Some(0)).unwrap();
        assert_eq!(from_bytes, from_reader);
    }

    #[test]
    fn test_decompressed_exposes_planes() {
        let (header, planes) = decompressed(&tiny_pck()).unwrap();
        assert_eq!(header.width, 8);
        assert_eq!(header.height, 1);
        assert_eq!(planes, vec![0x80, 0x00, 0x00, 0x00]);
    }
}
