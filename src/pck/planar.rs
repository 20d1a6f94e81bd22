//! Planar bitmap reconstruction
//!
//! A decompressed PCK payload is four equal bit-planes laid out back to
//! back. Each pixel's 4-bit color index is assembled from one bit of each
//! plane, least significant plane first, under the mask `0x80 >> (x % 8)`.
//! The original hardware drew non-square pixels, so every reconstructed
//! row is emitted twice to keep the aspect ratio on modern displays.

use crate::common::{AssetError, Result, PIXELS_PER_BYTE, PLANE_COUNT};
use crate::palette::Palette;
use crate::raster::{RasterImage, TRANSPARENT};

/// Four equal bit-plane slices plus pixel dimensions
///
/// A borrowed, immutable view over a decompressed buffer; nothing is
/// copied until [`reconstruct`](Self::reconstruct) allocates the output
/// raster.
#[derive(Debug, Clone, Copy)]
pub struct PlanarImage<'a> {
    planes: [&'a [u8]; PLANE_COUNT],
    width_bytes: usize,
    height: usize,
}

impl<'a> PlanarImage<'a> {
    /// Quarter a decompressed buffer into four planes for a width x height
    /// image
    ///
    /// Fails with [`AssetError::MalformedPlanarImage`] when the buffer does
    /// not hold exactly `4 * ceil(width / 8) * height` bytes.
    pub fn from_buffer(buf: &'a [u8], width: u16, height: u16) -> Result<Self> {
        let width_bytes = (width as usize).div_ceil(PIXELS_PER_BYTE);
        let expected = width_bytes * height as usize;
        if buf.len() != expected * PLANE_COUNT {
            return Err(AssetError::MalformedPlanarImage {
                expected: expected * PLANE_COUNT,
                actual: buf.len(),
            });
        }
        let (p0, rest) = buf.split_at(expected);
        let (p1, rest) = rest.split_at(expected);
        let (p2, p3) = rest.split_at(expected);
        Ok(Self {
            planes: [p0, p1, p2, p3],
            width_bytes,
            height: height as usize,
        })
    }

    /// Width in pixels (always a multiple of 8)
    pub fn width(&self) -> usize {
        self.width_bytes * PIXELS_PER_BYTE
    }

    /// Height in source rows (before row doubling)
    pub fn height(&self) -> usize {
        self.height
    }

    /// The 4-bit color index of the pixel at (x, y)
    ///
    /// # Panics
    /// Panics if (x, y) is outside the image.
    pub fn color_index(&self, x: usize, y: usize) -> u8 {
        let at = x / PIXELS_PER_BYTE + y * self.width_bytes;
        let mask = 0x80 >> (x % PIXELS_PER_BYTE);
        let mut index = 0;
        for (bit, plane) in self.planes.iter().enumerate() {
            if plane[at] & mask != 0 {
                index |= 1 << bit;
            }
        }
        index
    }

    /// Resolve every pixel against a palette into an RGBA raster
    ///
    /// Pixels whose index equals `transparent` get alpha 0; all others are
    /// opaque palette colors. Each source row is written to two consecutive
    /// output rows, so the result is twice as tall as the planar image.
    pub fn reconstruct(&self, palette: &Palette, transparent: Option<u8>) -> RasterImage {
        let mut image = RasterImage::new(self.width(), self.height * 2, TRANSPARENT);
        for y in 0..self.height {
            for x in 0..self.width() {
                let index = self.color_index(x, y);
                let rgba = if Some(index) == transparent {
                    TRANSPARENT
                } else {
                    let [r, g, b] = palette.color(index);
                    [r, g, b, 255]
                };
                image.put_pixel(x, y * 2, rgba);
                image.put_pixel(x, y * 2 + 1, rgba);
            }
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_plane_split() {
        let buf: Vec<u8> = (0..8).collect();
        let planar = PlanarImage::from_buffer(&buf, 16, 1).unwrap();
        assert_eq!(planar.planes[0], &[0, 1]);
        assert_eq!(planar.planes[3], &[6, 7]);
        assert_eq!(planar.width(), 16);
        assert_eq!(planar.height(), 1);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let buf = [0u8; 9];
        let err = PlanarImage::from_buffer(&buf, 16, 1).unwrap_err();
        assert!(matches!(
            err,
            AssetError::MalformedPlanarImage {
                expected: 8,
                actual: 9,
            }
        ));
    }

    #[test]
    fn test_color_index_combines_planes() {
        // First pixel set in planes 0 and 2 -> index 0b0101
        let buf = [0x80, 0x00, 0x80, 0x00];
        let planar = PlanarImage::from_buffer(&buf, 8, 1).unwrap();
        assert_eq!(planar.color_index(0, 0), 5);
        assert_eq!(planar.color_index(1, 0), 0);
    }

    #[test]
    fn test_single_bit_resolves_to_index_one() {
        let buf = [0x80, 0x00, 0x00, 0x00];
        let planar = PlanarImage::from_buffer(&buf, 8, 1).unwrap();
        assert_eq!(planar.color_index(0, 0), 1);
        assert_eq!(planar.color_index(1, 0), 0);
    }

    #[test]
    fn test_reconstruct_doubles_rows() {
        let buf = [0x80, 0x00, 0x00, 0x00];
        let planar = PlanarImage::from_buffer(&buf, 8, 1).unwrap();
        let image = planar.reconstruct(&palette::MAIN, None);
        assert_eq!(image.height(), 2);
        for x in 0..8 {
            assert_eq!(image.pixel(x, 0), image.pixel(x, 1));
        }
        assert_eq!(image.pixel(0, 0), [0xf7, 0xf7, 0xf7, 255]);
    }

    #[test]
    fn test_transparent_index() {
        let buf = [0x80, 0x00, 0x00, 0x00];
        let planar = PlanarImage::from_buffer(&buf, 8, 1).unwrap();

        let with = planar.reconstruct(&palette::MAIN, Some(1));
        assert_eq!(with.pixel(0, 0), TRANSPARENT);

        let without = planar.reconstruct(&palette::MAIN, None);
        assert_eq!(without.pixel(0, 0)[3], 255);
        let [r, g, b] = palette::MAIN.color(1);
        assert_eq!(&without.pixel(0, 0)[..3], &[r, g, b]);
    }

    #[test]
    fn test_second_row_addressing() {
        // 8x2: second row of plane 1 sets pixel (0, 1) to index 2
        let buf = [
            0x00, 0x00, // plane 0
            0x00, 0x80, // plane 1
            0x00, 0x00, // plane 2
            0x00, 0x00, // plane 3
        ];
        let planar = PlanarImage::from_buffer(&buf, 8, 2).unwrap();
        assert_eq!(planar.color_index(0, 0), 0);
        assert_eq!(planar.color_index(0, 1), 2);
    }
}
