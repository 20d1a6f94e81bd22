//! In-memory RGBA raster
//!
//! Both decode paths produce a [`RasterImage`]: the planar reconstructor
//! fills one pixel at a time, the map compositor pastes whole tiles. The
//! type is a plain row-major byte buffer with no file format attached;
//! encoding to PNG or similar is left to the caller.

/// Fully opaque black, the default fill for freshly allocated rasters
pub const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

/// Fully transparent pixel value
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// A width x height RGBA8 pixel buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Allocate a raster filled with a solid RGBA color
    pub fn new(width: usize, height: usize, fill: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&fill);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw RGBA bytes, row-major, 4 bytes per pixel
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * 4
    }

    /// RGBA value at (x, y)
    ///
    /// # Panics
    /// Panics if (x, y) is outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let at = self.offset(x, y);
        [
            self.pixels[at],
            self.pixels[at + 1],
            self.pixels[at + 2],
            self.pixels[at + 3],
        ]
    }

    /// Write the RGBA value at (x, y)
    ///
    /// # Panics
    /// Panics if (x, y) is outside the raster.
    pub fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let at = self.offset(x, y);
        self.pixels[at..at + 4].copy_from_slice(&rgba);
    }

    /// Fill a rectangle with a solid color, clipped to the raster bounds
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, rgba: [u8; 4]) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.put_pixel(col, row, rgba);
            }
        }
    }

    /// Blit another raster with its top-left corner at (x, y), clipped to
    /// this raster's bounds
    pub fn paste(&mut self, src: &RasterImage, x: usize, y: usize) {
        let rows = src.height.min(self.height.saturating_sub(y));
        let cols = src.width.min(self.width.saturating_sub(x));
        if rows == 0 || cols == 0 {
            return;
        }
        for row in 0..rows {
            let dst_at = self.offset(x, y + row);
            let src_at = src.offset(0, row);
            self.pixels[dst_at..dst_at + cols * 4]
                .copy_from_slice(&src.pixels[src_at..src_at + cols * 4]);
        }
    }
}
