//! MAP tile-grid decoding
//!
//! A `.MAP` file is a flat row-major array of little-endian 16-bit cells,
//! one per grid position. The low byte carries tile attributes (movement
//! cost, restrictions), the high byte the graphical tile ID. The file
//! stores no dimensions; the caller supplies them (Illuria, the campaign
//! map, is 109x156).

mod scenery;

pub use scenery::{compose, SceneryAtlas, TileMapping};

use crate::common::{AssetError, Result};

/// A fixed-size 2D grid of 16-bit tile cells
#[derive(Debug, Clone)]
pub struct TileMap {
    width: usize,
    height: usize,
    cells: Vec<u16>,
}

impl TileMap {
    /// Parse a raw tile-map file against caller-supplied grid dimensions
    ///
    /// Fails with [`AssetError::MalformedTileMap`] if the byte count does
    /// not equal `width * height * 2`.
    pub fn from_bytes(data: &[u8], width: usize, height: usize) -> Result<Self> {
        let expected = width * height * 2;
        if data.len() != expected {
            return Err(AssetError::MalformedTileMap {
                expected,
                actual: data.len(),
            });
        }
        let cells = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in tiles
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw 16-bit cell at (x, y)
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> u16 {
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Graphical tile ID at (x, y) (high byte of the cell)
    pub fn tile_id(&self, x: usize, y: usize) -> u8 {
        (self.cell(x, y) >> 8) as u8
    }

    /// Attribute byte at (x, y) (low byte of the cell)
    pub fn tile_attrs(&self, x: usize, y: usize) -> u8 {
        (self.cell(x, y) & 0x00FF) as u8
    }
}
