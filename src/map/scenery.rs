//! Scenery atlas and map compositing
//!
//! Tile IDs are rendered by looking them up in a caller-supplied mapping
//! into a pre-cut sheet of square scenery tiles. The ID-to-tile table is
//! not part of the file format - it was recovered by eye and is known to
//! be incomplete - so the crate ships the mechanism only: unmapped IDs are
//! logged and painted with a deterministic placeholder color instead of
//! failing the whole render.

use crate::map::TileMap;
use crate::raster::RasterImage;
use log::warn;
use std::collections::HashMap;

/// Column count of the original scenery sheet, used by the castle block
/// layout
const SHEET_COLUMNS: usize = 16;

/// A scenery sheet pre-cut into fixed-size square tiles, row-major
#[derive(Debug, Clone)]
pub struct SceneryAtlas {
    tiles: Vec<RasterImage>,
    tile_size: usize,
}

impl SceneryAtlas {
    /// Slice a tile sheet into `tile_size` x `tile_size` cells
    ///
    /// Partial cells at the right and bottom edges are discarded, matching
    /// how the sheet was authored.
    pub fn from_raster(sheet: &RasterImage, tile_size: usize) -> Self {
        let per_row = sheet.width() / tile_size;
        let per_col = sheet.height() / tile_size;
        let mut tiles = Vec::with_capacity(per_row * per_col);
        for ty in 0..per_col {
            for tx in 0..per_row {
                let mut tile = RasterImage::new(tile_size, tile_size, [0, 0, 0, 0]);
                for y in 0..tile_size {
                    for x in 0..tile_size {
                        tile.put_pixel(x, y, sheet.pixel(tx * tile_size + x, ty * tile_size + y));
                    }
                }
                tiles.push(tile);
            }
        }
        Self { tiles, tile_size }
    }

    /// Edge length of each tile in pixels
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of tiles cut from the sheet
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the sheet yielded no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile at a given atlas index, if it exists
    pub fn tile(&self, index: usize) -> Option<&RasterImage> {
        self.tiles.get(index)
    }
}

/// Caller-built table from tile IDs to atlas cell indices
#[derive(Debug, Clone, Default)]
pub struct TileMapping {
    entries: HashMap<u8, usize>,
}

impl TileMapping {
    /// An empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a single tile ID to an atlas cell
    pub fn insert(&mut self, tile_id: u8, cell: usize) {
        self.entries.insert(tile_id, cell);
    }

    /// Register a 2x2 castle block
    ///
    /// Castles occupy four consecutive IDs drawn from two sheet rows:
    /// `id` and `id + 1` map to `cell` and `cell + 1`, while `id + 2` and
    /// `id + 3` map to the cells directly below them on the sheet.
    pub fn insert_castle(&mut self, tile_id: u8, cell: usize) {
        self.entries.insert(tile_id, cell);
        self.entries.insert(tile_id + 1, cell + 1);
        self.entries.insert(tile_id + 2, cell + SHEET_COLUMNS);
        self.entries.insert(tile_id + 3, cell + SHEET_COLUMNS + 1);
    }

    /// Atlas cell for a tile ID, if mapped
    pub fn get(&self, tile_id: u8) -> Option<usize> {
        self.entries.get(&tile_id).copied()
    }

    /// Number of mapped tile IDs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deterministic fill color for tile IDs absent from the mapping
fn placeholder_color(tile_id: u8) -> [u8; 4] {
    let id = tile_id as usize;
    [
        (100 + (id * 11) % 156) as u8,
        (100 + (id * 7) % 156) as u8,
        (100 + (id * 3) % 156) as u8,
        255,
    ]
}

/// Paste one atlas tile per grid position onto a fresh canvas
///
/// An unmapped tile ID, or a mapped cell index past the end of the atlas,
/// is a soft condition: it is logged at warn level and the cell is filled
/// with a placeholder color derived from the ID, so incomplete mappings
/// still produce a usable canvas.
pub fn compose(map: &TileMap, atlas: &SceneryAtlas, mapping: &TileMapping) -> RasterImage {
    let size = atlas.tile_size();
    let mut canvas = RasterImage::new(map.width() * size, map.height() * size, [0, 0, 0, 255]);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let tile_id = map.tile_id(x, y);
            let tile = mapping.get(tile_id).and_then(|cell| atlas.tile(cell));
            match tile {
                Some(tile) => canvas.paste(tile, x * size, y * size),
                None => {
                    warn!("unmapped tile ID {tile_id:#04x} at ({x}, {y})");
                    canvas.fill_rect(x * size, y * size, size, size, placeholder_color(tile_id));
                }
            }
        }
    }

    canvas
}
