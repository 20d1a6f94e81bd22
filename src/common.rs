//! Common types and constants for the Warlords asset decoders
//!
//! This module defines the core types, constants, and error taxonomy shared
//! by the PCK bitmap path and the MAP tile-grid path.

use thiserror::Error;

/// Size of the PCK file header in bytes (tag, width, height; all u16 LE)
pub const PCK_HEADER_SIZE: usize = 6;

/// Number of bit-planes in a decompressed PCK payload
pub const PLANE_COUNT: usize = 4;

/// Number of entries in a Warlords palette
pub const PALETTE_SIZE: usize = 16;

/// Number of pixels packed into one plane byte
pub const PIXELS_PER_BYTE: usize = 8;

/// Error type for asset decoding operations
#[derive(Debug, Error)]
pub enum AssetError {
    /// Input ended before a declared run or header field completed
    #[error("truncated stream at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedStream {
        /// Byte offset into the input where the shortfall was detected
        offset: usize,
        /// Number of bytes the current field or run still required
        needed: usize,
        /// Number of bytes actually remaining
        available: usize,
    },

    /// Backreference copy source fell outside the produced output
    #[error(
        "invalid backreference at offset {offset}: source position {position} \
         outside produced output of {produced} bytes"
    )]
    InvalidBackreference {
        /// Byte offset of the control byte that started the backreference
        offset: usize,
        /// Computed copy source position (may be negative)
        position: i64,
        /// Output length at the time the copy was attempted
        produced: usize,
    },

    /// Decompressed buffer does not split into four planes of the expected size
    #[error("malformed planar image: decompressed payload is {actual} bytes, expected {expected}")]
    MalformedPlanarImage {
        /// Total payload size implied by the header dimensions (four planes)
        expected: usize,
        /// Payload size actually present
        actual: usize,
    },

    /// Palette name not recognized
    #[error("unknown palette: {0:?} (expected \"main\" or \"game\")")]
    UnknownPalette(String),

    /// Tile map byte count does not match the supplied grid dimensions
    #[error("malformed tile map: expected {expected} bytes for the grid, got {actual}")]
    MalformedTileMap {
        /// Byte count implied by the grid dimensions
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// I/O error from the file-loading helpers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for asset decoding operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Parsed PCK file header
///
/// Six little-endian bytes: a reserved format tag, then width and height in
/// pixels. The tag is preserved for inspection but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PckHeader {
    /// Reserved format tag (bytes 0-1), ignored by the decoder
    pub tag: u16,
    /// Image width in pixels (bytes 2-3)
    pub width: u16,
    /// Image height in pixels (bytes 4-5)
    pub height: u16,
}

impl PckHeader {
    /// Split a raw PCK file into its header and compressed payload
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8])> {
        if data.len() < PCK_HEADER_SIZE {
            return Err(AssetError::TruncatedStream {
                offset: 0,
                needed: PCK_HEADER_SIZE,
                available: data.len(),
            });
        }
        let header = Self {
            tag: u16::from_le_bytes([data[0], data[1]]),
            width: u16::from_le_bytes([data[2], data[3]]),
            height: u16::from_le_bytes([data[4], data[5]]),
        };
        Ok((header, &data[PCK_HEADER_SIZE..]))
    }

    /// Width of one plane row in whole bytes (8 pixels per byte, rounded up)
    pub fn width_bytes(&self) -> usize {
        (self.width as usize).div_ceil(PIXELS_PER_BYTE)
    }

    /// Length of a single bit-plane in bytes
    pub fn plane_len(&self) -> usize {
        self.width_bytes() * self.height as usize
    }

    /// Expected size of the fully decompressed planar payload
    pub fn decoded_len(&self) -> usize {
        self.plane_len() * PLANE_COUNT
    }
}
