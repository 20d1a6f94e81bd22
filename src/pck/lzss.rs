//! LZSS decompression for PCK payloads
//!
//! The scheme is a byte-oriented LZSS variant with no end-of-stream marker.
//! Each control byte either introduces a literal run (high bit clear, run
//! length `ctrl + 1`) or a three-byte backreference (high bit set). A
//! backreference's offset is the 16-bit value `(ctrl << 8) | next` minus
//! 0x10000 - always negative, addressed relative to the current output
//! length - and its copy length is the third byte plus one.
//!
//! Backreference copies run one byte at a time from the output buffer
//! itself. The source window may overlap the bytes being written, which the
//! format exploits for run-length expansion: each copied byte is
//! immediately readable as the source of the next. Replacing the per-byte
//! loop with a bulk range copy would read stale bytes and corrupt exactly
//! those streams.

use crate::common::{AssetError, PckHeader, Result};

/// High bit of a control byte selects backreference over literal run
const BACKREF_FLAG: u8 = 0x80;

/// Bias subtracted from the 16-bit offset field to make it negative
const OFFSET_BIAS: i64 = 0x10000;

/// Expand a compressed PCK payload into its raw planar buffer
///
/// `header` supplies the expected decompressed size, used only as a
/// capacity hint; the stream itself decides when decoding ends. Fails with
/// [`AssetError::TruncatedStream`] when a control byte declares more
/// literal or reference bytes than remain in the input, and with
/// [`AssetError::InvalidBackreference`] when a copy source falls outside
/// the output produced so far. Both are unrecoverable: a corrupt byte
/// invalidates everything after it.
pub fn decompress(header: &PckHeader, data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(header.decoded_len());
    let mut pos = 0;

    while pos < data.len() {
        let ctrl_at = pos;
        let ctrl = data[pos];
        pos += 1;

        if ctrl & BACKREF_FLAG == 0 {
            // Literal run
            let run = ctrl as usize + 1;
            if pos + run > data.len() {
                return Err(AssetError::TruncatedStream {
                    offset: pos,
                    needed: run,
                    available: data.len() - pos,
                });
            }
            out.extend_from_slice(&data[pos..pos + run]);
            pos += run;
        } else {
            // Backreference: one more offset byte and one length byte.
            // The original decoder exits its loop silently when these are
            // missing; treat that as corruption instead.
            if pos + 2 > data.len() {
                return Err(AssetError::TruncatedStream {
                    offset: pos,
                    needed: 2,
                    available: data.len() - pos,
                });
            }
            let offset = (((ctrl as i64) << 8) | data[pos] as i64) - OFFSET_BIAS;
            let len = data[pos + 1] as usize + 1;
            pos += 2;

            let start = out.len() as i64 + offset;
            for step in 0..len as i64 {
                let src = start + step;
                if src < 0 || src >= out.len() as i64 {
                    return Err(AssetError::InvalidBackreference {
                        offset: ctrl_at,
                        position: src,
                        produced: out.len(),
                    });
                }
                // Byte-at-a-time so the copy can see its own output when
                // the source window overlaps the destination.
                let byte = out[src as usize];
                out.push(byte);
            }
        }
    }

    Ok(out)
}
