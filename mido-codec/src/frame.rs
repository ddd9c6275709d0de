//! MIDO frame (container) format.
//!
//! A frame is a fixed 24-byte header followed by four payload regions in
//! declared order. All multi-byte fields are little-endian:
//!
//! ```text
//! offset  size  field
//! 0       4     magic = 0x4D49444F ("ODIM" on disk)
//! 4       4     original_size
//! 8       4     rans_size
//! 12      4     flags_size
//! 16      4     match_size
//! 20      4     model_size (always 512)
//! 24      ...   rans payload, flag payload, match payload, model payload
//! ```
//!
//! The regions are independent byte arrays with no interleaving; the
//! decoder hands each one to its own component.

use crate::MIDO_MAGIC;
use mido_core::error::{MidoError, Result};

/// Size of the fixed frame header in bytes.
pub const FRAME_HEADER_SIZE: usize = 24;

/// Parsed frame header: the five size fields behind the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Uncompressed input size in bytes.
    pub original_size: u32,
    /// Size of the rANS-coded literal region.
    pub rans_size: u32,
    /// Size of the packed flag-bit region.
    pub flags_size: u32,
    /// Size of the match record region (3 bytes per match).
    pub match_size: u32,
    /// Size of the serialized model region.
    pub model_size: u32,
}

/// The four payload regions of a frame, borrowed from the input buffer.
#[derive(Debug)]
pub struct FrameRegions<'a> {
    /// rANS-coded literal bytes.
    pub rans: &'a [u8],
    /// Packed literal/match flag bits.
    pub flags: &'a [u8],
    /// Match records: u16 LE distance, u8 length, per match.
    pub matches: &'a [u8],
    /// Serialized frequency model.
    pub model: &'a [u8],
}

impl FrameHeader {
    /// Parse and validate the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FRAME_HEADER_SIZE {
            return Err(MidoError::truncated_frame(FRAME_HEADER_SIZE, data.len()));
        }

        let magic = read_u32_le(data, 0);
        if magic != MIDO_MAGIC {
            return Err(MidoError::invalid_magic(MIDO_MAGIC, magic));
        }

        Ok(Self {
            original_size: read_u32_le(data, 4),
            rans_size: read_u32_le(data, 8),
            flags_size: read_u32_le(data, 12),
            match_size: read_u32_le(data, 16),
            model_size: read_u32_le(data, 20),
        })
    }

    /// Total payload size the header declares.
    pub fn payload_size(&self) -> usize {
        self.rans_size as usize
            + self.flags_size as usize
            + self.match_size as usize
            + self.model_size as usize
    }

    /// Slice the payload behind the header into its four regions.
    pub fn split_regions<'a>(&self, data: &'a [u8]) -> Result<FrameRegions<'a>> {
        let needed = FRAME_HEADER_SIZE + self.payload_size();
        if data.len() < needed {
            return Err(MidoError::truncated_frame(needed, data.len()));
        }

        let mut offset = FRAME_HEADER_SIZE;
        let mut take = |size: u32| {
            let region = &data[offset..offset + size as usize];
            offset += size as usize;
            region
        };

        Ok(FrameRegions {
            rans: take(self.rans_size),
            flags: take(self.flags_size),
            matches: take(self.match_size),
            model: take(self.model_size),
        })
    }
}

/// Assemble a complete frame from its four payload regions.
pub fn pack(
    original_size: u32,
    rans: &[u8],
    flags: &[u8],
    matches: &[u8],
    model: &[u8],
) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(FRAME_HEADER_SIZE + rans.len() + flags.len() + matches.len() + model.len());

    out.extend_from_slice(&MIDO_MAGIC.to_le_bytes());
    out.extend_from_slice(&original_size.to_le_bytes());
    out.extend_from_slice(&(rans.len() as u32).to_le_bytes());
    out.extend_from_slice(&(flags.len() as u32).to_le_bytes());
    out.extend_from_slice(&(matches.len() as u32).to_le_bytes());
    out.extend_from_slice(&(model.len() as u32).to_le_bytes());

    out.extend_from_slice(rans);
    out.extend_from_slice(flags);
    out.extend_from_slice(matches);
    out.extend_from_slice(model);

    out
}

#[inline]
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
