//! # MIDO Codec
//!
//! Pure Rust implementation of the MIDO lossless compression format.
//!
//! MIDO combines a sliding-window LZ77 parse with a static-model rANS
//! entropy coder. The parse splits the input into literal bytes and
//! back-references; literals are entropy-coded against a frequency model
//! built from the whole input, and everything is multiplexed into a
//! self-contained frame.
//!
//! ## Pipeline
//!
//! ```text
//! input ──┬─> histogram ──> SymbolStats ──────────────┐
//!         └─> LZ77 parse ──┬─> flag bits              │
//!                          ├─> match records          ├─> frame
//!                          └─> literals ──> rANS ─────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mido_codec::{compress, decompress};
//!
//! let data = b"middle-out, middle-out, middle-out";
//! let packed = compress(data).unwrap();
//! let restored = decompress(&packed).unwrap();
//! assert_eq!(restored, data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
mod frame;
mod lz77;
mod model;
mod rans;

pub use decode::decompress;
pub use encode::{compress, compress_with_summary, ParseSummary};
pub use frame::{FrameHeader, FrameRegions, FRAME_HEADER_SIZE};
pub use lz77::Token;
pub use model::SymbolStats;
pub use rans::{RansDecoder, RansEncoder};

/// Frame magic number; `"ODIM"` in little-endian byte order on disk.
pub const MIDO_MAGIC: u32 = 0x4D49444F;

/// Sliding window size for LZ77 match finding.
pub const WINDOW_SIZE: usize = 32768;

/// Minimum back-reference length worth emitting.
pub const MIN_MATCH: usize = 3;

/// Maximum back-reference length; lengths are stored in a single byte.
pub const MAX_MATCH: usize = 255;

/// Probability precision of the rANS model, in bits.
pub const PROB_BITS: u32 = 12;

/// Fixed sum of all symbol frequencies (`1 << PROB_BITS`).
pub const PROB_SCALE: u32 = 1 << PROB_BITS;

/// Lower bound of the rANS state during renormalization.
pub const RANS_L: u32 = 1 << 16;

/// Size of the serialized frequency model: 256 symbols × u16.
pub const MODEL_SIZE: usize = 512;
