//! # MIDO Core
//!
//! Core primitives for the MIDO compression format.
//!
//! This crate provides the building blocks shared by the codec and the CLI:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for the literal/match flag stream
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! MIDO is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     mido compress / decompress                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec + Container (mido-codec)                      │
//! │     LZ77 parse, rANS literals, frame multiplexing       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Primitives (this crate)                             │
//! │     BitWriter/BitReader, error taxonomy                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mido_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(0b0110, 4);
//! writer.flush();
//!
//! let bytes = writer.into_vec();
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit());
//! assert_eq!(reader.read_bits(4), 0b0110);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{BitReader, BitWriter};
pub use error::{MidoError, Result};
