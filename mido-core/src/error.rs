//! Error types for MIDO operations.
//!
//! One enum covers the whole pipeline: I/O failures at the file boundary,
//! container validation, and the malformed-stream conditions the decoder
//! can hit. The codec never prints; callers decide how to surface these.

use std::io;
use thiserror::Error;

/// The main error type for MIDO operations.
#[derive(Debug, Error)]
pub enum MidoError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in the container header.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Actual magic value found.
        found: u32,
    },

    /// Container shorter than its header claims.
    #[error("Truncated frame: need {needed} bytes, have {available}")]
    TruncatedFrame {
        /// Number of bytes required.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// Match record stream exhausted before the output was complete.
    #[error("Match stream underflow: need {needed} more bytes, have {available}")]
    MatchUnderflow {
        /// Number of record bytes required.
        needed: usize,
        /// Number of record bytes remaining.
        available: usize,
    },

    /// Invalid back-reference distance in a match record.
    #[error("Invalid back-reference distance: {distance} with {history_size} bytes of history")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Bytes of output emitted so far.
        history_size: usize,
    },

    /// Serialized frequency model does not sum to the probability scale.
    #[error("Invalid symbol model: frequencies sum to {total}, expected {expected}")]
    InvalidModel {
        /// Sum of the deserialized frequencies.
        total: u32,
        /// The required probability scale.
        expected: u32,
    },
}

/// Result type alias for MIDO operations.
pub type Result<T> = std::result::Result<T, MidoError>;

impl MidoError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create a truncated frame error.
    pub fn truncated_frame(needed: usize, available: usize) -> Self {
        Self::TruncatedFrame { needed, available }
    }

    /// Create a match underflow error.
    pub fn match_underflow(needed: usize, available: usize) -> Self {
        Self::MatchUnderflow { needed, available }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create an invalid model error.
    pub fn invalid_model(total: u32, expected: u32) -> Self {
        Self::InvalidModel { total, expected }
    }
}
