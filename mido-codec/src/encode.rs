//! Compression orchestration.
//!
//! The encoder sees the whole input: the model is a single histogram over
//! all of it, built before any entropy coding happens. The LZ77 parse
//! then splits the input into three streams (flag bits, match records,
//! literal bytes), the literals are rANS-coded, and the frame multiplexes
//! the lot.

use crate::lz77::{self, Token};
use crate::model::SymbolStats;
use crate::rans::RansEncoder;
use crate::{frame, MAX_MATCH, MIN_MATCH};
use mido_core::bitstream::BitWriter;
use mido_core::error::Result;

/// Token tally from the LZ77 parse, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of literal tokens emitted.
    pub literal_count: usize,
    /// Number of match tokens emitted.
    pub match_count: usize,
}

/// Compress `data` into a self-contained MIDO frame.
///
/// Empty input produces an empty artifact: there is nothing to model, so
/// not even a header is written.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_summary(data).map(|(bytes, _)| bytes)
}

/// Compress `data` and report the LZ77 token tally alongside the frame.
pub fn compress_with_summary(data: &[u8]) -> Result<(Vec<u8>, ParseSummary)> {
    if data.is_empty() {
        return Ok((Vec::new(), ParseSummary::default()));
    }

    let stats = SymbolStats::from_histogram(data);
    let tokens = lz77::parse(data);

    let mut flags = BitWriter::new();
    let mut match_records = Vec::new();
    let mut literals = Vec::new();

    for token in &tokens {
        match *token {
            Token::Literal(byte) => {
                flags.write_bit(false);
                literals.push(byte);
            }
            Token::Match { distance, length } => {
                debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&(length as usize)));
                flags.write_bit(true);
                match_records.extend_from_slice(&distance.to_le_bytes());
                match_records.push(length);
            }
        }
    }
    flags.flush();

    let summary = ParseSummary {
        literal_count: literals.len(),
        match_count: match_records.len() / 3,
    };

    // rANS is LIFO: encode the literals back to front so the decoder
    // recovers them in input order.
    let model = stats.to_bytes();
    let mut rans = RansEncoder::new(stats);
    for &byte in literals.iter().rev() {
        rans.encode(byte);
    }
    let rans_bytes = rans.finish();

    let packed = frame::pack(
        data.len() as u32,
        &rans_bytes,
        flags.as_bytes(),
        &match_records,
        &model,
    );

    Ok((packed, summary))
}
