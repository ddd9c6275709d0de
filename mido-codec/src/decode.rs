//! Decompression orchestration.
//!
//! The emit loop is flag-driven: one bit per token decides between
//! pulling a literal from the rANS stream and replaying a match record
//! against the bytes already emitted. It terminates when the output
//! reaches the size the header declares, never on flag exhaustion (the
//! bit reader zero-fills past its end, but those bits are never reached
//! on a well-formed frame).

use crate::frame::FrameHeader;
use crate::model::SymbolStats;
use crate::rans::RansDecoder;
use mido_core::bitstream::BitReader;
use mido_core::error::{MidoError, Result};

/// Bytes per match record: u16 distance + u8 length.
const MATCH_RECORD_SIZE: usize = 3;

/// Decompress a MIDO frame back into the original bytes.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let header = FrameHeader::parse(data)?;
    let regions = header.split_regions(data)?;

    let stats = SymbolStats::from_model_bytes(regions.model)?;
    let mut rans = RansDecoder::new(regions.rans, stats);
    let mut flags = BitReader::new(regions.flags);

    let original_size = header.original_size as usize;
    let mut output: Vec<u8> = Vec::with_capacity(original_size);
    let mut match_pos = 0usize;

    while output.len() < original_size {
        if !flags.read_bit() {
            output.push(rans.decode());
            continue;
        }

        if match_pos + MATCH_RECORD_SIZE > regions.matches.len() {
            return Err(MidoError::match_underflow(
                MATCH_RECORD_SIZE,
                regions.matches.len() - match_pos,
            ));
        }
        let distance =
            u16::from_le_bytes([regions.matches[match_pos], regions.matches[match_pos + 1]])
                as usize;
        let length = regions.matches[match_pos + 2] as usize;
        match_pos += MATCH_RECORD_SIZE;

        if distance == 0 || distance > output.len() {
            return Err(MidoError::invalid_distance(distance, output.len()));
        }

        // Byte-at-a-time forward copy: if a (hand-crafted) record overlaps
        // its own destination, the emitted prefix replicates, exactly as
        // LZ77 decoders conventionally behave.
        let start = output.len() - distance;
        for i in 0..length {
            let byte = output[start + i];
            output.push(byte);
        }
    }

    // A malformed final record can overshoot the declared size; the
    // contract is exactly `original_size` bytes.
    output.truncate(original_size);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;
    use crate::frame;

    #[test]
    fn test_roundtrip_text() {
        let data = b"decode me, decode me, decode me again";
        let packed = compress(data).unwrap();
        assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn test_empty_artifact_is_error() {
        // An empty input compresses to an empty artifact, which is not a
        // parseable frame; only the compress side of S1 must succeed.
        let err = decompress(&[]).unwrap_err();
        assert!(matches!(err, MidoError::TruncatedFrame { .. }));
    }

    #[test]
    fn test_match_underflow_detected() {
        // One flag bit claims a match but the match region is empty.
        let model = crate::SymbolStats::from_histogram(b"x").to_bytes();
        let bad = frame::pack(5, &[], &[0b1000_0000], &[], &model);
        let err = decompress(&bad).unwrap_err();
        assert!(matches!(err, MidoError::MatchUnderflow { .. }));
    }

    #[test]
    fn test_invalid_distance_detected() {
        // First token is a match reaching behind the start of the output.
        let model = crate::SymbolStats::from_histogram(b"x").to_bytes();
        let record = [7u8, 0, 3]; // distance 7, length 3, but no history
        let bad = frame::pack(5, &[], &[0b1000_0000], &record, &model);
        let err = decompress(&bad).unwrap_err();
        assert!(matches!(
            err,
            MidoError::InvalidDistance {
                distance: 7,
                history_size: 0
            }
        ));
    }

    #[test]
    fn test_zero_distance_rejected() {
        let model = crate::SymbolStats::from_histogram(b"x").to_bytes();
        // One literal to build history, then a zero-distance match.
        let mut enc =
            crate::RansEncoder::new(crate::SymbolStats::from_model_bytes(&model).unwrap());
        enc.encode(b'x');
        let rans = enc.finish();
        let record = [0u8, 0, 3];
        let bad = frame::pack(4, &rans, &[0b0100_0000], &record, &model);
        let err = decompress(&bad).unwrap_err();
        assert!(matches!(err, MidoError::InvalidDistance { distance: 0, .. }));
    }

    #[test]
    fn test_overlapping_record_replicates_prefix() {
        // The encoder never emits dist < len, but a decoder must replay
        // such a record by replicating the emitted prefix.
        let model = crate::SymbolStats::from_histogram(b"a").to_bytes();
        let mut enc = crate::RansEncoder::new(
            crate::SymbolStats::from_model_bytes(&model).unwrap(),
        );
        enc.encode(b'a');
        let rans = enc.finish();
        // Flags: literal, then match. Record: distance 1, length 4.
        let packed = frame::pack(5, &rans, &[0b0100_0000], &[1, 0, 4], &model);
        assert_eq!(decompress(&packed).unwrap(), b"aaaaa");
    }
}
