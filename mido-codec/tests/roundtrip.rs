//! End-to-end round-trip and format tests for the MIDO codec.

use mido_codec::{
    compress, compress_with_summary, decompress, FrameHeader, FRAME_HEADER_SIZE, MODEL_SIZE,
};

/// Deterministic pseudo-random bytes for reproducible test data.
fn lcg_bytes(len: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

#[test]
fn test_empty_input() {
    // Compressing nothing yields nothing; neither side crashes.
    let packed = compress(&[]).unwrap();
    assert!(packed.is_empty());
    assert!(decompress(&packed).is_err());
}

#[test]
fn test_single_byte() {
    let packed = compress(b"A").unwrap();
    assert_eq!(decompress(&packed).unwrap(), b"A");

    // No match is possible: one literal, one clear flag bit.
    let (_, summary) = compress_with_summary(b"A").unwrap();
    assert_eq!(summary.literal_count, 1);
    assert_eq!(summary.match_count, 0);
}

#[test]
fn test_short_non_repeating() {
    let packed = compress(b"ABC").unwrap();
    assert_eq!(decompress(&packed).unwrap(), b"ABC");

    let (_, summary) = compress_with_summary(b"ABC").unwrap();
    assert_eq!(summary.literal_count, 3);
    assert_eq!(summary.match_count, 0);
}

#[test]
fn test_exact_small_repeat() {
    let packed = compress(b"ABCABC").unwrap();
    assert_eq!(decompress(&packed).unwrap(), b"ABCABC");

    let (_, summary) = compress_with_summary(b"ABCABC").unwrap();
    assert_eq!(summary.literal_count, 3);
    assert_eq!(summary.match_count, 1);
}

#[test]
fn test_long_run_within_window() {
    let input = vec![0x58u8; 64]; // "XXXX...X"
    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);

    // Matches may not overlap their destination, so each one is capped
    // by the gap back to its source: 3 literals, then 5 doubling matches.
    let (_, summary) = compress_with_summary(&input).unwrap();
    assert_eq!(summary.literal_count, 3);
    assert_eq!(summary.match_count, 5);
}

#[test]
fn test_skewed_binary_blob() {
    // 4 KiB, ~90% zero bytes, the rest pseudo-random.
    let noise = lcg_bytes(4096, 0x1234_5678_9ABC_DEF0);
    let mut input = vec![0u8; 4096];
    for (i, b) in input.iter_mut().enumerate() {
        if noise[i] % 10 == 0 {
            *b = noise[i];
        }
    }

    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);
    assert!(
        packed.len() < input.len() + FRAME_HEADER_SIZE + MODEL_SIZE,
        "skewed blob must beat stored size: {} bytes",
        packed.len()
    );
}

#[test]
fn test_roundtrip_text() {
    let input = b"The quick brown fox jumps over the lazy dog. \
                  The quick brown fox jumps over the lazy dog. \
                  Pack my box with five dozen liquor jugs."
        .to_vec();
    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);
    assert!(packed.len() < input.len() + FRAME_HEADER_SIZE + MODEL_SIZE);
}

#[test]
fn test_roundtrip_all_byte_values() {
    let input: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn test_roundtrip_random() {
    // Incompressible data still round-trips; it just does not shrink.
    let input = lcg_bytes(8192, 42);
    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn test_roundtrip_sizes() {
    for size in [1usize, 2, 3, 4, 7, 8, 255, 256, 257, 1000, 5000] {
        let input = lcg_bytes(size, size as u64);
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input, "size {size}");
    }
}

#[test]
fn test_compress_is_deterministic() {
    let input = lcg_bytes(3000, 7);
    let a = compress(&input).unwrap();
    let b = compress(&input).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_header_consistency() {
    let input = b"header consistency: sizes must account for every byte".to_vec();
    let packed = compress(&input).unwrap();

    let header = FrameHeader::parse(&packed).unwrap();
    assert_eq!(header.original_size as usize, input.len());
    assert_eq!(header.model_size as usize, MODEL_SIZE);
    assert_eq!(packed.len(), FRAME_HEADER_SIZE + header.payload_size());
    assert_eq!(&packed[0..4], b"ODIM");
}

#[test]
fn test_corrupt_magic_rejected() {
    let mut packed = compress(b"some data worth keeping").unwrap();
    packed[1] ^= 0x40;
    assert!(decompress(&packed).is_err());
}

#[test]
fn test_truncated_artifact_rejected() {
    let packed = compress(b"some data worth keeping").unwrap();
    assert!(decompress(&packed[..packed.len() / 2]).is_err());
}

#[test]
fn test_two_compressions_are_independent() {
    // Interleaved use of two inputs must not cross-contaminate: each
    // invocation owns its state end to end.
    let left = lcg_bytes(2000, 1);
    let right = lcg_bytes(2000, 2);

    let packed_left = compress(&left).unwrap();
    let packed_right = compress(&right).unwrap();

    assert_eq!(decompress(&packed_left).unwrap(), left);
    assert_eq!(decompress(&packed_right).unwrap(), right);
    assert_eq!(packed_left, compress(&left).unwrap());
}
