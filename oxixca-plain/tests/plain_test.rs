//! Plain LZ77 integration tests.

use oxixca_plain::format::{MAX_MATCH, WINDOW_SIZE};
use oxixca_plain::{
    LengthTier, Match, StreamStats, Token, XcaError, compress, compress_bound, compress_into,
    decompress, decompress_into, tokens,
};

fn roundtrip(original: &[u8]) -> Vec<u8> {
    let compressed = compress(original).expect("compression failed");
    assert!(compressed.len() <= compress_bound(original.len()));
    let decompressed = decompress(&compressed, original.len()).expect("decompression failed");
    assert_eq!(decompressed, original, "Data must match exactly");
    compressed
}

fn all_tokens(stream: &[u8]) -> Vec<Token> {
    tokens(stream)
        .collect::<Result<_, _>>()
        .expect("stream must parse")
}

/// Filler below 0xFB that only repeats with a period of 251 bytes.
fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 % 251) as u8).collect()
}

/// Simple LCG for reproducible pseudo-random data.
fn pseudo_random(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (seed >> 33) as u8
        })
        .collect()
}

#[test]
fn test_roundtrip_text() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
    let compressed = roundtrip(&original);

    println!("Original size: {} bytes", original.len());
    println!("Compressed size: {} bytes", compressed.len());
    assert!(compressed.len() < original.len() / 10);
}

#[test]
fn test_roundtrip_all_byte_values() {
    let original: Vec<u8> = (0..=255u8).collect();
    let compressed = roundtrip(&original);
    // No byte repeats, so the stream is all literals: the worst case.
    assert_eq!(compressed.len(), compress_bound(original.len()));
    assert!(all_tokens(&compressed)
        .iter()
        .all(|t| matches!(t, Token::Literal(_))));
}

#[test]
fn test_roundtrip_pseudo_random() {
    for (len, seed) in [(1, 1), (31, 2), (32, 3), (33, 4), (4096, 5), (20_000, 6)] {
        let original = pseudo_random(len, seed);
        roundtrip(&original);
    }
}

#[test]
fn test_roundtrip_single_byte() {
    let compressed = roundtrip(b"x");
    assert_eq!(compressed, [0xff, 0xff, 0xff, 0x7f, b'x']);
}

#[test]
fn test_empty_input() {
    let mut out = [0u8; 8];
    assert_eq!(compress_into(b"", &mut out).unwrap(), 0);
    assert_eq!(decompress_into(b"", &mut out).unwrap(), 0);
    assert_eq!(compress_bound(0), 0);
}

#[test]
fn test_repeated_byte_lengths() {
    // One literal followed by a match of `len - 1` bytes, covering each tier.
    let cases: [(usize, &[u8]); 10] = [
        (3, &[0xff, 0xff, 0xff, 0x1f, 0x61, 0x61, 0x61]),
        (9, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x05, 0x00]),
        (10, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x06, 0x00]),
        (11, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x00]),
        (25, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0e]),
        (26, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0f, 0x00]),
        (269, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0f, 0xf3]),
        (270, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0f, 0xf4]),
        (280, &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0f, 0xfe]),
        (
            281,
            &[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0x0f, 0xff, 0x15, 0x01],
        ),
    ];

    for (len, expected) in cases {
        let original = vec![b'a'; len];
        let compressed = roundtrip(&original);
        assert_eq!(compressed, expected, "length {len}");
    }
}

#[test]
fn test_tier_of_each_boundary() {
    for (len, tier) in [
        (4, LengthTier::Base),
        (10, LengthTier::Base),
        (11, LengthTier::Nibble),
        (25, LengthTier::Nibble),
        (26, LengthTier::Byte),
        (280, LengthTier::Byte),
        (281, LengthTier::Word),
    ] {
        let compressed = roundtrip(&vec![b'a'; len]);
        let stats = StreamStats::collect(&compressed).unwrap();
        assert_eq!(stats.matches, 1, "length {len}");
        assert_eq!(stats.tier_count(tier), 1, "length {len}");
    }
}

#[test]
fn test_long_run_splits_at_max_match() {
    let compressed = roundtrip(&vec![b'a'; 100_000]);
    assert_eq!(
        compressed,
        [
            0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00, 0xff, 0xff, 0xff, 0xff, 0x07, 0x00, 0xff,
            0x9a, 0x86
        ]
    );

    let parsed = all_tokens(&compressed);
    assert_eq!(
        parsed,
        [
            Token::Literal(b'a'),
            Token::Match(Match {
                offset: 1,
                length: MAX_MATCH
            }),
            Token::Match(Match {
                offset: 1,
                length: 100_000 - 1 - MAX_MATCH
            }),
        ]
    );
}

#[test]
fn test_one_million_zeros() {
    let original = vec![0u8; 1_000_000];
    let compressed = roundtrip(&original);
    assert_eq!(compressed.len(), 93);

    let stats = StreamStats::collect(&compressed).unwrap();
    assert_eq!(stats.decoded_len, 1_000_000);
    assert_eq!(stats.literals, 1);
    assert_eq!(stats.matches, 16);
    assert_eq!(stats.longest_match, MAX_MATCH);
    assert_eq!(stats.largest_offset, 1);
}

#[test]
fn test_window_boundary() {
    let marker = [0xFE, 0xFD, 0xFC];

    // Marker repeated exactly WINDOW_SIZE bytes later: reachable.
    let mut original = filler(WINDOW_SIZE);
    original[..3].copy_from_slice(&marker);
    original.extend_from_slice(&marker);
    let compressed = roundtrip(&original);
    let parsed = all_tokens(&compressed);
    assert_eq!(
        parsed.last(),
        Some(&Token::Match(Match {
            offset: WINDOW_SIZE,
            length: 3
        }))
    );
    assert_eq!(
        StreamStats::collect(&compressed).unwrap().largest_offset,
        WINDOW_SIZE
    );

    // One byte further: out of reach, so the marker is stored as literals.
    let mut original = filler(WINDOW_SIZE + 1);
    original[..3].copy_from_slice(&marker);
    original.extend_from_slice(&marker);
    let compressed = roundtrip(&original);
    let parsed = all_tokens(&compressed);
    assert_eq!(
        &parsed[parsed.len() - 3..],
        [
            Token::Literal(0xFE),
            Token::Literal(0xFD),
            Token::Literal(0xFC)
        ]
    );
}

#[test]
fn test_indicator_padding_counts() {
    // Token counts around multiples of 32.
    for len in [31, 32, 33, 63, 64, 65] {
        let original: Vec<u8> = (0..len as u8).collect();
        let compressed = roundtrip(&original);
        let stats = StreamStats::collect(&compressed).unwrap();
        assert_eq!(stats.literals, len);
        assert_eq!(stats.indicator_words, len / 32 + 1);
        if len % 32 == 0 {
            assert_eq!(&compressed[compressed.len() - 4..], [0xff; 4]);
        }
    }
}

#[test]
fn test_incompressible_fuzz_vector() {
    let original = [
        0x00, 0x02, 0x02, 0x02, 0x6a, 0xbf, 0x10, 0xa7, 0x4f, 0xef, 0xce, 0x58, 0x53, 0x60, 0xdd,
        0x87, 0xb7, 0x78, 0xbd, 0x4b, 0x5d, 0x95, 0x0c, 0x8b, 0x78, 0x75, 0x74, 0xf4, 0xb1, 0xe9,
        0x50, 0x1c,
    ];
    let mut expected = vec![0x00, 0x00, 0x00, 0x00];
    expected.extend_from_slice(&original);
    expected.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);

    let compressed = roundtrip(&original);
    assert_eq!(compressed, expected);
    assert_eq!(compressed.len(), compress_bound(original.len()));
}

#[test]
fn test_compress_bound_is_sufficient() {
    for len in [1, 2, 31, 32, 33, 100, 1000] {
        let original = pseudo_random(len, len as u64);
        let mut out = vec![0u8; compress_bound(len)];
        compress_into(&original, &mut out).expect("bound must suffice");
    }
}

#[test]
fn test_compress_capacity_one() {
    let mut out = [0xAAu8; 1];
    let err = compress_into(b"hello", &mut out).unwrap_err();
    assert!(matches!(err, XcaError::OutputExhausted { .. }));
    assert_eq!(out, [0xAA]);
}

#[test]
fn test_exact_fit_and_one_less() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(5);
    let compressed = compress(&original).unwrap();

    let mut out = vec![0u8; compressed.len()];
    assert_eq!(
        compress_into(&original, &mut out).unwrap(),
        compressed.len()
    );
    assert_eq!(out, compressed);

    let mut out = vec![0u8; compressed.len() - 1];
    assert!(
        compress_into(&original, &mut out)
            .unwrap_err()
            .is_capacity_error()
    );
}

#[test]
fn test_decompress_capacity_too_small() {
    let original = vec![b'z'; 500];
    let compressed = compress(&original).unwrap();
    let err = decompress(&compressed, 499).unwrap_err();
    assert!(err.is_capacity_error());
}

#[test]
fn test_malformed_streams() {
    // Match at the very start: nothing to copy from.
    let err = decompress(&[0xff, 0xff, 0xff, 0xff, 0x10, 0x00], 64).unwrap_err();
    assert!(matches!(err, XcaError::InvalidBackReference { .. }));
    assert!(err.is_malformed());

    // Truncated indicator word.
    let err = decompress(&[0x00, 0x00, 0x00], 64).unwrap_err();
    assert!(matches!(err, XcaError::InputExhausted { .. }));

    // Missing shared nibble byte.
    let err = decompress(&[0xff, 0xff, 0xff, 0x7f, 0x61, 0x07, 0x00], 64).unwrap_err();
    assert!(matches!(err, XcaError::InputExhausted { .. }));
}

#[test]
fn test_corrupted_streams_never_panic() {
    let original = b"this is a test. and this is a test too".repeat(8);
    let compressed = compress(&original).unwrap();

    for i in 0..compressed.len() {
        for flip in [0x01, 0x10, 0x80, 0xff] {
            let mut damaged = compressed.clone();
            damaged[i] ^= flip;
            let _ = decompress(&damaged, original.len());
            let _ = StreamStats::collect(&damaged);
        }
    }

    for cut in 0..compressed.len() {
        let _ = decompress(&compressed[..cut], original.len());
    }
}
