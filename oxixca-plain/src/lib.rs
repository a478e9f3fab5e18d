//! # OxiXCA-Plain: MS-XCA Plain LZ77 in Pure Rust
//!
//! This crate implements the "Plain LZ77" codec of the MS-XCA family
//! ([MS-XCA] 2.3 and 2.4): LZ77 back-references without any Huffman stage,
//! used by protocols that want cheap compression of single buffers.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Byte-exact**: Greedy match search producing the same streams as other
//!   conformant encoders
//! - **Bounded**: Every read and write is checked; malformed input yields an
//!   error, never a panic
//! - **No allocation** in [`compress_into`] and [`decompress_into`]
//!
//! ## Format
//!
//! - **Indicator words**: one `u32` per 32 tokens, MSB first, `1` = match
//! - **Literals**: stored as raw bytes
//! - **Matches**: 13-bit offset (window of 8192 bytes) and a length of
//!   3 bytes or more, widened through a shared nibble, an extra byte and
//!   16/32-bit escapes
//! - **No framing**: the caller must know the decompressed size
//!
//! ## Example
//!
//! ```rust
//! use oxixca_plain::{compress, decompress};
//!
//! let original = b"abc".repeat(100);
//!
//! let compressed = compress(&original).unwrap();
//! assert_eq!(compressed.len(), 13);
//!
//! let decompressed = decompress(&compressed, original.len()).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cursor;
mod decoder;
mod encoder;
pub mod format;
mod matcher;
mod stats;

pub use decoder::{TokenReader, decompress_into};
pub use encoder::compress_into;
pub use format::{LengthTier, Match, Token, compress_bound};
pub use oxixca_core::{Result, XcaError};
pub use stats::StreamStats;

use oxixca_core::traits::{BlockCompressor, BlockDecompressor};

/// Compress `data` into a newly allocated buffer.
///
/// # Example
///
/// ```rust
/// use oxixca_plain::compress;
///
/// assert!(compress(b"").unwrap().is_empty());
/// assert_eq!(compress(b"aaa").unwrap(), [0xff, 0xff, 0xff, 0x1f, b'a', b'a', b'a']);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    PlainLz77.compress_to_vec(data)
}

/// Decompress `data` into a newly allocated buffer of at most `max_output`
/// bytes.
///
/// The stream carries no length, so `max_output` bounds the result. Decoding
/// stops when the buffer is full, which also makes it possible to decode a
/// prefix of a stream.
pub fn decompress(data: &[u8], max_output: usize) -> Result<Vec<u8>> {
    PlainLz77.decompress_to_vec(data, max_output)
}

/// Iterate over the tokens of a compressed stream.
pub fn tokens(data: &[u8]) -> TokenReader<'_> {
    TokenReader::new(data)
}

/// The Plain LZ77 codec as a [`BlockCompressor`] and [`BlockDecompressor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainLz77;

impl BlockCompressor for PlainLz77 {
    fn compress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        compress_into(input, output)
    }

    fn compress_bound(&self, input_len: usize) -> usize {
        compress_bound(input_len)
    }
}

impl BlockDecompressor for PlainLz77 {
    fn decompress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        decompress_into(input, output)
    }
}
