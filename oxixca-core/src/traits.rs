//! Core traits for one-shot block codecs.
//!
//! A block codec works on a single in-memory buffer per call: the whole input
//! is available up front and the caller supplies an output buffer whose length
//! is the declared capacity. Nothing is retained between calls.

use crate::error::Result;

/// A one-shot block compressor (encoder).
pub trait BlockCompressor {
    /// Compress `input` into `output`.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`. Bytes past that count are
    /// left untouched.
    fn compress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Worst-case compressed size for an input of `input_len` bytes.
    ///
    /// An output buffer of this size never fails with a capacity error.
    fn compress_bound(&self, input_len: usize) -> usize;

    /// Compress all data into a freshly allocated buffer (convenience method).
    fn compress_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; self.compress_bound(input.len())];
        let written = self.compress_into(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}

/// A one-shot block decompressor (decoder).
pub trait BlockDecompressor {
    /// Decompress `input` into `output`.
    ///
    /// # Returns
    ///
    /// The number of bytes produced. Decoding stops once `output` is full or
    /// `input` is exhausted.
    fn decompress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Decompress into a freshly allocated buffer of at most `max_output` bytes
    /// (convenience method).
    fn decompress_to_vec(&self, input: &[u8], max_output: usize) -> Result<Vec<u8>> {
        let mut output = vec![0u8; max_output];
        let produced = self.decompress_into(input, &mut output)?;
        output.truncate(produced);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XcaError;

    /// Stores input verbatim; enough to exercise the provided methods.
    struct Stored;

    impl BlockCompressor for Stored {
        fn compress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
            if output.len() < input.len() {
                return Err(XcaError::output_exhausted(0, input.len(), output.len()));
            }
            output[..input.len()].copy_from_slice(input);
            Ok(input.len())
        }

        fn compress_bound(&self, input_len: usize) -> usize {
            input_len + 8
        }
    }

    impl BlockDecompressor for Stored {
        fn decompress_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
            let n = input.len().min(output.len());
            output[..n].copy_from_slice(&input[..n]);
            Ok(n)
        }
    }

    #[test]
    fn test_compress_to_vec_truncates() {
        let compressed = Stored.compress_to_vec(b"hello").unwrap();
        assert_eq!(compressed, b"hello");
    }

    #[test]
    fn test_decompress_to_vec_respects_max_output() {
        let decompressed = Stored.decompress_to_vec(b"hello", 3).unwrap();
        assert_eq!(decompressed, b"hel");

        let decompressed = Stored.decompress_to_vec(b"hello", 64).unwrap();
        assert_eq!(decompressed, b"hello");
    }
}
