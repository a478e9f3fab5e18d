//! Stream inspection without materializing the decoded data.

use oxixca_core::error::{Result, XcaError};

use crate::decoder::TokenReader;
use crate::format::{LengthTier, Token};

/// Token statistics of a complete Plain LZ77 stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Size of the compressed stream in bytes.
    pub compressed_len: usize,
    /// Number of bytes the stream decodes to.
    pub decoded_len: usize,
    /// Number of literal tokens.
    pub literals: usize,
    /// Number of match tokens.
    pub matches: usize,
    /// Number of indicator words read, including a trailing padding word.
    pub indicator_words: usize,
    /// Longest match length seen.
    pub longest_match: usize,
    /// Largest match offset seen.
    pub largest_offset: usize,
    tiers: [usize; LengthTier::ALL.len()],
}

impl StreamStats {
    /// Walk every token of `stream` and tally it.
    ///
    /// Back-references are checked against the running decoded length, so a
    /// stream that [`decompress_into`](crate::decompress_into) would reject
    /// fails here too.
    pub fn collect(stream: &[u8]) -> Result<Self> {
        let mut stats = Self {
            compressed_len: stream.len(),
            ..Self::default()
        };

        let mut reader = TokenReader::new(stream);
        while let Some(token) = reader.next_token()? {
            match token {
                Token::Literal(_) => stats.literals += 1,
                Token::Match(m) => {
                    if m.offset > stats.decoded_len {
                        return Err(XcaError::invalid_back_reference(
                            m.offset,
                            stats.decoded_len,
                        ));
                    }
                    stats.matches += 1;
                    stats.longest_match = stats.longest_match.max(m.length);
                    stats.largest_offset = stats.largest_offset.max(m.offset);
                    stats.tiers[m.tier() as usize] += 1;
                }
            }
            stats.decoded_len += token.decoded_len();
        }
        stats.indicator_words = reader.indicator_words();

        Ok(stats)
    }

    /// Number of matches encoded with the given length tier.
    pub fn tier_count(&self, tier: LengthTier) -> usize {
        self.tiers[tier as usize]
    }

    /// Total number of tokens.
    pub fn tokens(&self) -> usize {
        self.literals + self.matches
    }

    /// Compressed size divided by decoded size.
    pub fn compression_ratio(&self) -> f64 {
        if self.decoded_len == 0 {
            1.0
        } else {
            self.compressed_len as f64 / self.decoded_len as f64
        }
    }

    /// Space savings as a percentage.
    pub fn space_savings(&self) -> f64 {
        if self.decoded_len == 0 {
            0.0
        } else {
            (1.0 - self.compression_ratio()) * 100.0
        }
    }
}
