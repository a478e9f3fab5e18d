//! Plain LZ77 wire format: constants, tokens and length tiers.
//!
//! Stream layout (all integers little-endian):
//!
//! ```text
//! [indicator u32] token token ... (32 tokens) [indicator u32] token ...
//!
//! literal : 1 raw byte
//! match   : u16 metadata = (offset - 1) << 3 | min(length - 3, 7)
//!           [shared nibble byte] [u8] [u16] [u32 after a zero u16]
//! ```
//!
//! Indicator bits are consumed most-significant first; `0` tags a literal and
//! `1` a match.

/// Largest back-reference distance the 13-bit offset field can carry.
pub const WINDOW_SIZE: usize = 0x2000;

/// Shortest match the format can express.
pub const MIN_MATCH: usize = 3;

/// Longest match the encoder emits (`0xFFFF + 3`).
pub const MAX_MATCH: usize = 0xFFFF + MIN_MATCH;

/// Number of tokens tagged by one indicator word.
pub const INDICATOR_BITS: u32 = 32;

/// Size in bytes of an indicator word.
pub const INDICATOR_SIZE: usize = 4;

/// Largest length remainder stored directly in the metadata word.
pub const METADATA_LENGTH_MAX: usize = 7;

/// Largest length remainder stored in a shared nibble.
pub const NIBBLE_LENGTH_MAX: usize = 15;

/// Largest length remainder stored in the extra length byte.
pub const BYTE_LENGTH_MAX: usize = 255;

/// Bias carried by the 16/32-bit escape fields (`15 + 7`).
pub const ESCAPE_BIAS: usize = NIBBLE_LENGTH_MAX + METADATA_LENGTH_MAX;

/// Worst-case compressed size for an input of `input_len` bytes.
///
/// The worst case is an all-literal stream: one byte per input byte plus every
/// indicator slot the encoder reserves (the first one, and a fresh one after
/// each full batch of 32 tokens). Matches never cost more than the bytes they
/// replace.
pub const fn compress_bound(input_len: usize) -> usize {
    if input_len == 0 {
        return 0;
    }
    input_len + INDICATOR_SIZE * (input_len / INDICATOR_BITS as usize + 1)
}

/// A back-reference into already produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Distance behind the current output position (1-based).
    pub offset: usize,
    /// Number of bytes to copy.
    pub length: usize,
}

impl Match {
    /// Canonical length tier of this match.
    pub fn tier(&self) -> LengthTier {
        LengthTier::for_length(self.length)
    }
}

/// A single token of a Plain LZ77 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A raw byte copied to the output.
    Literal(u8),
    /// A back-reference expanded from earlier output.
    Match(Match),
}

impl Token {
    /// Number of output bytes this token produces.
    pub fn decoded_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match(m) => m.length,
        }
    }
}

/// Encoding width used for a match length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LengthTier {
    /// Length fits the 3-bit metadata field (3..=9).
    Base,
    /// Length spills into a shared nibble (10..=24).
    Nibble,
    /// Length spills into an extra byte (25..=279).
    Byte,
    /// Length needs the 16-bit escape field (280..=65538).
    Word,
    /// Length needs the 32-bit escape field (65539 and above).
    DoubleWord,
}

impl LengthTier {
    /// All tiers, narrowest first.
    pub const ALL: [LengthTier; 5] = [
        LengthTier::Base,
        LengthTier::Nibble,
        LengthTier::Byte,
        LengthTier::Word,
        LengthTier::DoubleWord,
    ];

    /// Tier the encoder uses for a match of `length` bytes.
    pub fn for_length(length: usize) -> Self {
        let value = length.saturating_sub(MIN_MATCH);
        if value < METADATA_LENGTH_MAX {
            Self::Base
        } else if value < ESCAPE_BIAS {
            Self::Nibble
        } else if value - ESCAPE_BIAS < BYTE_LENGTH_MAX {
            Self::Byte
        } else if value <= u16::MAX as usize {
            Self::Word
        } else {
            Self::DoubleWord
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Nibble => "nibble",
            Self::Byte => "byte",
            Self::Word => "word",
            Self::DoubleWord => "dword",
        }
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared half-byte slot pairing two extended-length matches.
///
/// The first match that needs a nibble allocates a byte and uses its low half;
/// the next one uses the high half of that same byte and empties the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NibbleSlot {
    /// No half-used byte is pending.
    #[default]
    Empty,
    /// The byte at this stream position has its high nibble still free.
    AwaitingHighNibble(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(WINDOW_SIZE, 8192);
        assert_eq!(MAX_MATCH, 65538);
        assert_eq!(ESCAPE_BIAS, 22);
        // The largest offset still fits the metadata word.
        assert!((((WINDOW_SIZE - 1) << 3) | METADATA_LENGTH_MAX) <= u16::MAX as usize);
    }

    #[test]
    fn test_compress_bound() {
        assert_eq!(compress_bound(0), 0);
        assert_eq!(compress_bound(1), 5);
        assert_eq!(compress_bound(31), 35);
        // 32 literals fill the first word and reserve a second one.
        assert_eq!(compress_bound(32), 40);
        assert_eq!(compress_bound(64), 76);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LengthTier::for_length(3), LengthTier::Base);
        assert_eq!(LengthTier::for_length(9), LengthTier::Base);
        assert_eq!(LengthTier::for_length(10), LengthTier::Nibble);
        assert_eq!(LengthTier::for_length(24), LengthTier::Nibble);
        assert_eq!(LengthTier::for_length(25), LengthTier::Byte);
        assert_eq!(LengthTier::for_length(279), LengthTier::Byte);
        assert_eq!(LengthTier::for_length(280), LengthTier::Word);
        assert_eq!(LengthTier::for_length(MAX_MATCH), LengthTier::Word);
        assert_eq!(LengthTier::for_length(MAX_MATCH + 1), LengthTier::DoubleWord);
    }

    #[test]
    fn test_token_decoded_len() {
        assert_eq!(Token::Literal(b'a').decoded_len(), 1);
        let m = Match {
            offset: 1,
            length: 30,
        };
        assert_eq!(Token::Match(m).decoded_len(), 30);
        assert_eq!(m.tier(), LengthTier::Byte);
    }

    #[test]
    fn test_nibble_slot_default() {
        assert_eq!(NibbleSlot::default(), NibbleSlot::Empty);
    }
}
