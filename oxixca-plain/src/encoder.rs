//! Plain LZ77 encoder (compression).
//!
//! This is the algorithm of [MS-XCA] 2.3 "Plain LZ77 Compression". Literal
//! bytes are stored inline when no match is found, and every 32 tokens a
//! `u32` indicator word records which of them are matches. Match lengths use
//! a variable-width encoding that may borrow a spare half-byte left behind by
//! an earlier match.

use oxixca_core::error::Result;
use tracing::{debug, trace};

use crate::cursor::ByteWriter;
use crate::format::{
    BYTE_LENGTH_MAX, ESCAPE_BIAS, INDICATOR_BITS, INDICATOR_SIZE, METADATA_LENGTH_MAX, MIN_MATCH,
    Match, NIBBLE_LENGTH_MAX, NibbleSlot, WINDOW_SIZE,
};
use crate::matcher::longest_match;

/// Compress `input` into `output`, returning the number of bytes written.
///
/// An empty input writes nothing and returns 0. If `output` is too small for
/// the stream an [`XcaError::OutputExhausted`] error is returned; size the
/// buffer with [`compress_bound`](crate::compress_bound) to rule that out.
///
/// [`XcaError::OutputExhausted`]: oxixca_core::XcaError::OutputExhausted
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Ok(0);
    }

    trace!(
        input_len = input.len(),
        capacity = output.len(),
        "plain lz77 compress"
    );

    let mut encoder = TokenWriter::new(output)?;
    let mut pos = 0;

    while pos < input.len() {
        match longest_match(input, pos) {
            Some(m) => {
                encoder.push_match(m)?;
                pos += m.length;
            }
            None => {
                encoder.push_literal(input[pos])?;
                pos += 1;
            }
        }
    }

    let written = encoder.finish()?;
    debug!(
        input_len = input.len(),
        compressed_len = written,
        "plain lz77 compression finished"
    );
    Ok(written)
}

/// Serializes tokens and maintains the pending indicator word.
struct TokenWriter<'a> {
    out: ByteWriter<'a>,
    /// Bits accumulated for the current indicator word, oldest in the high bits.
    indicator: u32,
    indicator_bits: u32,
    /// Stream position of the reserved slot the current word is stored in.
    indicator_pos: usize,
    nibble: NibbleSlot,
}

impl<'a> TokenWriter<'a> {
    fn new(output: &'a mut [u8]) -> Result<Self> {
        let mut out = ByteWriter::new(output);
        let indicator_pos = out.reserve(INDICATOR_SIZE)?;
        Ok(Self {
            out,
            indicator: 0,
            indicator_bits: 0,
            indicator_pos,
            nibble: NibbleSlot::Empty,
        })
    }

    fn push_literal(&mut self, byte: u8) -> Result<()> {
        self.out.write_u8(byte)?;
        self.push_indicator_bit(false)
    }

    fn push_match(&mut self, m: Match) -> Result<()> {
        debug_assert!(m.length >= MIN_MATCH);
        debug_assert!((1..=WINDOW_SIZE).contains(&m.offset));

        let mut value = m.length - MIN_MATCH;
        let metadata = ((m.offset - 1) << 3) | value.min(METADATA_LENGTH_MAX);
        self.out.write_u16_le(metadata as u16)?;

        if value >= METADATA_LENGTH_MAX {
            value -= METADATA_LENGTH_MAX;
            self.push_nibble(value.min(NIBBLE_LENGTH_MAX) as u8)?;

            if value >= NIBBLE_LENGTH_MAX {
                value -= NIBBLE_LENGTH_MAX;
                self.out.write_u8(value.min(BYTE_LENGTH_MAX) as u8)?;

                if value >= BYTE_LENGTH_MAX {
                    // The escape fields carry the remainder before the nibble
                    // and metadata steps were taken off.
                    value += ESCAPE_BIAS;
                    match u16::try_from(value) {
                        Ok(word) => self.out.write_u16_le(word)?,
                        Err(_) => {
                            self.out.ensure(2 + 4)?;
                            self.out.write_u16_le(0)?;
                            self.out.write_u32_le(value as u32)?;
                        }
                    }
                }
            }
        }

        self.push_indicator_bit(true)
    }

    fn push_nibble(&mut self, nibble: u8) -> Result<()> {
        match self.nibble {
            NibbleSlot::Empty => {
                let at = self.out.position();
                self.out.write_u8(nibble)?;
                self.nibble = NibbleSlot::AwaitingHighNibble(at);
            }
            NibbleSlot::AwaitingHighNibble(at) => {
                self.out.or_u8(at, nibble << 4)?;
                self.nibble = NibbleSlot::Empty;
            }
        }
        Ok(())
    }

    fn push_indicator_bit(&mut self, is_match: bool) -> Result<()> {
        self.indicator = (self.indicator << 1) | u32::from(is_match);
        self.indicator_bits += 1;

        if self.indicator_bits == INDICATOR_BITS {
            self.out.patch_u32_le(self.indicator_pos, self.indicator)?;
            self.indicator = 0;
            self.indicator_bits = 0;
            self.indicator_pos = self.out.reserve(INDICATOR_SIZE)?;
        }
        Ok(())
    }

    /// Store the last indicator word and return the stream length.
    ///
    /// Unused low bits are set to 1. A decoder may load the whole word even
    /// when fewer tokens follow, and it stops on input exhaustion before it
    /// acts on the padding.
    fn finish(mut self) -> Result<usize> {
        let mut word = self.indicator;
        if self.indicator_bits != 0 {
            word <<= INDICATOR_BITS - self.indicator_bits;
        }
        word |= u32::MAX >> self.indicator_bits;
        self.out.patch_u32_le(self.indicator_pos, word)?;
        Ok(self.out.position())
    }
}
