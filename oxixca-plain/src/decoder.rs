//! Plain LZ77 decoder (decompression).
//!
//! This is the algorithm of [MS-XCA] 2.4 "Plain LZ77 Decompression". Parsing
//! lives in [`TokenReader`], which turns the stream into [`Token`]s; the
//! decoder applies those tokens to the caller's output buffer.

use oxixca_core::error::{Result, XcaError};
use tracing::{debug, trace};

use crate::cursor::{ByteReader, ByteWriter};
use crate::format::{
    BYTE_LENGTH_MAX, ESCAPE_BIAS, INDICATOR_BITS, METADATA_LENGTH_MAX, MIN_MATCH, Match,
    NIBBLE_LENGTH_MAX, NibbleSlot, Token,
};

/// Decompress `input` into `output`, returning the number of bytes produced.
///
/// Decoding stops when `output` is full or `input` is exhausted, whichever
/// comes first, and always handles at least one token of a non-empty stream.
/// Malformed streams fail with an error and never read or write out of bounds.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Ok(0);
    }

    trace!(
        input_len = input.len(),
        capacity = output.len(),
        "plain lz77 decompress"
    );

    let mut tokens = TokenReader::new(input);
    let mut out = ByteWriter::new(output);

    loop {
        match tokens.next_token()? {
            None => break,
            Some(Token::Literal(byte)) => out.write_u8(byte)?,
            Some(Token::Match(m)) => out.copy_back(m.offset, m.length)?,
        }

        if out.is_full() || tokens.is_exhausted() {
            break;
        }
    }

    debug!(
        input_len = input.len(),
        consumed = tokens.position(),
        decompressed_len = out.position(),
        "plain lz77 decompression finished"
    );
    Ok(out.position())
}

/// Parses a Plain LZ77 stream into tokens.
///
/// The reader handles indicator refills, the shared nibble and the length
/// escapes, and validates escape values and length arithmetic. It cannot check
/// match offsets against produced output; callers that track the output
/// position must do that themselves.
///
/// # Example
///
/// ```rust
/// use oxixca_plain::{Match, Token, TokenReader};
///
/// let stream = [0xff, 0xff, 0xff, 0x7f, 0x61, 0x00, 0x00];
/// let tokens: Vec<Token> = TokenReader::new(&stream).collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     [Token::Literal(b'a'), Token::Match(Match { offset: 1, length: 3 })]
/// );
/// ```
#[derive(Debug)]
pub struct TokenReader<'a> {
    reader: ByteReader<'a>,
    indicator: u32,
    indicator_bits: u32,
    indicator_words: usize,
    nibble: NibbleSlot,
    finished: bool,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over a complete compressed stream.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(input),
            indicator: 0,
            indicator_bits: 0,
            indicator_words: 0,
            nibble: NibbleSlot::Empty,
            finished: false,
        }
    }

    /// Number of input bytes consumed so far.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Number of indicator words loaded so far.
    pub fn indicator_words(&self) -> usize {
        self.indicator_words
    }

    /// Returns `true` once no further token can be read.
    pub fn is_exhausted(&self) -> bool {
        self.finished || self.reader.is_exhausted()
    }

    /// Read the next token, or `None` at the end of the stream.
    ///
    /// The stream ends when the input runs out at a token boundary, or when
    /// loading an indicator word consumes the last input byte: such a word
    /// only holds padding for tokens the encoder never emitted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.is_exhausted() {
            return Ok(None);
        }

        if self.indicator_bits == 0 {
            self.indicator = self.reader.read_u32_le()?;
            self.indicator_words += 1;
            if self.reader.is_exhausted() {
                debug!(
                    position = self.reader.position(),
                    "stream ends on an indicator word"
                );
                self.finished = true;
                return Ok(None);
            }
            self.indicator_bits = INDICATOR_BITS;
        }

        self.indicator_bits -= 1;
        if (self.indicator >> self.indicator_bits) & 1 == 0 {
            return Ok(Some(Token::Literal(self.reader.read_u8()?)));
        }

        let metadata = self.reader.read_u16_le()?;
        let offset = usize::from(metadata >> 3) + 1;
        let length = self.read_length(u32::from(metadata) & METADATA_LENGTH_MAX as u32)?;
        Ok(Some(Token::Match(Match { offset, length })))
    }

    /// Decode the rest of a match length given the 3-bit metadata field.
    fn read_length(&mut self, field: u32) -> Result<usize> {
        let mut length = field;

        if length == METADATA_LENGTH_MAX as u32 {
            length = match self.nibble {
                NibbleSlot::Empty => {
                    let at = self.reader.position();
                    let byte = self.reader.read_u8()?;
                    self.nibble = NibbleSlot::AwaitingHighNibble(at);
                    u32::from(byte & 0x0F)
                }
                NibbleSlot::AwaitingHighNibble(at) => {
                    self.nibble = NibbleSlot::Empty;
                    u32::from(self.reader.peek_back(at)? >> 4)
                }
            };

            if length == NIBBLE_LENGTH_MAX as u32 {
                length = u32::from(self.reader.read_u8()?);

                if length == BYTE_LENGTH_MAX as u32 {
                    length = u32::from(self.reader.read_u16_le()?);
                    if length == 0 {
                        length = self.reader.read_u32_le()?;
                    }
                    if length < ESCAPE_BIAS as u32 {
                        return Err(XcaError::invalid_length(
                            self.reader.position(),
                            format!("escape value {length} is below {ESCAPE_BIAS}"),
                        ));
                    }
                    length -= ESCAPE_BIAS as u32;
                }
                length = self.add_length(length, NIBBLE_LENGTH_MAX)?;
            }
            length = self.add_length(length, METADATA_LENGTH_MAX)?;
        }
        length = self.add_length(length, MIN_MATCH)?;

        usize::try_from(length).map_err(|_| {
            XcaError::invalid_length(self.reader.position(), "match length exceeds usize")
        })
    }

    fn add_length(&self, length: u32, step: usize) -> Result<u32> {
        length.checked_add(step as u32).ok_or_else(|| {
            XcaError::invalid_length(self.reader.position(), "match length overflows 32 bits")
        })
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
