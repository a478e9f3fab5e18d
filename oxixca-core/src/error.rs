//! Error types for OxiXCA operations.
//!
//! Every failure of the block codecs is terminal: the call is aborted at the
//! first violated bound and whatever was already written to the output buffer
//! must be discarded by the caller.

use thiserror::Error;

/// The main error type for OxiXCA operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XcaError {
    /// A read would consume more bytes than remain in the input.
    #[error("Input exhausted at offset {position}: need {needed} bytes, {available} remain")]
    InputExhausted {
        /// Input offset of the failed read.
        position: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left in the input.
        available: usize,
    },

    /// A write would exceed the declared output capacity.
    #[error("Output exhausted at offset {position}: need {needed} bytes, {available} remain")]
    OutputExhausted {
        /// Output offset of the failed write.
        position: usize,
        /// Number of bytes the write required.
        needed: usize,
        /// Number of bytes left in the output buffer.
        available: usize,
    },

    /// A back-reference points before the start of the produced output.
    #[error("Invalid back-reference: offset {offset} exceeds {produced} bytes produced")]
    InvalidBackReference {
        /// The decoded match offset.
        offset: usize,
        /// Number of bytes produced when the match was decoded.
        produced: usize,
    },

    /// A match length is zero, overflows, or uses an escape value below its minimum.
    #[error("Invalid match length at offset {position}: {message}")]
    InvalidLength {
        /// Input offset just past the offending length field.
        position: usize,
        /// Description of the length error.
        message: String,
    },
}

/// Result type alias for OxiXCA operations.
pub type Result<T> = std::result::Result<T, XcaError>;

impl XcaError {
    /// Create an input exhaustion error.
    pub fn input_exhausted(position: usize, needed: usize, available: usize) -> Self {
        Self::InputExhausted {
            position,
            needed,
            available,
        }
    }

    /// Create an output exhaustion error.
    pub fn output_exhausted(position: usize, needed: usize, available: usize) -> Self {
        Self::OutputExhausted {
            position,
            needed,
            available,
        }
    }

    /// Create an invalid back-reference error.
    pub fn invalid_back_reference(offset: usize, produced: usize) -> Self {
        Self::InvalidBackReference { offset, produced }
    }

    /// Create an invalid length error.
    pub fn invalid_length(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidLength {
            position,
            message: message.into(),
        }
    }

    /// Returns `true` if the caller may succeed by retrying with a larger output buffer.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::OutputExhausted { .. })
    }

    /// Returns `true` if the error was caused by a malformed or truncated stream.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::InputExhausted { .. }
                | Self::InvalidBackReference { .. }
                | Self::InvalidLength { .. }
        )
    }
}
