//! # OxiXCA Core
//!
//! Core components shared by the OxiXCA codecs.
//!
//! - [`traits`]: One-shot block compressor/decompressor traits
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Tools                                               │
//! │     oxixca CLI                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     MS-XCA Plain LZ77 (oxixca-plain)                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     XcaError, BlockCompressor/BlockDecompressor         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxixca_core::{Result, XcaError};
//!
//! fn check_room(position: usize, needed: usize, capacity: usize) -> Result<()> {
//!     if capacity.saturating_sub(position) < needed {
//!         return Err(XcaError::output_exhausted(position, needed, capacity - position));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_room(0, 4, 4).is_ok());
//! assert!(check_room(2, 4, 4).unwrap_err().is_capacity_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{Result, XcaError};
pub use traits::{BlockCompressor, BlockDecompressor};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, XcaError};
    pub use crate::traits::{BlockCompressor, BlockDecompressor};
}
