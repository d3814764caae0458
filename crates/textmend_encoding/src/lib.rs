//! # textmend_encoding - Encoding detection and normalization core
//!
//! Given the raw bytes of a text file, decides which encoding from a fixed
//! priority list most likely produced them, and re-encodes to UTF-8 when the
//! source was something else.
//!
//! Modules:
//! - `candidate` for the ordered candidate list and strict per-candidate decoding
//! - `stats` for character/line statistics over decoded text
//! - `resolver` for the `detect` and `fix` operations
//!
//! The crate is a pure library: it only ever sees byte buffers. Reading files,
//! writing output, and backup handling belong to the caller.

mod candidate;
mod error;
mod resolver;
mod stats;

pub use candidate::{leading_bom, Bom, Candidate};
pub use error::EncodingError;
pub use resolver::{detect, fix, Conversion, Detection};
pub use stats::TextStats;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, EncodingError>;
