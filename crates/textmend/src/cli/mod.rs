//! CLI module for Textmend
//!
//! Three commands, all standalone:
//! - `detect` reports the likely encoding of one file
//! - `fix` re-encodes one file to UTF-8, with backup and atomic-write handling
//! - `batch` drives detect/fix over a directory tree
//!
//! Every command turns both successes and failures into flat report records,
//! so a batch run never aborts on a single bad file.

pub mod batch;
pub mod detect;
pub mod error;
pub mod fix;
pub mod output;
pub mod report;

pub use error::HelpfulError;
