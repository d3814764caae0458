//! Textmend command-line surface.
//!
//! The binary wraps the pure resolver in `textmend_encoding` with the file
//! handling it deliberately leaves out: reading input, atomic output writes,
//! pre-overwrite backups, and directory batch runs.

pub mod cli;
