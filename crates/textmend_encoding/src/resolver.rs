//! The `detect` and `fix` operations
//!
//! Each invocation is a single linear pass: detect walks the candidate list
//! once, fix reuses the decoded text from detection. Nothing is retried and
//! no state survives between calls.

use crate::candidate::Candidate;
use crate::error::EncodingError;
use crate::stats::TextStats;
use crate::Result;

/// Outcome of a successful detection.
///
/// Invariant: `needs_conversion == (encoding != Candidate::Utf8)`.
#[derive(Debug, Clone)]
pub struct Detection {
    pub encoding: Candidate,
    pub is_utf8: bool,
    pub needs_conversion: bool,
    pub stats: TextStats,
    /// The fully decoded text, with any byte order mark stripped.
    pub text: String,
}

/// Outcome of a successful fix.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub original_encoding: Candidate,
    /// False when the input was already plain UTF-8 and `output` is the
    /// unmodified input buffer.
    pub changed: bool,
    pub output: Vec<u8>,
}

/// Determine the most likely encoding of `buffer`.
///
/// Candidates are tried strictly in [`Candidate::PRIORITY`] order; the first
/// one that decodes the whole buffer without error wins, subject to the
/// acceptance check below. An empty buffer detects as plain UTF-8 with
/// all-zero statistics.
pub fn detect(buffer: &[u8]) -> Result<Detection> {
    for candidate in Candidate::PRIORITY {
        let Some(text) = candidate.decode(buffer) else {
            continue;
        };
        if !accept(&text) {
            continue;
        }
        let stats = TextStats::of(&text);
        let is_utf8 = candidate == Candidate::Utf8;
        return Ok(Detection {
            encoding: candidate,
            is_utf8,
            needs_conversion: !is_utf8,
            stats,
            text: text.into_owned(),
        });
    }
    Err(EncodingError::Undecodable)
}

/// Acceptance check applied after a strict decode succeeds.
///
/// A replacement character means a lenient codec substituted rather than
/// raised, so the guess is almost certainly wrong. A NUL means the buffer is
/// either binary or BOM-less UTF-16 that a single-byte code page is about to
/// misread as mojibake; declining lets a later candidate claim it.
fn accept(text: &str) -> bool {
    !text.chars().any(|ch| ch == '\u{FFFD}' || ch == '\0')
}

/// Re-encode `buffer` as UTF-8 without a byte order mark.
///
/// Idempotent: a buffer that already detects as plain UTF-8 is returned
/// unchanged with `changed: false`. Detection failure propagates.
pub fn fix(buffer: &[u8]) -> Result<Conversion> {
    let detection = detect(buffer)?;
    if !detection.needs_conversion {
        return Ok(Conversion {
            original_encoding: Candidate::Utf8,
            changed: false,
            output: buffer.to_vec(),
        });
    }
    Ok(Conversion {
        original_encoding: detection.encoding,
        changed: true,
        output: detection.text.into_bytes(),
    })
}
