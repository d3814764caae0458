//! Candidate encodings and strict per-candidate decoding
//!
//! The candidate list is a priority ranking, not an alphabet: UTF-8 comes
//! first because it is the desired end state, and the lenient single-byte
//! code pages come late because they decode almost any byte sequence and
//! would otherwise mask real non-UTF-8 content.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Bytes the Windows-1252 code page leaves undefined.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Byte order mark found at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Bom {
    /// Length of the mark in bytes.
    pub fn len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Le | Bom::Utf16Be => 2,
        }
    }
}

/// Detect a byte order mark at the start of the buffer.
pub fn leading_bom(bytes: &[u8]) -> Option<Bom> {
    match bytes {
        [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
        [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
        [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
        _ => None,
    }
}

/// One encoding tried during detection, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// Plain UTF-8 without a byte order mark
    Utf8,
    /// UTF-8 with a leading byte order mark
    Utf8Sig,
    /// Windows code page 1252
    Windows1252,
    /// ISO-8859-1, the terminal fallback: every byte decodes
    Latin1,
    /// UTF-16, endianness resolved by BOM (little-endian assumed without one)
    Utf16,
}

impl Candidate {
    /// Detection priority. First successful strict decode wins.
    pub const PRIORITY: [Candidate; 5] = [
        Candidate::Utf8,
        Candidate::Utf8Sig,
        Candidate::Windows1252,
        Candidate::Latin1,
        Candidate::Utf16,
    ];

    /// Stable lowercase label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            Candidate::Utf8 => "utf-8",
            Candidate::Utf8Sig => "utf-8-sig",
            Candidate::Windows1252 => "windows-1252",
            Candidate::Latin1 => "latin-1",
            Candidate::Utf16 => "utf-16",
        }
    }

    /// Strictly decode the whole buffer as this candidate.
    ///
    /// Returns `None` when the buffer is malformed for this candidate or when
    /// the candidate declines the buffer. BOM-carrying candidates claim their
    /// mark and strip it from the decoded text; the other candidates decline
    /// BOM-prefixed input so a mark is never decoded as mojibake.
    pub(crate) fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        let bom = leading_bom(bytes);
        match self {
            Candidate::Utf8 => {
                if bom == Some(Bom::Utf8) {
                    return None;
                }
                std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
            }
            Candidate::Utf8Sig => {
                if bom != Some(Bom::Utf8) {
                    return None;
                }
                std::str::from_utf8(&bytes[Bom::Utf8.len()..])
                    .ok()
                    .map(Cow::Borrowed)
            }
            Candidate::Windows1252 => {
                if bom.is_some() || bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                encoding_rs::WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Candidate::Latin1 => {
                if bom.is_some() {
                    return None;
                }
                Some(encoding_rs::mem::decode_latin1(bytes))
            }
            Candidate::Utf16 => {
                let (codec, payload) = match bom {
                    Some(Bom::Utf16Le) => (encoding_rs::UTF_16LE, &bytes[2..]),
                    Some(Bom::Utf16Be) => (encoding_rs::UTF_16BE, &bytes[2..]),
                    Some(Bom::Utf8) => return None,
                    None => (encoding_rs::UTF_16LE, bytes),
                };
                codec.decode_without_bom_handling_and_without_replacement(payload)
            }
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Candidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
