//! Error types for the encoding resolver

use thiserror::Error;

/// Resolver error type.
///
/// Detection is deterministic over the same bytes, so none of these are
/// retryable; callers decide per-item whether to continue or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("undecodable with known candidate encodings")]
    Undecodable,
}
