//! Error taxonomy. Encoding errors are caller bugs or an explicit
//! opt-out of metrics preprocessing; decoding errors reject malformed
//! frames without panicking. `ChecksumMismatch` is deliberately absent
//! here — it is a soft signal carried on the decode result,
//! not a hard failure.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("non-finite value encountered with metrics_mode enabled")]
    NonFiniteInMetricsMode,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("bad magic value in frame header")]
    BadMagic,

    #[error("unsupported frame version {0}")]
    UnsupportedVersion(u16),

    #[error("bad header: {0}")]
    BadHeader(String),

    #[error("input truncated before the declared frame length")]
    Truncated,
}
