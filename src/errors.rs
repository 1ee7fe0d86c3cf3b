//! Error types for credential artifact decoding
//!
//! Two kinds of failure exist in this crate: text that does not match the
//! alphabet an encoding variant requires, and byte buffers whose structure
//! violates an expected layout. Both are surfaced immediately to the
//! caller; nothing is retried and no partial results are produced.

use thiserror::Error;

/// Errors that can occur while decoding registration artifacts
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Text does not match the alphabet required by the target encoding
    #[error("format error: {0}")]
    Format(String),

    /// A structural expectation about binary or JSON layout was violated
    /// (missing key, truncated buffer, out-of-range length field,
    /// invalid UTF-8/JSON)
    #[error("decode error: {0}")]
    Decode(String),
}
