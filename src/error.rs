//! Digest error types

use thiserror::Error;

/// SHA-256 errors
#[derive(Error, Debug)]
pub enum Error {
    /// Message too long for the 64-bit length field
    #[error("input too large: {bytes} bytes cannot be length-encoded in 64 bits")]
    InputTooLarge {
        /// Input size in bytes
        bytes: usize,
    },

    /// Hex digest string has the wrong length
    #[error("invalid digest length: expected {expected} hex characters, got {got}")]
    InvalidDigestLength {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Hex digest string contains a non-hexadecimal character
    #[error("invalid hex digit {byte:#04x} at offset {index}")]
    InvalidHexDigit {
        /// Offset of the offending character
        index: usize,
        /// Offending byte
        byte: u8,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
