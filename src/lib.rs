//! SHA-256 (FIPS 180-4) message digest
//!
//! This library computes the SHA-256 digest of an in-memory byte sequence.
//! The core is a faithful implementation of the FIPS 180-4 algorithm:
//! message padding into 512-bit blocks, the 64-round compression function,
//! and canonical hexadecimal rendering of the final 8-word state.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256::digest_hex;
//!
//! let hex = digest_hex(b"abc")?;
//! assert_eq!(
//!     hex,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), sha256::Error>(())
//! ```
//!
//! # Features
//!
//! - **Exact bit-level semantics** - wrapping 32-bit arithmetic, big-endian
//!   block parsing, verified against the NIST/NSA worked examples
//! - **Typed digest values** - [`Digest`] formats, parses, and compares
//! - **No global state** - every call owns its working set; hashing
//!   independent messages from separate threads needs no coordination
//! - **Optional serde** - digests serialize as their canonical hex string

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod compress;
mod consts;
mod digest;
mod error;
mod padding;
mod words;

pub use digest::{Digest, digest, digest_hex};
pub use error::{Error, Result};
pub use padding::{Block, pad};

/// Size of one message block in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words per block
pub const BLOCK_WORDS: usize = 16;

/// Number of 32-bit words in the hash state
pub const STATE_WORDS: usize = 8;

/// Size of a digest in bytes (256 bits)
pub const DIGEST_SIZE: usize = 32;

/// Length of a digest rendered as hexadecimal
pub const DIGEST_HEX_LEN: usize = 64;

/// Number of compression rounds per block
pub const ROUNDS: usize = 64;
