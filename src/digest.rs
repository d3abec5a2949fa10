//! Digest values and the hashing pipeline

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::compress::compress;
use super::consts::H0;
use super::error::{Error, Result};
use super::padding::pad;
use super::{DIGEST_HEX_LEN, DIGEST_SIZE, STATE_WORDS};

/// A SHA-256 digest: the final 8-word state of one hash computation
///
/// The canonical rendering is 64 lowercase hex characters, words H0 through
/// H7 in order, each zero-padded to 8 digits. [`Digest::from_str`] accepts
/// either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u32; STATE_WORDS]);

/// Compute the SHA-256 digest of a message
///
/// Pads the message into 512-bit blocks, then folds the compression
/// function over them starting from the FIPS initial state. Deterministic;
/// the only error condition is a message whose bit length overflows the
/// 64-bit length field.
///
/// ```rust
/// let d = sha256::digest(b"abc")?;
/// assert_eq!(
///     d.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// # Ok::<(), sha256::Error>(())
/// ```
pub fn digest(message: &[u8]) -> Result<Digest> {
    let blocks = pad(message)?;

    let mut state = H0;
    for block in &blocks {
        compress(&mut state, block);
    }

    debug!(
        message_bytes = message.len(),
        blocks = blocks.len(),
        "digest finalized"
    );

    Ok(Digest(state))
}

/// Compute a digest and render it as the canonical lowercase hex string
pub fn digest_hex(message: &[u8]) -> Result<String> {
    Ok(digest(message)?.to_hex())
}

impl Digest {
    /// Get the 8 state words, H0 through H7
    #[must_use]
    pub const fn as_words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Serialize to 32 big-endian bytes
    #[must_use]
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Render as 64 lowercase hex characters
    #[must_use]
    pub fn to_hex(&self) -> String {
        use fmt::Write;
        let mut hex = String::with_capacity(DIGEST_HEX_LEN);
        for word in self.0 {
            write!(hex, "{word:08x}").expect("writing to a String cannot fail");
        }
        hex
    }

    /// Render as 64 uppercase hex characters
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        self.to_hex().to_ascii_uppercase()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Reject bad characters before the length check, so a multibyte
        // character reports as a bad digit rather than a byte-count mismatch.
        if let Some((index, &byte)) = s
            .as_bytes()
            .iter()
            .enumerate()
            .find(|(_, byte)| !byte.is_ascii_hexdigit())
        {
            return Err(Error::InvalidHexDigit { index, byte });
        }

        if s.len() != DIGEST_HEX_LEN {
            return Err(Error::InvalidDigestLength {
                expected: DIGEST_HEX_LEN,
                got: s.len(),
            });
        }

        let mut words = [0u32; STATE_WORDS];
        for (i, byte) in s.bytes().enumerate() {
            let digit = match byte {
                b'0'..=b'9' => u32::from(byte - b'0'),
                b'a'..=b'f' => u32::from(byte - b'a') + 10,
                b'A'..=b'F' => u32::from(byte - b'A') + 10,
                _ => unreachable!("pre-validated hex digit"),
            };
            words[i / 8] = (words[i / 8] << 4) | digit;
        }

        Ok(Self(words))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
