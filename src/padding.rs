//! Message padding and block parsing
//!
//! FIPS 180-4 §5.1.1/§5.2.1: append a `1` bit, zero-fill to 448 mod 512
//! bits, append the original bit length as a big-endian 64-bit integer, and
//! parse the result into 512-bit blocks of 16 big-endian words.

use bytes::{BufMut, BytesMut};
use tracing::trace;

use super::{BLOCK_SIZE, BLOCK_WORDS, Error, Result};

/// One 512-bit unit of padded input, as 16 big-endian words
pub type Block = [u32; BLOCK_WORDS];

/// Bytes reserved for the trailing bit-length field
const LENGTH_FIELD_SIZE: usize = 8;

/// Pad a message and parse it into compression blocks
///
/// An empty message still produces exactly one block: the `1` bit, 447 zero
/// bits, and a zero length field fill 512 bits. A message of exactly 56
/// bytes (448 bits) spills into a second block, since the `1` bit and the
/// length field no longer fit.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] if the message bit length cannot be
/// represented in 64 bits. The check is explicit; the length is never
/// silently truncated.
pub fn pad(message: &[u8]) -> Result<Vec<Block>> {
    let Some(bit_len) = (message.len() as u64).checked_mul(8) else {
        return Err(Error::InputTooLarge {
            bytes: message.len(),
        });
    };

    // One byte for the 0x80 marker, then zeros until the length field lands
    // flush at the end of a block.
    let mut padded = BytesMut::with_capacity(padded_len(message.len()));
    padded.put_slice(message);
    padded.put_u8(0x80);
    while (padded.len() + LENGTH_FIELD_SIZE) % BLOCK_SIZE != 0 {
        padded.put_u8(0);
    }
    padded.put_u64(bit_len);
    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);

    let blocks = padded
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0u32; BLOCK_WORDS];
            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
                *word = u32::from_be_bytes(bytes.try_into().expect("4-byte chunk"));
            }
            block
        })
        .collect::<Vec<Block>>();

    trace!(
        message_bytes = message.len(),
        blocks = blocks.len(),
        "padded message"
    );

    Ok(blocks)
}

/// Total padded size in bytes for a message of `len` bytes
fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_fills_one_block() {
        let blocks = pad(b"").unwrap();
        assert_eq!(blocks.len(), 1);
        // 0x80 marker, then zeros through the zero length field
        assert_eq!(blocks[0][0], 0x8000_0000);
        assert!(blocks[0][1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_abc_matches_nsa_worked_example() {
        let blocks = pad(b"abc").unwrap();
        assert_eq!(blocks.len(), 1);

        let mut expected = [0u32; 16];
        expected[0] = 0x6162_6380; // "abc" + marker bit
        expected[15] = 0x0000_0018; // 24-bit message
        assert_eq!(blocks[0], expected);
    }

    #[test]
    fn test_two_block_nsa_example() {
        let blocks = pad(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0], 0x6162_6364);
        assert_eq!(blocks[0][14], 0x8000_0000);
        assert_eq!(blocks[1][15], 0x0000_01c0); // 448-bit message
    }

    #[test]
    fn test_448_bit_boundary_adds_full_block() {
        // 56 bytes leave no room for the marker and length field, so the
        // marker closes out block 0 and the padding runs through block 1
        let blocks = pad(&[0xaa; 56]).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][13], 0xaaaa_aaaa);
        assert_eq!(blocks[0][14], 0x8000_0000);
        assert_eq!(blocks[0][15], 0);
        assert!(blocks[1][..15].iter().all(|&w| w == 0));
        assert_eq!(blocks[1][15], 56 * 8);
    }

    #[test]
    fn test_full_block_input_spills() {
        let blocks = pad(&[0u8; 64]).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1][0], 0x8000_0000);
        assert_eq!(blocks[1][15], 512);
    }

    #[test]
    fn test_padded_len_is_block_multiple() {
        for len in [0, 1, 55, 56, 57, 63, 64, 119, 120, 1000] {
            assert_eq!(padded_len(len) % BLOCK_SIZE, 0, "len={len}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: padded length is 0 mod 512 bits and the final
            /// 64 bits hold the original bit length
            #[test]
            fn prop_padding_invariants(message in prop::collection::vec(any::<u8>(), 0..=300)) {
                let blocks = pad(&message).unwrap();
                prop_assert!(!blocks.is_empty());

                let last = blocks.last().unwrap();
                let tail = (u64::from(last[14]) << 32) | u64::from(last[15]);
                prop_assert_eq!(tail, message.len() as u64 * 8);
            }

            /// Property: the message bytes survive padding unchanged
            #[test]
            fn prop_message_prefix_preserved(message in prop::collection::vec(any::<u8>(), 0..=200)) {
                let blocks = pad(&message).unwrap();
                let words: Vec<u32> = blocks.iter().flatten().copied().collect();

                for (i, &byte) in message.iter().enumerate() {
                    let word = words[i / 4];
                    let shift = 24 - 8 * (i % 4) as u32;
                    prop_assert_eq!((word >> shift) as u8, byte);
                }
            }
        }
    }
}
