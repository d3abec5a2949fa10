//! The SHA-256 compression function
//!
//! Two strictly sequential loops: block `i + 1` reads the state produced by
//! block `i`, and within a block every round reads the working variables of
//! the round before it. Neither loop may be reordered.

use super::consts::K;
use super::padding::Block;
use super::words::{big_sigma0, big_sigma1, ch, maj, small_sigma0, small_sigma1};
use super::{ROUNDS, STATE_WORDS};

/// Expand one block into the 64-word message schedule
///
/// The first 16 entries are the block words; the rest follow the
/// `W[t] = sigma1(W[t-2]) + W[t-7] + sigma0(W[t-15]) + W[t-16]` recurrence,
/// all additions modulo 2^32.
#[must_use]
pub(crate) fn message_schedule(block: &Block) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    w[..16].copy_from_slice(block);
    for t in 16..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Run 64 rounds over one block and fold the result back into `state`
///
/// The working variables start as a copy of `state`; `state` itself is only
/// touched by the additive feed-forward after round 63.
pub(crate) fn compress(state: &mut [u32; STATE_WORDS], block: &Block) {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, var) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(var);
    }
}
