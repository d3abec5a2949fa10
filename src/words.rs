//! 32-bit word operations
//!
//! The mixing primitives of FIPS 180-4 §4.1.2. All of them are pure and
//! total over well-formed inputs; the shift and rotation amounts carry a
//! hard precondition of `0 <= n < 32`, asserted rather than silently
//! wrapped, since a bad amount would produce a plausible-looking but wrong
//! digest.

/// Rotate right (circular right shift) by `n` bits.
///
/// # Panics
///
/// Panics if `n >= 32`.
#[inline]
#[must_use]
pub fn rotr(x: u32, n: u32) -> u32 {
    assert!(n < 32, "rotation amount out of range: {n}");
    x.rotate_right(n)
}

/// Logical right shift by `n` bits, zero-filled.
///
/// # Panics
///
/// Panics if `n >= 32`.
#[inline]
#[must_use]
pub fn shr(x: u32, n: u32) -> u32 {
    assert!(n < 32, "shift amount out of range: {n}");
    x >> n
}

/// Choose: each bit of `x` selects the bit of `y` (1) or `z` (0)
#[inline]
#[must_use]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Majority vote per bit position
#[inline]
#[must_use]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Sigma-0 state mixing: `ROTR2 ^ ROTR13 ^ ROTR22`
#[inline]
#[must_use]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Sigma-1 state mixing: `ROTR6 ^ ROTR11 ^ ROTR25`
#[inline]
#[must_use]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// sigma-0 schedule mixing: `ROTR7 ^ ROTR18 ^ SHR3`
#[inline]
#[must_use]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// sigma-1 schedule mixing: `ROTR17 ^ ROTR19 ^ SHR10`
#[inline]
#[must_use]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}
