//! Message digest and bit-level encoding
//!
//! The message for nonce `n` is `prefix || decimal(n)` where `decimal(n)` is
//! the plain ASCII base-10 rendering (no sign, no padding, `0` is `"0"`).
//! Digests are read as a big-endian bit string: byte 0 first, most
//! significant bit first within each byte.

use alloc::string::String;

use sha2::{Digest, Sha256};

use crate::params::{DIGEST_BITS, DIGEST_SIZE, MAX_NONCE_DIGITS};

/// Reusable hasher for a fixed prefix.
///
/// The SHA-256 state after absorbing the prefix is computed once and cloned
/// for every nonce, so long prefixes are not rehashed on each attempt.
#[derive(Clone)]
pub struct NonceHasher {
    /// Hash state with the prefix already absorbed
    midstate: Sha256,
    /// Scratch space for the decimal nonce
    digits: [u8; MAX_NONCE_DIGITS],
}

impl NonceHasher {
    /// Create a hasher for `prefix`.
    pub fn new(prefix: &[u8]) -> Self {
        Self {
            midstate: Sha256::new_with_prefix(prefix),
            digits: [0u8; MAX_NONCE_DIGITS],
        }
    }

    /// Digest of `prefix || decimal(nonce)`.
    #[inline]
    pub fn digest(&mut self, nonce: u64) -> [u8; DIGEST_SIZE] {
        let mut hasher = self.midstate.clone();
        hasher.update(encode_decimal(nonce, &mut self.digits));
        hasher.finalize().into()
    }
}

/// Convenience function for a single digest.
///
/// For scanning many nonces under the same prefix, prefer [`NonceHasher`].
///
/// ```rust
/// use pow_core::message_digest;
///
/// // SHA-256("abc0")
/// let digest = message_digest("abc", 0);
/// assert_eq!(digest[0], 0x56);
/// ```
pub fn message_digest(prefix: &str, nonce: u64) -> [u8; DIGEST_SIZE] {
    NonceHasher::new(prefix.as_bytes()).digest(nonce)
}

/// Render a digest as 256 `'0'`/`'1'` characters, MSB first, bytes in order.
pub fn to_bit_string(digest: &[u8; DIGEST_SIZE]) -> String {
    let mut bits = String::with_capacity(DIGEST_BITS as usize);
    for byte in digest {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 0 { '0' } else { '1' });
        }
    }
    bits
}

/// Number of leading zero bits in the digest, from 0 to 256.
#[inline]
pub fn leading_zero_bits(digest: &[u8; DIGEST_SIZE]) -> u32 {
    let mut zero_bits = 0u32;

    for byte in digest.iter() {
        if *byte == 0 {
            zero_bits += 8;
        } else {
            zero_bits += byte.leading_zeros();
            break;
        }
    }

    zero_bits
}

/// Check if a digest starts with at least `difficulty` zero bits.
///
/// Equivalent to checking that the first `difficulty` characters of
/// [`to_bit_string`] are all `'0'`. A difficulty above 256 never passes.
///
/// ```rust
/// use pow_core::meets_difficulty;
///
/// // 0x00, 0x0F = 8 + 4 leading zero bits
/// let mut digest = [0xFF; 32];
/// digest[0] = 0x00;
/// digest[1] = 0x0F;
/// assert!(meets_difficulty(&digest, 12));
/// assert!(!meets_difficulty(&digest, 13));
/// ```
#[inline(always)]
pub fn meets_difficulty(digest: &[u8; DIGEST_SIZE], difficulty: u32) -> bool {
    difficulty <= DIGEST_BITS && leading_zero_bits(digest) >= difficulty
}

/// Write the base-10 digits of `n` into the tail of `buf`.
#[inline(always)]
fn encode_decimal(mut n: u64, buf: &mut [u8; MAX_NONCE_DIGITS]) -> &[u8] {
    let mut pos = MAX_NONCE_DIGITS;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[pos..]
}
