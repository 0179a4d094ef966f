//! Solver constants
//!
//! Fixed by the digest function and the nonce encoding; any party verifying
//! a proof must use the same values.

/// SHA-256 output size in bytes
pub const DIGEST_SIZE: usize = 32;

/// SHA-256 output size in bits (length of the rendered bit string)
pub const DIGEST_BITS: u32 = (DIGEST_SIZE as u32) * 8;

/// Longest decimal rendering of a `u64` nonce (`18446744073709551615`)
pub const MAX_NONCE_DIGITS: usize = 20;

/// Smallest accepted difficulty
pub const MIN_DIFFICULTY: u32 = 1;
