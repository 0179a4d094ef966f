//! # Prefix Proof-of-Work Solver
//!
//! Finds the smallest nonce `n >= 0` such that
//! `SHA-256(prefix || decimal(n))` starts with at least `difficulty` zero bits.
//!
//! ## Message Format
//!
//! ```text
//! message = prefix || nonce
//!           ^^^^^^    ^^^^^
//!           any str   ASCII base-10, no padding ("0", "1", ..., "42", ...)
//! ```
//!
//! The digest is read as a 256-character bit string, byte 0 first and most
//! significant bit first within each byte. A proof is valid when the first
//! `difficulty` characters are `'0'`. Verifiers in any language must use the
//! same rendering for proofs to check out.
//!
//! ## Example
//!
//! ```rust
//! use pow_core::{Solver, SolverConfig, message_digest, meets_difficulty};
//!
//! let solver = Solver::new(SolverConfig::new("abc", 8)).unwrap();
//! let solution = solver.solve();
//!
//! // Anyone can recompute the digest
//! let digest = message_digest("abc", solution.attempts);
//! assert_eq!(digest, solution.digest);
//! assert!(meets_difficulty(&digest, 8));
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! pow-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod digest;
mod error;
mod params;
mod solver;

pub use digest::{NonceHasher, leading_zero_bits, meets_difficulty, message_digest, to_bit_string};
pub use error::SolverError;
pub use params::*;
pub use solver::{Solution, Solver, SolverConfig};
