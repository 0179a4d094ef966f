//! Brute-force nonce search
//!
//! Nonces are tried in strictly increasing order starting at 0, so the first
//! hit is also the smallest valid nonce. Every search restarts from 0 and
//! keeps no state between calls; the same config always yields the same
//! solution.

use alloc::string::String;
use core::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, instrument};

use crate::digest::{NonceHasher, meets_difficulty, to_bit_string};
use crate::error::SolverError;
use crate::params::{DIGEST_SIZE, MIN_DIFFICULTY};

/// Challenge parameters: the prefix every message starts with and the
/// required number of leading zero bits.
///
/// Difficulties above 256 are accepted; no digest can satisfy them, so an
/// unbounded search on such a config never returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Message prefix (may be empty)
    pub prefix: String,
    /// Required leading zero bits (must be > 0)
    pub difficulty: u32,
}

impl SolverConfig {
    /// Create a config from any string-like prefix.
    pub fn new(prefix: impl Into<String>, difficulty: u32) -> Self {
        Self {
            prefix: prefix.into(),
            difficulty,
        }
    }
}

/// A winning nonce and the digest it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The winning nonce, which is also the number of failed attempts before it
    pub attempts: u64,
    /// SHA-256 of `prefix || decimal(attempts)`
    pub digest: [u8; DIGEST_SIZE],
    /// `digest` as 256 `'0'`/`'1'` characters
    pub digest_bits: String,
}

impl Solution {
    fn new(attempts: u64, digest: [u8; DIGEST_SIZE]) -> Self {
        Self {
            attempts,
            digest_bits: to_bit_string(&digest),
            digest,
        }
    }
}

/// Proof-of-work solver
///
/// Holds an immutable, validated copy of its [`SolverConfig`]. Solvers are
/// plain values: clone them, send them to other threads, or run several at
/// once with no coordination.
///
/// # Example
///
/// ```rust
/// use pow_core::{Solver, SolverConfig};
///
/// let solver = Solver::new(SolverConfig::new("abc", 8)).unwrap();
/// let solution = solver.solve();
///
/// assert_eq!(solution.attempts, 252);
/// assert!(solution.digest_bits.starts_with("00000000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Validate `config` and build a solver.
    ///
    /// Fails with [`SolverError::InvalidConfiguration`] when the difficulty
    /// is zero. The prefix is not checked.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        if config.difficulty < MIN_DIFFICULTY {
            return Err(SolverError::InvalidConfiguration {
                difficulty: config.difficulty,
            });
        }

        debug!(
            prefix = %config.prefix,
            difficulty = config.difficulty,
            "solver configured"
        );
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Message prefix.
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Required leading zero bits.
    pub fn difficulty(&self) -> u32 {
        self.config.difficulty
    }

    /// Search until a valid nonce is found.
    ///
    /// Blocks the calling thread. With a difficulty above 256 this never
    /// returns; use [`Solver::solve_within`] or [`Solver::solve_until`] to
    /// bound the search.
    #[instrument(level = "debug", skip_all, fields(difficulty = self.config.difficulty))]
    pub fn solve(&self) -> Solution {
        // `scan` only stops when `proceed` does
        loop {
            if let Some(solution) = self.scan(|_| true) {
                return solution;
            }
        }
    }

    /// Search nonces `0..max_attempts`.
    ///
    /// Returns the same solution as [`Solver::solve`] when it lies inside
    /// the range, `None` otherwise.
    #[instrument(level = "debug", skip_all, fields(difficulty = self.config.difficulty, max_attempts = max_attempts))]
    pub fn solve_within(&self, max_attempts: u64) -> Option<Solution> {
        let found = self.scan(|nonce| nonce < max_attempts);
        if found.is_none() {
            debug!(max_attempts, "search exhausted");
        }
        found
    }

    /// Search until a valid nonce is found or `cancel` is set.
    ///
    /// The flag is read before every attempt, so a cancelled search stops
    /// within one hash of the flag being raised.
    #[instrument(level = "debug", skip_all, fields(difficulty = self.config.difficulty))]
    pub fn solve_until(&self, cancel: &AtomicBool) -> Option<Solution> {
        let found = self.scan(|_| !cancel.load(Ordering::Relaxed));
        if found.is_none() {
            debug!("search cancelled");
        }
        found
    }

    /// Scan upward from 0 while `proceed(nonce)` holds, wrapping at `u64::MAX`.
    fn scan(&self, mut proceed: impl FnMut(u64) -> bool) -> Option<Solution> {
        let mut hasher = NonceHasher::new(self.config.prefix.as_bytes());
        let mut nonce: u64 = 0;

        while proceed(nonce) {
            let digest = hasher.digest(nonce);
            if meets_difficulty(&digest, self.config.difficulty) {
                debug!(attempts = nonce, "solution found");
                return Some(Solution::new(nonce, digest));
            }
            nonce = nonce.wrapping_add(1);
        }

        None
    }
}
