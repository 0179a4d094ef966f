//! Solver error types

use thiserror::Error;

/// Errors raised while building a [`Solver`](crate::Solver).
///
/// Searching itself cannot fail; a search either finds a nonce or keeps
/// running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Difficulty must be a positive number of leading zero bits
    #[error("invalid configuration: difficulty must be > 0 (got {difficulty})")]
    InvalidConfiguration { difficulty: u32 },
}
