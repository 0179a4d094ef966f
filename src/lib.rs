//! Prefix Proof-of-Work Solver Library
//!
//! Solves hashcash-style challenges: find the smallest nonce such that
//! `SHA-256(prefix || decimal(nonce))` starts with `difficulty` zero bits.
//!
//! # Overview
//!
//! The search itself lives in [`pow_core`] and is re-exported as
//! [`solver`]. This crate adds what an embedding service needs around it:
//!
//! - **Deadlines**: [`solve_with_timeout`] runs the search on tokio's
//!   blocking pool and stops it when time runs out
//! - **Cancellation**: [`SolveTask`] exposes the search's cancel flag
//! - **Reports**: [`SolutionReport`] renders a solution as text or JSON
//!
//! # Example
//!
//! ```rust
//! use pow::{Solver, SolverConfig, SolutionReport};
//! use std::time::Instant;
//!
//! let config = SolverConfig::new("abc", 8);
//! let solver = Solver::new(config.clone()).unwrap();
//!
//! let start = Instant::now();
//! let solution = solver.solve();
//! let report = SolutionReport::new(&config, &solution, start.elapsed());
//!
//! assert_eq!(report.attempts, 252);
//! assert!(report.digest_hex.starts_with("00"));
//! ```

// Re-export the core solver
pub use pow_core as solver;

pub mod report;
pub mod task;

// Convenience re-exports
pub use report::SolutionReport;
pub use solver::{Solution, Solver, SolverConfig, SolverError};
pub use task::{solve_with_timeout, SolveTask, TaskError};
