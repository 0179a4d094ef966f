//! Deadline and cancellation wrapper around the blocking solver
//!
//! The core search is synchronous. These helpers move it onto tokio's
//! blocking pool and stop it through a shared flag, so async callers can
//! bound how long a challenge may take.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pow_core::{Solution, Solver};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

/// Errors from a solver running as a task
#[derive(Debug, Error)]
pub enum TaskError {
    /// The cancel flag was raised before a solution was found
    #[error("search cancelled")]
    Cancelled,

    /// The deadline passed before a solution was found
    #[error("no solution within {0:?}")]
    TimedOut(Duration),

    /// The blocking thread panicked or was aborted
    #[error("solver task failed: {0}")]
    Join(#[from] JoinError),
}

/// A search running on the blocking pool.
///
/// Must be spawned from inside a tokio runtime. Dropping the task cancels
/// the search, which then stops before its next attempt.
#[derive(Debug)]
pub struct SolveTask {
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<Option<Solution>>,
}

impl SolveTask {
    /// Start searching with a fresh cancel flag.
    pub fn spawn(solver: Solver) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        debug!(
            prefix = solver.prefix(),
            difficulty = solver.difficulty(),
            "spawning solver task"
        );
        let handle = tokio::task::spawn_blocking(move || solver.solve_until(&flag));

        Self { cancel, handle }
    }

    /// Ask the search to stop. It halts before its next attempt.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Shared flag that cancels this task when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Wait for the search to finish.
    pub async fn join(mut self) -> Result<Solution, TaskError> {
        (&mut self.handle).await?.ok_or(TaskError::Cancelled)
    }
}

impl Drop for SolveTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run a search with a deadline.
///
/// On expiry the search is cancelled and its thread is awaited before
/// returning. A solution that lands while the task is being stopped is
/// still returned. Dropping the future early cancels the search as well.
///
/// ```rust
/// use std::time::Duration;
/// use pow::{solve_with_timeout, Solver, SolverConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let solver = Solver::new(SolverConfig::new("abc", 8)).unwrap();
/// let solution = solve_with_timeout(solver, Duration::from_secs(30)).await.unwrap();
/// assert_eq!(solution.attempts, 252);
/// # }
/// ```
pub async fn solve_with_timeout(solver: Solver, deadline: Duration) -> Result<Solution, TaskError> {
    let mut task = SolveTask::spawn(solver);

    match tokio::time::timeout(deadline, &mut task.handle).await {
        Ok(joined) => joined?.ok_or(TaskError::Cancelled),
        Err(_) => {
            warn!(?deadline, "deadline reached, cancelling search");
            task.cancel();
            match (&mut task.handle).await? {
                Some(solution) => Ok(solution),
                None => Err(TaskError::TimedOut(deadline)),
            }
        }
    }
}
