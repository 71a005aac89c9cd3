//! Deadline guard for asynchronous operations.
//!
//! Races an operation against a deadline and resolves with whichever settles
//! first. An elapsed deadline yields the sentinel `None`, never an error; an
//! error from the operation itself propagates unchanged.
//!
//! The plain variants drop the losing future when the deadline wins, which
//! cancels it. [`with_deadline_detached`] instead spawns the operation onto
//! the runtime so it runs to completion unobserved, matching callers that
//! expect a fire-and-forget race where the slow operation is ignored rather
//! than aborted.

use std::future::Future;
use std::time::Duration;

use tokio::time;
use tracing::debug;

/// Default deadline applied when the caller does not specify one.
pub const DEFAULT_DEADLINE_MS: u64 = 8_000;

/// The default deadline as a [`Duration`].
#[must_use]
pub fn default_deadline() -> Duration {
    Duration::from_millis(DEFAULT_DEADLINE_MS)
}

/// Race `op` against `deadline`.
///
/// Returns `Some(value)` if the operation completes first and `None` if the
/// deadline elapses first. The losing operation is dropped (cancelled). A
/// zero deadline still returns the value of an already-ready operation.
pub async fn with_deadline<F, T>(op: F, deadline: Duration) -> Option<T>
where
    F: Future<Output = T>,
{
    match time::timeout(deadline, op).await {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(?deadline, "deadline elapsed");
            None
        }
    }
}

/// Race a fallible `op` against `deadline`.
///
/// Completion maps to `Ok(Some(value))`, an elapsed deadline to `Ok(None)`,
/// and an error from the operation propagates unchanged. The guard itself
/// never produces an error.
///
/// # Errors
///
/// Returns whatever error `op` produced before the deadline elapsed.
pub async fn try_with_deadline<F, T, E>(op: F, deadline: Duration) -> Result<Option<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    match time::timeout(deadline, op).await {
        Ok(Ok(value)) => Ok(Some(value)),
        Ok(Err(err)) => Err(err),
        Err(_) => {
            debug!(?deadline, "deadline elapsed");
            Ok(None)
        }
    }
}

/// Race `op` against `deadline` without cancelling it on timeout.
///
/// The operation is spawned onto the runtime; when the deadline wins, the
/// task keeps running to completion and its result is discarded. A panic
/// inside the operation resurfaces here unchanged.
pub async fn with_deadline_detached<F, T>(op: F, deadline: Duration) -> Option<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::spawn(op);
    match time::timeout(deadline, task).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(join_err)) => {
            if join_err.is_panic() {
                std::panic::resume_unwind(join_err.into_panic());
            }
            // Runtime shutdown cancelled the task; nothing to observe.
            None
        }
        Err(_) => {
            debug!(?deadline, "deadline elapsed, task left running");
            None
        }
    }
}
