//! Async delay helper.
//!
//! Built on the tokio timer: the calling task is suspended, the worker thread
//! is not blocked, and other tasks keep running while the timer is pending.

use std::time::Duration;

use crate::error::{non_negative, UtilError};

/// Suspends the current task for at least `ms` milliseconds.
///
/// Scheduler jitter may lengthen the wait; it never resumes early. A zero
/// duration still yields to the scheduler once before returning.
///
/// There is no cancellation handle. Wrap the call in `tokio::time::timeout`
/// or drop the future to abandon the wait.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let start = std::time::Instant::now();
/// utilkit_common::sleep(20).await;
/// assert!(start.elapsed().as_millis() >= 20);
/// # }
/// ```
pub async fn sleep(ms: u64) {
    tracing::trace!(duration_ms = ms, "Sleeping");

    if ms == 0 {
        // tokio's zero-length sleep may complete on the first poll
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    tracing::trace!(duration_ms = ms, "Sleep finished");
}

/// [`sleep`] for callers holding a signed duration.
///
/// # Errors
///
/// Returns [`UtilError::NegativeInput`] for a negative `ms` without
/// suspending.
pub async fn sleep_checked(ms: i64) -> Result<(), UtilError> {
    let ms = non_negative("duration_ms", ms)?;
    sleep(ms).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_full_duration() {
        let start = Instant::now();
        sleep(250).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn waits_on_wall_clock() {
        let start = std::time::Instant::now();
        sleep(30).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn zero_duration_yields_to_other_tasks() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran_clone = ran.clone();
        let handle = tokio::spawn(async move {
            ran_clone.store(true, Ordering::SeqCst);
        });

        sleep(0).await;

        assert!(ran.load(Ordering::SeqCst), "spawned task should run during sleep(0)");
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_sleeps_overlap() {
        let start = Instant::now();
        tokio::join!(sleep(100), sleep(100), sleep(100));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn checked_accepts_non_negative() {
        let start = Instant::now();
        sleep_checked(40).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));
        sleep_checked(0).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn checked_rejects_negative_without_waiting() {
        let start = Instant::now();
        let err = sleep_checked(-10).await.unwrap_err();
        assert_eq!(err, UtilError::negative("duration_ms", -10));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
