//! Polling coordinator — waits for an asynchronous server-side job.
//!
//! A poll loop issues one status check per attempt, strictly sequentially,
//! and sleeps a constant delay between attempts. There is no backoff and no
//! jitter. Transport errors abort the loop immediately; only a still-pending
//! snapshot leads to another attempt.

#[cfg(feature = "http")]
use crate::error::{JobKind, PollError, SdkError};

#[cfg(feature = "http")]
use std::future::Future;
use std::time::Duration;

/// Classification of one status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Pending,
    Completed,
    Failed,
}

/// A status response the coordinator knows how to classify.
pub trait JobSnapshot {
    fn outcome(&self) -> PollOutcome;
}

/// Attempt budget and constant delay for a poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Total number of status checks, including the first.
    pub max_attempts: u32,
    /// Delay between consecutive status checks.
    pub delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::generation()
    }
}

impl PollConfig {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Single publication generation: 60 attempts, 5s apart.
    pub fn generation() -> Self {
        Self::new(60, Duration::from_secs(5))
    }

    /// Bulk generation: 120 attempts, 10s apart.
    pub fn bulk_generation() -> Self {
        Self::new(120, Duration::from_secs(10))
    }

    /// Company website parsing: 60 attempts, 5s apart.
    pub fn company_parsing() -> Self {
        Self::new(60, Duration::from_secs(5))
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Upper bound on time spent sleeping, excluding the requests themselves.
    pub fn total_delay(&self) -> Duration {
        self.delay * self.max_attempts.saturating_sub(1)
    }
}

/// Run `check` until its snapshot is terminal or the attempt budget is spent.
///
/// Returns the completed snapshot, [`PollError::Failed`] on a failed snapshot,
/// or [`PollError::Timeout`] after `config.max_attempts` pending snapshots. No
/// delay follows the last attempt.
#[cfg(feature = "http")]
pub async fn poll_until_done<T, F, Fut>(
    kind: JobKind,
    config: PollConfig,
    mut check: F,
) -> Result<T, SdkError>
where
    T: JobSnapshot,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SdkError>>,
{
    for attempt in 0..config.max_attempts {
        let snapshot = check().await?;
        let outcome = snapshot.outcome();

        tracing::debug!(
            job = %kind,
            attempt = attempt + 1,
            max = config.max_attempts,
            outcome = ?outcome,
            "Polled job status"
        );

        match outcome {
            PollOutcome::Completed => return Ok(snapshot),
            PollOutcome::Failed => {
                tracing::warn!(job = %kind, attempt = attempt + 1, "Job failed");
                return Err(PollError::Failed(kind).into());
            }
            PollOutcome::Pending => {
                if attempt + 1 < config.max_attempts {
                    futures_timer::Delay::new(config.delay).await;
                }
            }
        }
    }

    tracing::warn!(job = %kind, attempts = config.max_attempts, "Job did not finish in time");
    Err(PollError::Timeout(kind).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "http")]
    use crate::error::HttpError;
    #[cfg(feature = "http")]
    use std::cell::Cell;
    #[cfg(feature = "http")]
    use std::collections::VecDeque;
    #[cfg(feature = "http")]
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Snap(PollOutcome, u32);

    impl JobSnapshot for Snap {
        fn outcome(&self) -> PollOutcome {
            self.0
        }
    }

    fn fast(max_attempts: u32) -> PollConfig {
        PollConfig::new(max_attempts, Duration::from_millis(1))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PollConfig::generation(), PollConfig::new(60, Duration::from_secs(5)));
        assert_eq!(
            PollConfig::bulk_generation(),
            PollConfig::new(120, Duration::from_secs(10))
        );
        assert_eq!(PollConfig::default(), PollConfig::generation());
    }

    #[test]
    fn test_total_delay() {
        assert_eq!(PollConfig::new(3, Duration::from_millis(100)).total_delay(), Duration::from_millis(200));
        assert_eq!(PollConfig::new(0, Duration::from_millis(100)).total_delay(), Duration::ZERO);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_completes_on_second_attempt() {
        let script = Mutex::new(VecDeque::from(vec![
            Snap(PollOutcome::Pending, 1),
            Snap(PollOutcome::Completed, 2),
        ]));
        let calls = Cell::new(0);

        let result = poll_until_done(JobKind::Generation, fast(2), || {
            calls.set(calls.get() + 1);
            let next = script.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, SdkError>(next) }
        })
        .await
        .unwrap();

        assert_eq!(result, Snap(PollOutcome::Completed, 2));
        assert_eq!(calls.get(), 2);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_failure_stops_immediately() {
        let calls = Cell::new(0);

        let err = poll_until_done(JobKind::Generation, fast(10), || {
            calls.set(calls.get() + 1);
            async { Ok::<_, SdkError>(Snap(PollOutcome::Failed, 0)) }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Poll(PollError::Failed(JobKind::Generation))));
        assert_eq!(err.to_string(), "Generation failed");
        assert_eq!(calls.get(), 1);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_timeout_after_exact_attempts() {
        let calls = Cell::new(0);

        let err = poll_until_done(JobKind::BulkGeneration, fast(4), || {
            calls.set(calls.get() + 1);
            async { Ok::<_, SdkError>(Snap(PollOutcome::Pending, 0)) }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Poll(PollError::Timeout(JobKind::BulkGeneration))));
        assert_eq!(calls.get(), 4);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_zero_attempts_times_out_without_checking() {
        let calls = Cell::new(0);

        let err = poll_until_done(JobKind::Generation, fast(0), || {
            calls.set(calls.get() + 1);
            async { Ok::<_, SdkError>(Snap(PollOutcome::Completed, 0)) }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Poll(PollError::Timeout(_))));
        assert_eq!(calls.get(), 0);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_transport_error_aborts_loop() {
        let calls = Cell::new(0);

        let err = poll_until_done(JobKind::Generation, fast(5), || {
            calls.set(calls.get() + 1);
            async {
                Err::<Snap, _>(SdkError::Http(HttpError::Status {
                    status: 502,
                    message: "HTTP 502: Bad Gateway".to_string(),
                }))
            }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Http(_)));
        assert_eq!(calls.get(), 1);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_no_sleep_after_last_attempt() {
        let config = PollConfig::new(1, Duration::from_secs(30));
        let started = std::time::Instant::now();

        let err = poll_until_done(JobKind::Generation, config, || async {
            Ok::<_, SdkError>(Snap(PollOutcome::Pending, 0))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SdkError::Poll(PollError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
