//! Bounded retry for best-effort remote lookups.
//!
//! Price and address lookups share one [`LookupRetryPolicy`]. Only errors
//! reporting [`RetryableLookupError::is_retryable`] are retried; the delay
//! doubles per attempt and is capped at `max_backoff`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Lookup errors that can tell whether another attempt might succeed.
pub trait RetryableLookupError: std::error::Error {
    /// Return whether retrying this error is expected to help.
    fn is_retryable(&self) -> bool;
}

/// Async sleeping abstraction so tests can skip real delays.
#[async_trait]
pub trait LookupSleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl LookupSleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry configuration for remote lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRetryPolicy {
    /// Maximum calls per lookup, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_backoff: Duration,
    /// Upper bound on any single delay.
    pub max_backoff: Duration,
}

impl Default for LookupRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            initial_backoff: Duration::from_millis(50),
            max_backoff: Duration::from_millis(500),
        }
    }
}

impl LookupRetryPolicy {
    /// One call, no retries.
    ///
    /// ```
    /// use vehicles_api::domain::LookupRetryPolicy;
    ///
    /// assert_eq!(LookupRetryPolicy::single_attempt().max_attempts, 1);
    /// ```
    #[must_use]
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = 2_u32.saturating_pow(attempt.saturating_sub(1));
        let base_ms = u64::try_from(self.initial_backoff.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max_backoff.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(u64::from(exponent)).min(max_ms))
    }

    /// Drive `lookup` until it succeeds, fails permanently, or attempts run
    /// out. A `max_attempts` of zero is treated as one.
    pub async fn run<T, E, F, Fut>(&self, sleeper: &dyn LookupSleeper, mut lookup: F) -> Result<T, E>
    where
        E: RetryableLookupError,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match lookup().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt < max_attempts && error.is_retryable() => {
                    let delay = self.backoff_for(attempt);
                    debug!(
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "retrying lookup"
                    );
                    sleeper.sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
