//! Bounded exponential-backoff retry around a [`Predict`] implementation.
//!
//! Every [`RequestError`] is retried the same way; the error of the last
//! attempt is the one reported. There is no jitter and no circuit breaker.

use std::time::Duration;

use tracing::{debug, warn};

use resistr_core::{CanonicalSequence, PredictionResult};

use super::client::Predict;
use super::consts::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS};
use super::errors::RequestError;

/// How many times to call the service and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn with_max_attempts(max_attempts: u32) -> Self {
        RetryPolicy::new(max_attempts, DEFAULT_BASE_DELAY)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Wait after the failed attempt `attempt_index` (0-based):
    /// `base_delay * 2^attempt_index`.
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt_index))
    }

    /// All waits of a run that fails every attempt, in order.
    pub fn delays(&self) -> Vec<Duration> {
        (0..self.max_attempts - 1).map(|i| self.delay_for(i)).collect()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

/// How a retry run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    /// Success, or the error of the final attempt.
    Completed(Result<PredictionResult, RequestError>),
    /// The caller reported the run as stale before an attempt; no further
    /// requests were made.
    Superseded,
}

///
/// Call `predictor` up to `policy.max_attempts()` times, sleeping
/// `policy.delay_for(i)` after the failed attempt `i` unless it was the last.
///
/// # Returns
/// - the first success, or the error of the last attempt
///
pub async fn predict_with_retry<P: Predict + ?Sized>(
    predictor: &P,
    sequence: &CanonicalSequence,
    policy: &RetryPolicy,
) -> Result<PredictionResult, RequestError> {
    match predict_with_retry_until(predictor, sequence, policy, || true).await {
        RetryOutcome::Completed(result) => result,
        RetryOutcome::Superseded => unreachable!("a run that is always current cannot be superseded"),
    }
}

///
/// Same loop as [`predict_with_retry`], but `is_current` is checked before
/// every attempt. As soon as it returns false the run stops and reports
/// [`RetryOutcome::Superseded`]. A request already in flight is not aborted.
///
pub async fn predict_with_retry_until<P, F>(
    predictor: &P,
    sequence: &CanonicalSequence,
    policy: &RetryPolicy,
    is_current: F,
) -> RetryOutcome
where
    P: Predict + ?Sized,
    F: Fn() -> bool,
{
    let mut attempt = 0;
    loop {
        if !is_current() {
            debug!(attempt, "submission superseded, dropping remaining attempts");
            return RetryOutcome::Superseded;
        }

        let err = match predictor.predict(sequence).await {
            Ok(result) => return RetryOutcome::Completed(Ok(result)),
            Err(err) => err,
        };

        if attempt + 1 >= policy.max_attempts() {
            warn!(attempts = policy.max_attempts(), error = %err, "giving up on prediction");
            return RetryOutcome::Completed(Err(err));
        }

        let delay = policy.delay_for(attempt);
        warn!(
            attempt = attempt + 1,
            max_attempts = policy.max_attempts(),
            error = %err,
            delay_ms = delay.as_millis() as u64,
            "prediction attempt failed, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
