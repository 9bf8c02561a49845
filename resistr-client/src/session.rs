//! Submission bookkeeping for a presentation layer.
//!
//! A [`PredictionSession`] accepts raw user input, validates it, runs the
//! retry orchestrator and keeps the latest outcome. Every submission gets a
//! generation number; a result that comes back after a newer submission has
//! started is dropped instead of overwriting the newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use resistr_core::{CanonicalSequence, PredictionResult, ValidationError, validate};

use super::client::Predict;
use super::errors::RequestError;
use super::retry::{RetryOutcome, RetryPolicy, predict_with_retry_until};

/// What the presentation layer should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PredictionState {
    #[default]
    Idle,
    Pending {
        generation: u64,
    },
    Succeeded(PredictionResult),
    Failed(RequestError),
}

/// Result of a single [`PredictionSession::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The input never left the validator.
    Rejected(ValidationError),
    Succeeded(PredictionResult),
    Failed(RequestError),
    /// A newer submission started before this one finished; its outcome was
    /// discarded.
    Superseded,
}

impl From<Result<PredictionResult, RequestError>> for SubmissionOutcome {
    fn from(result: Result<PredictionResult, RequestError>) -> Self {
        match result {
            Ok(prediction) => SubmissionOutcome::Succeeded(prediction),
            Err(err) => SubmissionOutcome::Failed(err),
        }
    }
}

pub struct PredictionSession<P> {
    predictor: P,
    policy: RetryPolicy,
    generation: AtomicU64,
    state: Mutex<PredictionState>,
}

impl<P: Predict> PredictionSession<P> {
    pub fn new(predictor: P, policy: RetryPolicy) -> Self {
        PredictionSession {
            predictor,
            policy,
            generation: AtomicU64::new(0),
            state: Mutex::new(PredictionState::Idle),
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Synchronous check for live input feedback.
    pub fn validate(&self, raw: &str) -> Result<CanonicalSequence, ValidationError> {
        validate(raw)
    }

    pub fn state(&self) -> PredictionState {
        self.lock_state().clone()
    }

    /// Generation of the most recent submission that passed validation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, PredictionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    ///
    /// Validate `raw` and, if it passes, request a prediction with retry.
    ///
    /// Validation failures are returned straight away, are never retried and
    /// leave the session state untouched. Otherwise the state moves to
    /// `Pending` and then to `Succeeded`/`Failed`, unless a newer submission
    /// started in the meantime.
    ///
    pub async fn submit(&self, raw: &str) -> SubmissionOutcome {
        let sequence = match validate(raw) {
            Ok(sequence) => sequence,
            Err(err) => return SubmissionOutcome::Rejected(err),
        };

        let generation = {
            let mut state = self.lock_state();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = PredictionState::Pending { generation };
            generation
        };
        debug!(generation, residues = sequence.len(), "submitted sequence");

        let is_current = || self.generation.load(Ordering::SeqCst) == generation;
        let result = match predict_with_retry_until(&self.predictor, &sequence, &self.policy, is_current).await {
            RetryOutcome::Completed(result) => result,
            RetryOutcome::Superseded => return SubmissionOutcome::Superseded,
        };

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale prediction outcome");
            return SubmissionOutcome::Superseded;
        }
        *state = match &result {
            Ok(prediction) => PredictionState::Succeeded(prediction.clone()),
            Err(err) => PredictionState::Failed(err.clone()),
        };
        result.into()
    }
}
