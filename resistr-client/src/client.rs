//! Prediction service client.
//!
//! This module provides [`PredictionClient`], which issues exactly one HTTP
//! call per operation and maps the outcome into a [`PredictionResult`] or a
//! [`RequestError`]. Retrying is left to [`crate::retry`].

use async_trait::async_trait;
use tracing::{debug, info, warn};

use resistr_core::{CanonicalSequence, HealthStatus, PredictionRequest, PredictionResult};

use super::config::ClientConfig;
use super::consts::DEFAULT_FAULT_MESSAGE;
use super::errors::{ConfigError, RequestError};
use super::transport::{HttpResponse, ReqwestTransport, Transport};

/// Anything that can turn a canonical sequence into a prediction.
///
/// Implemented by [`PredictionClient`]; the retry orchestrator and sessions
/// are written against this trait so tests can substitute stubs.
#[async_trait]
pub trait Predict: Send + Sync {
    async fn predict(&self, sequence: &CanonicalSequence)
    -> Result<PredictionResult, RequestError>;
}

/// Pull the `detail` string out of an error body, if there is a usable one.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Map a non-2xx response to a [`RequestError`].
pub fn classify_error_status(response: &HttpResponse) -> RequestError {
    match response.status {
        503 => RequestError::ServiceUnavailable,
        500 => RequestError::ServiceFault {
            message: error_detail(&response.body)
                .unwrap_or_else(|| DEFAULT_FAULT_MESSAGE.to_string()),
        },
        status => RequestError::UnexpectedFailure {
            cause: format!("unexpected HTTP status {}", status),
        },
    }
}

///
/// Turn the raw response of `POST /predict` into a result.
///
/// A 2xx response is only a success when its body names every antibiotic.
///
pub fn classify_prediction(response: HttpResponse) -> Result<PredictionResult, RequestError> {
    if !response.is_success() {
        return Err(classify_error_status(&response));
    }
    PredictionResult::from_json(&response.body).map_err(|e| RequestError::UnexpectedFailure {
        cause: format!("malformed prediction response: {}", e),
    })
}

/// Turn the raw response of `GET /health` into a [`HealthStatus`].
pub fn classify_health(response: HttpResponse) -> Result<HealthStatus, RequestError> {
    if !response.is_success() {
        return Err(classify_error_status(&response));
    }
    serde_json::from_str(&response.body).map_err(|e| RequestError::UnexpectedFailure {
        cause: format!("malformed health response: {}", e),
    })
}

/// Client for the antibiotic resistance prediction service.
///
/// # Examples
///
/// ```rust,no_run
/// use resistr_client::client::PredictionClient;
/// use resistr_client::config::ClientConfig;
/// use resistr_core::validate;
///
/// # async fn run() -> anyhow::Result<()> {
/// let client = PredictionClient::new(ClientConfig::builder().finish()?)?;
/// let sequence = validate("ESSALAAAQAMASAAAFETA")?;
/// let result = client.predict_once(&sequence).await?;
/// println!("{}% resistant", result.summary().percentage);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PredictionClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl PredictionClient<ReqwestTransport> {
    /// Creates a client that talks HTTP through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(PredictionClient { config, transport })
    }
}

impl<T: Transport> PredictionClient<T> {
    /// Creates a client on top of a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        PredictionClient { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    ///
    /// Send one prediction request. No retry.
    ///
    /// # Arguments
    /// - sequence: a validated sequence
    ///
    /// # Returns
    /// - a complete prediction, or the classified failure
    ///
    pub async fn predict_once(
        &self,
        sequence: &CanonicalSequence,
    ) -> Result<PredictionResult, RequestError> {
        let url = self.config.predict_url();
        let request = PredictionRequest::new(sequence.clone());
        debug!(url = %url, residues = sequence.len(), "sending prediction request");

        let outcome = self
            .transport
            .post_json(&url, &request.to_json())
            .await
            .map_err(RequestError::from)
            .and_then(|response| {
                if !response.is_success() {
                    warn!(status = response.status, body = %response.body, "prediction service returned an error");
                }
                classify_prediction(response)
            });

        match &outcome {
            Ok(result) => info!(
                resistant = result.summary().resistant,
                "prediction completed"
            ),
            Err(e) => warn!(error = %e, cause = e.cause(), "prediction request failed"),
        }
        outcome
    }

    /// Ask the service whether it is up and has its model loaded.
    pub async fn check_health(&self) -> Result<HealthStatus, RequestError> {
        let url = self.config.health_url();
        debug!(url = %url, "checking service health");
        let response = self.transport.get(&url).await.map_err(|e| {
            warn!(error = %e, "health check failed");
            RequestError::from(e)
        })?;
        classify_health(response)
    }
}

#[async_trait]
impl<T: Transport> Predict for PredictionClient<T> {
    async fn predict(
        &self,
        sequence: &CanonicalSequence,
    ) -> Result<PredictionResult, RequestError> {
        self.predict_once(sequence).await
    }
}
