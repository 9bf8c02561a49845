//! Explicit client configuration.
//!
//! A [`ClientConfig`] is built once by whoever composes the application and
//! handed to [`crate::client::PredictionClient`]; there is no process-wide
//! client state.

use std::env;
use std::time::Duration;

use super::consts::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT, HEALTH_PATH, PREDICT_PATH, RESISTR_API_ENV};
use super::errors::ConfigError;

/// Get default API base URL from environment variable, falling back to the
/// public prediction service.
///
/// # Returns
/// - base url of the prediction API
pub fn get_default_api_base_url() -> String {
    base_url_or_default(env::var(RESISTR_API_ENV).ok())
}

fn base_url_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Builder for constructing a [`ClientConfig`].
///
/// # Examples
///
/// ```rust
/// use resistr_client::config::ClientConfig;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), resistr_client::errors::ConfigError> {
/// let config = ClientConfig::builder()
///     .with_base_url("http://localhost:8000/".to_string())
///     .with_timeout(Duration::from_secs(5))
///     .finish()?;
/// assert_eq!(config.predict_url(), "http://localhost:8000/predict");
/// # Ok(())
/// # }
/// ```
#[derive(Default, Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Creates a new, empty ClientConfigBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a ClientConfig.
    pub fn finish(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self.base_url.unwrap_or_else(get_default_api_base_url);
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(ClientConfig { base_url, timeout })
    }
}

/// Where the prediction service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("http://localhost:8000", "http://localhost:8000/predict")]
    #[case("http://localhost:8000/", "http://localhost:8000/predict")]
    #[case("  https://example.org/api//  ", "https://example.org/api/predict")]
    fn test_urls(#[case] base: &str, #[case] expected: &str) {
        let config = ClientConfig::builder()
            .with_base_url(base.to_string())
            .finish()
            .unwrap();
        assert_eq!(config.predict_url(), expected);
        assert!(config.health_url().ends_with("/health"));
    }

    #[rstest]
    fn test_defaults() {
        let config = ClientConfig::builder()
            .with_base_url(DEFAULT_API_BASE_URL.to_string())
            .finish()
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.base_url(), "https://api.predictresistantibiotics.site");
    }

    #[rstest]
    #[case("")]
    #[case(" / ")]
    fn test_empty_base_url(#[case] base: &str) {
        let err = ClientConfig::builder()
            .with_base_url(base.to_string())
            .finish()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyBaseUrl);
    }

    #[rstest]
    fn test_env_base_url_goes_through_finish() {
        assert_eq!(base_url_or_default(None), DEFAULT_API_BASE_URL);
        assert_eq!(base_url_or_default(Some("  ".to_string())), DEFAULT_API_BASE_URL);

        // a lone slash from the environment is still rejected
        let err = ClientConfig::builder()
            .with_base_url(base_url_or_default(Some("/".to_string())))
            .finish()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyBaseUrl);
    }

    #[rstest]
    fn test_zero_timeout() {
        let err = ClientConfig::builder()
            .with_base_url("http://localhost".to_string())
            .with_timeout(Duration::ZERO)
            .finish()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }
}
