//! Constants for the prediction client: endpoints, environment variables and
//! retry defaults.

use std::time::Duration;

/// Environment variable name for overriding the prediction API base URL.
///
/// # Example
///
/// ```bash
/// export RESISTR_API=http://localhost:8000
/// ```
pub const RESISTR_API_ENV: &str = "RESISTR_API";

/// Base URL used when neither the builder nor `RESISTR_API` provide one.
pub const DEFAULT_API_BASE_URL: &str = "https://api.predictresistantibiotics.site";

/// Path of the prediction endpoint, relative to the base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the health-check endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/health";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Attempts made by the retry orchestrator before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay before the first retry; doubled for every further retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Message used for a 500 response that carries no `detail`.
pub const DEFAULT_FAULT_MESSAGE: &str = "An error occurred during prediction.";
