use thiserror::Error;

///
/// Failure of a prediction or health-check call, classified once at the HTTP
/// boundary.
///
/// The `Display` output is the message shown to the user; the `cause` fields
/// keep the low-level reason for logs.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("The prediction model is not loaded. Please try again later.")]
    ServiceUnavailable,

    #[error("{message}")]
    ServiceFault { message: String },

    #[error("Network error. Please check your connection and try again.")]
    NetworkFailure { cause: String },

    #[error("An unexpected error occurred.")]
    UnexpectedFailure { cause: String },
}

impl RequestError {
    /// Low-level reason behind the user-facing message.
    pub fn cause(&self) -> &str {
        match self {
            RequestError::ServiceUnavailable => "service reported the model is not loaded",
            RequestError::ServiceFault { message } => message,
            RequestError::NetworkFailure { cause } => cause,
            RequestError::UnexpectedFailure { cause } => cause,
        }
    }
}

/// Failure below HTTP status handling: nothing usable came back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request went out (or was attempted) but no response arrived:
    /// timeout, refused connection, DNS failure, reset, truncated body.
    #[error("No response received: {0}")]
    NoResponse(String),

    /// The request could not be built or sent at all.
    #[error("Failed to send request: {0}")]
    Request(String),
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(cause) => RequestError::NetworkFailure { cause },
            TransportError::Request(cause) => RequestError::UnexpectedFailure { cause },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Can't create HTTP client: {0}")]
    HttpClient(String),
}
