//! # Client for the antibiotic resistance prediction service
//!
//! - `config` - explicit client configuration (base URL, timeout)
//! - `transport` - the HTTP seam ([`transport::Transport`]) and its `reqwest` implementation
//! - `client` - [`client::PredictionClient`]: one request, one classified outcome
//! - `retry` - bounded exponential-backoff retry
//! - `session` - submission bookkeeping that drops stale results
//!
//! ```rust,no_run
//! use resistr_client::{ClientConfig, PredictionClient, PredictionSession, RetryPolicy};
//! use resistr_client::session::SubmissionOutcome;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PredictionClient::new(ClientConfig::builder().finish()?)?;
//! let session = PredictionSession::new(client, RetryPolicy::default());
//! match session.submit("ESSALAAAQAMASAAAFETA").await {
//!     SubmissionOutcome::Succeeded(result) => println!("{:?}", result.resistant()),
//!     SubmissionOutcome::Rejected(err) => eprintln!("{}", err),
//!     SubmissionOutcome::Failed(err) => eprintln!("{}", err),
//!     SubmissionOutcome::Superseded => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod consts;
pub mod errors;
pub mod retry;
pub mod session;
pub mod transport;

pub use client::{Predict, PredictionClient};
pub use config::ClientConfig;
pub use errors::{ConfigError, RequestError, TransportError};
pub use retry::{RetryPolicy, predict_with_retry};
pub use session::{PredictionSession, PredictionState, SubmissionOutcome};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
