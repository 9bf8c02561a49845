use anyhow::{Result, bail};
use clap::ArgMatches;

use resistr_client::{PredictionClient, RequestError};

use crate::common::client_config;

/// Execute the health command from CLI
/// # Arguments
/// - matches: matched items from CLAP args
pub async fn run_health(matches: &ArgMatches) -> Result<()> {
    let client = PredictionClient::new(client_config(matches)?)?;

    let health = match client.check_health().await {
        Ok(health) => health,
        Err(err) => bail!("{}", err),
    };

    println!("API:          {}", client.config().base_url());
    println!("Status:       {}", health.status);
    println!("Model loaded: {}", if health.model_loaded { "yes" } else { "no" });

    if !health.model_loaded {
        bail!("{}", RequestError::ServiceUnavailable);
    }
    Ok(())
}
