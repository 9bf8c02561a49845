use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, value_parser};

use resistr_client::config::ClientConfig;

/// `--api` and `--timeout`, shared by every command that talks to the service.
pub fn service_args() -> [Arg; 2] {
    [
        Arg::new("api")
            .long("api")
            .short('a')
            .help("Prediction API base URL (defaults to $RESISTR_API or the public service)"),
        Arg::new("timeout")
            .long("timeout")
            .short('t')
            .value_parser(value_parser!(u64))
            .help("Request timeout in seconds [default: 30]"),
    ]
}

/// Build the client configuration from `--api` / `--timeout`.
pub fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    let mut builder = ClientConfig::builder();
    if let Some(api) = matches.get_one::<String>("api") {
        builder = builder.with_base_url(api.clone());
    }
    if let Some(secs) = matches.get_one::<u64>("timeout") {
        builder = builder.with_timeout(Duration::from_secs(*secs));
    }
    builder.finish().context("Invalid client configuration")
}
