//! Tracing setup for the command line.
//!
//! Logs go to stderr so that stdout only carries results.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging system.
///
/// # Arguments
///
/// * `verbosity` - Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4+=trace)
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "resistr={},resistr_core={},resistr_client={}",
            level, level, level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 3)
                .with_file(verbosity >= 4)
                .with_line_number(verbosity >= 4),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0, "error")]
    #[case(1, "warn")]
    #[case(2, "info")]
    #[case(3, "debug")]
    #[case(9, "trace")]
    fn test_levels(#[case] verbosity: u8, #[case] expected: &str) {
        assert_eq!(level_for(verbosity), expected);
    }
}
