use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{DateTime, TimeZone, Utc};
use clap::ArgMatches;
use tracing::info;

use resistr_client::consts::DEFAULT_MAX_ATTEMPTS;
use resistr_client::{PredictionClient, PredictionSession, RetryPolicy, SubmissionOutcome};
use resistr_core::PredictionResult;
use resistr_core::export::{default_csv_filename, write_csv};

use crate::common::client_config;
use crate::output::{prediction_table, summary_text};

/// Calendar date of `now` in UTC, as `YYYY-MM-DD`.
fn export_date<Tz: TimeZone>(now: DateTime<Tz>) -> String {
    now.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Resolve `--csv`: no flag, flag without a path (dated default), or a path.
fn csv_destination(matches: &ArgMatches) -> Option<PathBuf> {
    let value = matches.get_one::<String>("csv")?;
    if value.is_empty() {
        Some(default_csv_filename(&export_date(Utc::now())))
    } else {
        Some(PathBuf::from(value))
    }
}

fn print_result(sequence: &str, result: &PredictionResult, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "epitope_sequence": sequence,
            "predictions": result.to_response().predictions,
            "summary": result.summary(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", prediction_table(result));
        println!("{}", summary_text(result));
    }
    Ok(())
}

/// Execute the predict command from CLI
/// # Arguments
/// - matches: matched items from CLAP args
pub async fn run_predict(matches: &ArgMatches) -> Result<()> {
    let raw = matches
        .get_one::<String>("sequence")
        .expect("A sequence is required");
    let max_attempts = matches
        .get_one::<u32>("max-attempts")
        .copied()
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    let client = PredictionClient::new(client_config(matches)?)?;
    info!(api = client.config().base_url(), max_attempts, "using prediction service");
    let session = PredictionSession::new(client, RetryPolicy::with_max_attempts(max_attempts));

    // live feedback first, so a bad sequence never waits on the network
    let sequence = match session.validate(raw) {
        Ok(sequence) => sequence,
        Err(err) => bail!("{}", err),
    };

    let result = match session.submit(sequence.as_str()).await {
        SubmissionOutcome::Succeeded(result) => result,
        SubmissionOutcome::Rejected(err) => bail!("{}", err),
        SubmissionOutcome::Failed(err) => bail!("{}", err),
        SubmissionOutcome::Superseded => bail!("Prediction was superseded by a newer request"),
    };

    print_result(sequence.as_str(), &result, matches.get_flag("json"))?;

    if let Some(path) = csv_destination(matches) {
        write_csv(&result, &path)?;
        eprintln!("Results written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::cli::create_predict_cli;
    use rstest::*;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["predict", "-s", "SIINFEKL"];
        argv.extend_from_slice(args);
        create_predict_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_csv_destination() {
        assert_eq!(csv_destination(&matches_for(&[])), None);

        let dated = csv_destination(&matches_for(&["--csv"])).unwrap();
        let name = dated.to_string_lossy().into_owned();
        assert!(name.starts_with("antibiotic-resistance-results-"));
        assert!(name.ends_with(".csv"));

        assert_eq!(
            csv_destination(&matches_for(&["--csv", "out.csv"])),
            Some(PathBuf::from("out.csv"))
        );
    }

    #[rstest]
    #[case("2024-03-09T23:30:00-05:00", "2024-03-10")]
    #[case("2024-03-10T00:30:00+02:00", "2024-03-09")]
    #[case("2024-03-10T12:00:00Z", "2024-03-10")]
    fn test_export_date_is_utc(#[case] timestamp: &str, #[case] expected: &str) {
        let now = DateTime::parse_from_rfc3339(timestamp).unwrap();
        assert_eq!(export_date(now), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_sequence_fails_before_network() {
        let matches = create_predict_cli()
            .try_get_matches_from(["predict", "-s", "SIINFEKL123", "--api", "http://127.0.0.1:9"])
            .unwrap();
        let err = run_predict(&matches).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sequence contains invalid characters. Only standard amino acid letters are allowed."
        );
    }
}
