mod catalog;
mod common;
mod health;
mod logging;
mod output;
mod predict;
mod validate;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "resistr";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Predict antibiotic resistance from epitope sequences using a remote prediction service.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)"),
        )
        .subcommand(predict::cli::create_predict_cli())
        .subcommand(validate::cli::create_validate_cli())
        .subcommand(health::cli::create_health_cli())
        .subcommand(catalog::cli::create_samples_cli())
        .subcommand(catalog::cli::create_antibiotics_cli())
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_logging(matches.get_count("verbose"))?;

    match matches.subcommand() {
        //
        // PREDICT
        //
        Some((predict::cli::PREDICT_CMD, matches)) => {
            predict::handlers::run_predict(matches).await?;
        }

        //
        // VALIDATE
        //
        Some((validate::cli::VALIDATE_CMD, matches)) => {
            validate::handlers::run_validate(matches)?;
        }

        //
        // HEALTH
        //
        Some((health::cli::HEALTH_CMD, matches)) => {
            health::handlers::run_health(matches).await?;
        }

        //
        // CATALOG
        //
        Some((catalog::cli::SAMPLES_CMD, _)) => {
            catalog::handlers::run_samples();
        }
        Some((catalog::cli::ANTIBIOTICS_CMD, _)) => {
            catalog::handlers::run_antibiotics();
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_predict_args() {
        let matches = build_parser()
            .try_get_matches_from([
                "resistr",
                "-vv",
                "predict",
                "-s",
                "ESSALAAAQAMASAAAFETA",
                "--max-attempts",
                "5",
                "--csv",
            ])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, predict::cli::PREDICT_CMD);
        assert_eq!(sub.get_one::<u32>("max-attempts"), Some(&5));
        assert_eq!(sub.get_one::<String>("csv").map(String::as_str), Some(""));
        assert!(!sub.get_flag("json"));
    }

    #[rstest]
    fn test_subcommand_required() {
        assert!(build_parser().try_get_matches_from(["resistr"]).is_err());
    }
}
