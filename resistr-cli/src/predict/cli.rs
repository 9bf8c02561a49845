use clap::{Arg, ArgAction, Command, value_parser};

use crate::common::service_args;

pub const PREDICT_CMD: &str = "predict";

pub fn create_predict_cli() -> Command {
    Command::new(PREDICT_CMD)
        .about("Predict antibiotic resistance for an epitope sequence")
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .short('s')
                .required(true)
                .help("Epitope sequence (20 standard amino-acid letters, 5-5000 residues)"),
        )
        .args(service_args())
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .short('n')
                .value_parser(value_parser!(u32))
                .help("Number of attempts before giving up [default: 3]"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .num_args(0..=1)
                .default_missing_value("")
                .help("Also write the results as CSV (default name: antibiotic-resistance-results-<date>.csv)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON instead of a table"),
        )
}
