use clap::{Arg, Command};

pub const VALIDATE_CMD: &str = "validate";

pub fn create_validate_cli() -> Command {
    Command::new(VALIDATE_CMD)
        .about("Check an epitope sequence without contacting the prediction service")
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .short('s')
                .required(true)
                .help("Epitope sequence to check"),
        )
}
