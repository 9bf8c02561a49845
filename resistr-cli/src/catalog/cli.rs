use clap::Command;

pub const SAMPLES_CMD: &str = "samples";
pub const ANTIBIOTICS_CMD: &str = "antibiotics";

pub fn create_samples_cli() -> Command {
    Command::new(SAMPLES_CMD).about("List example epitope sequences to try")
}

pub fn create_antibiotics_cli() -> Command {
    Command::new(ANTIBIOTICS_CMD).about("List the antibiotics covered by a prediction")
}
