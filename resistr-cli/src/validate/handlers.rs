use anyhow::{Result, bail};
use clap::ArgMatches;

use resistr_core::{residue_count, validate};

/// Execute the validate command from CLI
/// # Arguments
/// - matches: matched items from CLAP args
pub fn run_validate(matches: &ArgMatches) -> Result<()> {
    let raw = matches
        .get_one::<String>("sequence")
        .expect("A sequence is required");

    match validate(raw) {
        Ok(sequence) => {
            println!("{}", sequence);
            println!("{} aa", sequence.len());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} aa recognised", residue_count(raw));
            bail!("{}", err)
        }
    }
}
