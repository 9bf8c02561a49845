use clap::Command;

use crate::common::service_args;

pub const HEALTH_CMD: &str = "health";

pub fn create_health_cli() -> Command {
    Command::new(HEALTH_CMD)
        .about("Check that the prediction service is up and its model is loaded")
        .args(service_args())
}
