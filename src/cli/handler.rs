// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// CLI Command Handling
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    cli::args::{CliArgs, CliCommand},
    config::Config,
    setup,
    util::Error
};
use structopt::StructOpt;

/// Parse the CLI arguments and run the requested command. Without a command,
/// the API server is started.
pub fn handle_cli() -> Result<(), Error> {
    let args = CliArgs::from_args();

    match args.command {
        Some(CliCommand::CheckConfig) => check_config(&args.config),
        None => setup::start(&args.config)
    }
}

/// Validate the config file and report the result
fn check_config(config_location: &str) -> Result<(), Error> {
    Config::parse(config_location)?;
    println!("{}: OK", config_location);

    Ok(())
}
