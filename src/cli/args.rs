// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// CLI Arguments and Options
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use structopt::StructOpt;

/// This defines the arguments that the CLI can be given
#[derive(StructOpt)]
#[structopt(
    name = "pihole-switch-API",
    about = "HTTP API for toggling Pi-hole domain and group blocking.",
    author = ""
)]
pub struct CliArgs {
    /// The location of the API config file
    #[structopt(long = "config", default_value = "/etc/pihole/switch-api.toml")]
    pub config: String,

    #[structopt(subcommand)]
    pub command: Option<CliCommand>
}

/// The commands that the CLI handles
#[derive(StructOpt)]
pub enum CliCommand {
    /// Checks that the config file is valid
    #[structopt(name = "check-config", author = "")]
    CheckConfig
}
