// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Config File Structure
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod database;
mod general;
mod restart;
mod root_config;

pub use self::{
    database::Database, general::General, restart::RestartConfig, root_config::Config
};
