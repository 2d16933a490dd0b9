// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Switch Endpoints
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod get_switches;
mod set_switch;
mod status;

pub use self::get_switches::*;
pub use self::set_switch::*;
pub use self::status::*;
