// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Gravity Database Support
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod model;
mod schema;

#[cfg(test)]
mod testing;

pub use self::{model::*, schema::*};

#[cfg(test)]
pub use self::testing::*;
