// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Version Endpoint
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::util::{reply_data, Reply};

/// Get the version of the API
#[get("/version")]
pub fn version() -> Reply {
    reply_data(json!({ "api": env!("CARGO_PKG_VERSION") }))
}
