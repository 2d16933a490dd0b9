// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// DNS Restart Endpoint
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    auth::User,
    services::restart::{RestartService, RestartServiceImpl},
    util::{reply_success, Reply}
};
use rocket_contrib::json::Json;

/// Represents an API input for the DNS restart action
#[derive(Deserialize, Default)]
pub struct RestartInput {
    restart_url: Option<String>,
    restart_auth: Option<String>
}

/// Restart the DNS server inside its container. Parameters given in the body
/// take precedence over the `[restart]` config section.
#[post("/dns/restart", data = "<input>")]
pub fn restart_dns(
    _auth: User,
    service: RestartServiceImpl,
    input: Option<Json<RestartInput>>
) -> Reply {
    let input = input.map(|json| json.0).unwrap_or_default();

    service.restart_dns(
        input.restart_url.as_ref().map(String::as_str),
        input.restart_auth.as_ref().map(String::as_str)
    )?;
    reply_success()
}
