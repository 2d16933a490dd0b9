// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Endpoints For Toggling Switches
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    auth::User,
    services::switches::{SwitchService, SwitchServiceImpl, SwitchTarget},
    util::{reply_success, Reply}
};
use rocket_contrib::json::Json;

/// Represents an API input containing the state of a switch
#[derive(Deserialize)]
pub struct SwitchInput {
    enabled: bool
}

/// Enable or disable a domain
#[put("/switches/domains/<domain>", data = "<input>")]
pub fn put_domain(
    _auth: User,
    service: SwitchServiceImpl,
    domain: String,
    input: Json<SwitchInput>
) -> Reply {
    service.set_enabled(SwitchTarget::Domain, &domain, input.0.enabled)?;
    reply_success()
}

/// Enable or disable a group
#[put("/switches/groups/<group>", data = "<input>")]
pub fn put_group(
    _auth: User,
    service: SwitchServiceImpl,
    group: String,
    input: Json<SwitchInput>
) -> Reply {
    service.set_enabled(SwitchTarget::Group, &group, input.0.enabled)?;
    reply_success()
}
