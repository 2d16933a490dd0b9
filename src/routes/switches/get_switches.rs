// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Endpoints For Listing Switches
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    services::switches::{SwitchService, SwitchServiceImpl, SwitchTarget},
    util::{reply_result, Reply}
};

/// Get the domain switches
#[get("/switches/domains")]
pub fn get_domains(service: SwitchServiceImpl) -> Reply {
    reply_result(service.names(SwitchTarget::Domain))
}

/// Get the group switches
#[get("/switches/groups")]
pub fn get_groups(service: SwitchServiceImpl) -> Reply {
    reply_result(service.names(SwitchTarget::Group))
}

#[cfg(test)]
mod test {
    use crate::testing::TestBuilder;

    /// Every domain is listed, as often as it appears in the table
    #[test]
    fn test_get_domains() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/domains")
            .expect_json(json!([
                "ads.example.com",
                "telemetry.example.net",
                "cdn.example.org",
                "twice.example.com",
                "twice.example.com"
            ]))
            .test();
    }

    /// Every group is listed
    #[test]
    fn test_get_groups() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/groups")
            .expect_json(json!(["Default", "Kids", "Guests"]))
            .test();
    }
}
