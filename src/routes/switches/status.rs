// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Switch Status Endpoints
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    services::switches::{SwitchService, SwitchServiceImpl, SwitchTarget},
    util::{reply_data, reply_error, ErrorKind, Reply}
};

/// Get the status of a domain switch
#[get("/switches/domains/<domain>/status")]
pub fn get_domain_status(service: SwitchServiceImpl, domain: String) -> Reply {
    reply_status(service.status(SwitchTarget::Domain, &domain)?)
}

/// Get the status of a group switch
#[get("/switches/groups/<group>/status")]
pub fn get_group_status(service: SwitchServiceImpl, group: String) -> Reply {
    reply_status(service.status(SwitchTarget::Group, &group)?)
}

/// A switch which is not in its table is reported as not found
fn reply_status(status: Option<bool>) -> Reply {
    match status {
        Some(enabled) => reply_data(json!({ "enabled": enabled })),
        None => reply_error(ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::TestBuilder;
    use rocket::http::Status;

    /// An enabled domain reads as enabled
    #[test]
    fn test_domain_status_enabled() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/domains/ads.example.com/status")
            .expect_json(json!({ "enabled": true }))
            .test();
    }

    /// A disabled domain reads as disabled
    #[test]
    fn test_domain_status_disabled() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/domains/telemetry.example.net/status")
            .expect_json(json!({ "enabled": false }))
            .test();
    }

    /// An unknown domain is a 404
    #[test]
    fn test_domain_status_absent() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/domains/missing.example.com/status")
            .expect_status(Status::NotFound)
            .expect_json(json!({
                "error": {
                    "key": "not_found",
                    "message": "Not found"
                }
            }))
            .test();
    }

    /// A group status is read from the group table
    #[test]
    fn test_group_status() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/groups/Guests/status")
            .expect_json(json!({ "enabled": false }))
            .test();
    }

    /// An unknown group is a 404
    #[test]
    fn test_group_status_absent() {
        TestBuilder::new()
            .endpoint("/admin/api/switches/groups/Visitors/status")
            .expect_status(Status::NotFound)
            .expect_json(json!({
                "error": {
                    "key": "not_found",
                    "message": "Not found"
                }
            }))
            .test();
    }
}
