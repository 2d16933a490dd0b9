// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// DNS Restart Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

/// Settings for restarting the DNS server through the container API
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RestartConfig {
    /// The URL used to create an exec instance in the DNS container, in the
    /// form `http://<host>/api/endpoints/<n>/docker/containers/<name>/exec`
    pub url: String,

    /// The bearer token for the container API
    #[serde(default)]
    pub token: Option<String>
}

impl RestartConfig {
    pub fn is_valid(&self) -> bool {
        // The start URL is derived from everything up to the `/docker/`
        // segment, so a URL without one can never be restarted against
        self.url.starts_with("http") && self.url.contains("/docker/")
    }
}
