// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// DNS Restart Service
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    config::Config,
    services::restart::{HttpRestartTransport, RestartTransport},
    util::{Error, ErrorKind}
};
use failure::ResultExt;
use rocket::{
    request::{self, FromRequest},
    Outcome, Request, State
};

#[cfg(test)]
use crate::services::restart::RestartTransportMock;

/// The command executed inside the DNS container
pub const RESTART_DNS_COMMAND: [&str; 3] = ["sudo", "pihole", "restartdns"];

/// Describes the DNS restart action
pub trait RestartService {
    /// Restart the DNS server inside its container by creating and starting
    /// an exec instance through the container API. Explicit parameters take
    /// precedence over the `[restart]` config section; with neither, the
    /// restart fails with `RestartNotConfigured`.
    fn restart_dns(&self, url: Option<&str>, auth: Option<&str>) -> Result<(), Error>;
}

/// The implementation of `RestartService`
pub struct RestartServiceImpl<'r> {
    transport: Box<dyn RestartTransport>,
    config: &'r Config
}

impl<'a, 'r> FromRequest<'a, 'r> for RestartServiceImpl<'r> {
    type Error = ();

    fn from_request(request: &'a Request<'r>) -> request::Outcome<Self, ()> {
        let config = request.guard::<State<'r, Config>>()?.inner();

        // During tests the transport mock is taken from the state so that no
        // real requests are made
        #[cfg(test)]
        {
            if let Outcome::Success(mock) = request.guard::<State<'r, RestartTransportMock>>() {
                return Outcome::Success(RestartServiceImpl {
                    transport: Box::new(mock.inner().clone()),
                    config
                });
            }
        }

        let transport = request.guard::<State<'r, HttpRestartTransport>>()?.inner().clone();
        Outcome::Success(RestartServiceImpl {
            transport: Box::new(transport),
            config
        })
    }
}

impl<'r> RestartService for RestartServiceImpl<'r> {
    fn restart_dns(&self, url: Option<&str>, auth: Option<&str>) -> Result<(), Error> {
        let restart_config = self.config.restart.as_ref();

        let url = match url.or_else(|| restart_config.map(|restart| restart.url.as_str())) {
            Some(url) => url,
            None => return Err(Error::from(ErrorKind::RestartNotConfigured))
        };
        let token = auth.or_else(|| {
            restart_config.and_then(|restart| restart.token.as_ref().map(String::as_str))
        });

        // The start URL must be derivable before an exec instance is created
        let docker_base = docker_api_base(url)?;

        let exec_id = self.create_exec(url, token)?;
        self.start_exec(&format!("{}exec/{}/start", docker_base, exec_id), token)
    }
}

impl<'r> RestartServiceImpl<'r> {
    /// Create the exec instance which will run the restart command and return
    /// its identifier
    fn create_exec(&self, url: &str, token: Option<&str>) -> Result<String, Error> {
        let body = serde_json::json!({ "Cmd": RESTART_DNS_COMMAND });
        let reply = self
            .transport
            .post_json(url, token, &body)
            .context(ErrorKind::RestartCreateFailed)?;

        if !reply.is_success() {
            return Err(Error::from(ErrorKind::RestartCreateFailed));
        }

        reply.body["Id"]
            .as_str()
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| Error::from(ErrorKind::RestartCreateFailed))
    }

    /// Start the created exec instance. The restart command runs detached;
    /// its output is not collected.
    fn start_exec(&self, url: &str, token: Option<&str>) -> Result<(), Error> {
        let body = serde_json::json!({ "Detach": true });
        let reply = self
            .transport
            .post_json(url, token, &body)
            .context(ErrorKind::RestartStartFailed)?;

        if reply.is_success() {
            Ok(())
        } else {
            Err(Error::from(ErrorKind::RestartStartFailed))
        }
    }
}

/// Get the part of the exec create URL which is shared with the exec start
/// URL: everything up to and including the `/docker/` segment
fn docker_api_base(create_url: &str) -> Result<&str, Error> {
    create_url
        .find("/docker/")
        .map(|index| &create_url[..index + "/docker/".len()])
        .ok_or_else(|| Error::from(ErrorKind::InvalidRestartUrl))
}
