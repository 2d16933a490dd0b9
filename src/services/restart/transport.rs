// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Container API Transport
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::util::{Error, ErrorKind};
use failure::ResultExt;
use serde_json::Value;
use std::time::Duration;

#[cfg(test)]
use mock_it::Mock;

/// The status and JSON body of a container API response
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value
}

impl HttpReply {
    /// Check if the status is in the success range
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Describes how requests reach the container API
pub trait RestartTransport {
    /// POST a JSON body to the URL, with a bearer token when one is given
    fn post_json(&self, url: &str, token: Option<&str>, body: &Value)
        -> Result<HttpReply, Error>;
}

/// The implementation of `RestartTransport` over a blocking HTTP client
#[derive(Clone)]
pub struct HttpRestartTransport {
    client: reqwest::Client
}

impl HttpRestartTransport {
    pub fn new() -> Result<Self, Error> {
        // Requests against the container API time out after fifteen seconds
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context(ErrorKind::Unknown)?;

        Ok(HttpRestartTransport { client })
    }
}

impl RestartTransport for HttpRestartTransport {
    fn post_json(
        &self,
        url: &str,
        token: Option<&str>,
        body: &Value
    ) -> Result<HttpReply, Error> {
        let mut request = self.client.post(url).json(body);

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let mut response = request.send().context(ErrorKind::Unknown)?;

        Ok(HttpReply {
            status: response.status().as_u16(),
            // A response without a JSON body is not an error at the transport
            // level; the caller decides if a body was required
            body: response.json().unwrap_or(Value::Null)
        })
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct RestartTransportMock {
    pub post_json: Mock<(String, Option<String>, Value), Result<HttpReply, Error>>
}

#[cfg(test)]
impl Default for RestartTransportMock {
    fn default() -> Self {
        RestartTransportMock {
            post_json: Mock::new(Ok(HttpReply {
                status: 200,
                body: Value::Null
            }))
        }
    }
}

#[cfg(test)]
impl RestartTransport for RestartTransportMock {
    fn post_json(
        &self,
        url: &str,
        token: Option<&str>,
        body: &Value
    ) -> Result<HttpReply, Error> {
        self.post_json
            .called((url.to_owned(), token.map(str::to_owned), body.clone()))
    }
}
