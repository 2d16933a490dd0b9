// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Common Test Functions
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{config::Config, services::restart::RestartTransportMock, setup};
use rocket::http::{ContentType, Header, Method, Status};
use rocket_contrib::json::JsonValue;

/// The API key used by tests which authenticate
pub const TEST_API_KEY: &str = "test_key";

/// Create the config used by route tests
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.general.api_key = Some(TEST_API_KEY.to_owned());
    config
}

/// Builds and runs a test of an API endpoint
pub struct TestBuilder {
    endpoint: String,
    method: Method,
    headers: Vec<Header<'static>>,
    should_auth: bool,
    body_data: Option<JsonValue>,
    config: Config,
    restart_transport: RestartTransportMock,
    expected_json: JsonValue,
    expected_status: Status
}

impl TestBuilder {
    pub fn new() -> TestBuilder {
        TestBuilder {
            endpoint: "".to_owned(),
            method: Method::Get,
            headers: Vec::new(),
            should_auth: true,
            body_data: None,
            config: test_config(),
            restart_transport: RestartTransportMock::default(),
            expected_json: json!({ "status": "success" }),
            expected_status: Status::Ok
        }
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_owned();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header<H: Into<Header<'static>>>(mut self, header: H) -> Self {
        self.headers.push(header.into());
        self
    }

    pub fn should_auth(mut self, should_auth: bool) -> Self {
        self.should_auth = should_auth;
        self
    }

    pub fn body(mut self, body: JsonValue) -> Self {
        self.body_data = Some(body);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn restart_transport(mut self, restart_transport: RestartTransportMock) -> Self {
        self.restart_transport = restart_transport;
        self
    }

    pub fn expect_json(mut self, expected_json: JsonValue) -> Self {
        self.expected_json = expected_json;
        self
    }

    pub fn expect_status(mut self, expected_status: Status) -> Self {
        self.expected_status = expected_status;
        self
    }

    pub fn test(self) {
        // Start the test client
        let client = setup::test(self.config, self.restart_transport);
        let mut request = client.req(self.method, &self.endpoint);

        // Authenticate with the test API key
        if self.should_auth {
            request.add_header(Header::new("X-Pi-hole-Authenticate", TEST_API_KEY));
        }

        for header in self.headers {
            request.add_header(header);
        }

        if let Some(body) = self.body_data {
            request.add_header(ContentType::JSON);
            request.set_body(serde_json::to_string(&body.0).unwrap());
        }

        // Get the response
        let mut response = request.dispatch();

        // Check the status
        assert_eq!(self.expected_status, response.status());

        // Check that something was returned
        let body = response.body_string();
        assert!(body.is_some());

        // Check that it is correct JSON
        let parsed: serde_json::Value = serde_json::from_str(&body.unwrap()).unwrap();

        // Check that it is the same as the expected JSON
        assert_eq!(self.expected_json.0, parsed);
    }
}
