// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Server Setup Functions
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    auth::{self, AuthData},
    config::Config,
    databases::{gravity::GravityDatabase, load_databases},
    routes::{restart, switches, version},
    services::restart::HttpRestartTransport,
    util::{Error, ErrorKind}
};
use rocket::config::{ConfigBuilder, Environment};
use rocket_cors::CorsOptions;

#[cfg(test)]
use crate::{databases::load_test_databases, services::restart::RestartTransportMock};
#[cfg(test)]
use rocket::{config::LoggingLevel, local::Client};

#[catch(404)]
fn not_found() -> Error {
    Error::from(ErrorKind::NotFound)
}

#[catch(401)]
fn unauthorized() -> Error {
    Error::from(ErrorKind::Unauthorized)
}

/// Run the API normally
pub fn start(config_location: &str) -> Result<(), Error> {
    let config = Config::parse(config_location)?;
    let transport = HttpRestartTransport::new()?;

    setup(
        rocket::custom(
            ConfigBuilder::new(Environment::Production)
                .address(config.general.address.as_str())
                .port(config.general.port as u16)
                .log_level(config.general.log_level)
                .extra("databases", load_databases(&config))
                .finalize()
                .unwrap()
        ),
        config,
        transport
    )
    .launch();

    Ok(())
}

/// Setup the API with the testing data and return a client to test with
#[cfg(test)]
pub fn test(config: Config, restart_transport: RestartTransportMock) -> Client {
    let server = setup(
        rocket::custom(
            ConfigBuilder::new(Environment::Development)
                .log_level(LoggingLevel::Debug)
                .extra("databases", load_test_databases())
                .finalize()
                .unwrap()
        ),
        config,
        HttpRestartTransport::new().unwrap()
    )
    .manage(restart_transport);

    Client::new(server).unwrap()
}

/// General server setup
fn setup(
    server: rocket::Rocket,
    config: Config,
    transport: HttpRestartTransport
) -> rocket::Rocket {
    // Set up CORS
    let cors = CorsOptions {
        allow_credentials: true,
        ..CorsOptions::default()
    }
    .to_cors()
    .unwrap();

    // The path to mount the API on
    let mount_path = config.general.path.clone();

    server
        // Attach CORS handler
        .attach(cors)
        // Attach the gravity database
        .attach(GravityDatabase::fairing())
        // Add custom error handlers
        .register(catchers![not_found, unauthorized])
        // Manage the API key
        .manage(AuthData::new(config.general.api_key.clone()))
        // Manage the container API transport
        .manage(transport)
        // Manage the config
        .manage(config)
        // Mount the API
        .mount(&mount_path, routes![
            version::version,
            auth::check,
            auth::logout,
            switches::get_domains,
            switches::get_groups,
            switches::get_domain_status,
            switches::get_group_status,
            switches::put_domain,
            switches::put_group,
            restart::restart_dns
        ])
}
