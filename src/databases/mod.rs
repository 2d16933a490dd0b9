// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Databases
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::config::Config;
use rocket::config::Value;
use std::collections::HashMap;

#[cfg(test)]
use crate::databases::custom_connection::{GravityConnection, GravityConnectionManager};
#[cfg(test)]
use diesel::r2d2::Pool;
#[cfg(test)]
use rocket_contrib::databases::{DatabaseConfig, Poolable};
#[cfg(test)]
use std::collections::BTreeMap;

pub mod custom_connection;
pub mod gravity;

/// Load the database URL from the API config into the Rocket config format
pub fn load_databases(config: &Config) -> HashMap<&str, HashMap<&str, Value>> {
    let mut databases = HashMap::new();
    let mut gravity_database = HashMap::new();

    gravity_database.insert("url", Value::from(config.database.gravity_db.clone()));
    databases.insert("gravity_database", gravity_database);

    databases
}

/// Load test database URLs into the Rocket config format
#[cfg(test)]
pub fn load_test_databases() -> HashMap<&'static str, HashMap<&'static str, Value>> {
    let mut databases = HashMap::new();
    let mut gravity_database = HashMap::new();

    // A single connection is used so that changes made by one request are seen
    // by the next request of the same test
    gravity_database.insert("url", Value::from(":memory:"));
    gravity_database.insert("pool_size", Value::from(1));
    gravity_database.insert(
        "test_schema",
        Value::from(gravity::TEST_GRAVITY_DATABASE_SCHEMA)
    );

    databases.insert("gravity_database", gravity_database);

    databases
}

/// Create an in-memory SQLite database with the given schema (SQL commands)
#[cfg(test)]
pub fn create_memory_db(schema: &str, pool_size: u32) -> Pool<GravityConnectionManager> {
    let mut extras = BTreeMap::new();
    extras.insert("test_schema".to_owned(), Value::from(schema));

    let config = DatabaseConfig {
        url: ":memory:",
        pool_size,
        extras
    };

    GravityConnection::pool(config).unwrap()
}
