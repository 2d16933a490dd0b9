// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Database Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use std::path::Path;

/// Database config settings
#[derive(Deserialize, Clone, Debug)]
pub struct Database {
    /// The location of the gravity database
    #[serde(default = "default_gravity_db")]
    pub gravity_db: String
}

impl Default for Database {
    fn default() -> Self {
        Database {
            gravity_db: default_gravity_db()
        }
    }
}

impl Database {
    pub fn is_valid(&self) -> bool {
        Path::new(&self.gravity_db).is_absolute()
    }
}

fn default_gravity_db() -> String {
    "/etc/pihole/gravity.db".to_owned()
}

#[cfg(test)]
mod test {
    use super::Database;

    /// The default database config is valid
    #[test]
    fn valid_database() {
        let database = Database::default();

        assert!(database.is_valid());
    }

    /// A relative database location makes the config invalid
    #[test]
    fn invalid_database_location() {
        let database = Database {
            gravity_db: "gravity.db".to_owned()
        };

        assert!(!database.is_valid());
    }
}
