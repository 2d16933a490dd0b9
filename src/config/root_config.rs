// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Root Level Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    config::{Database, General, RestartConfig},
    util::{Error, ErrorKind}
};
use failure::{Fail, ResultExt};
use std::{
    fs::File,
    io::{self, prelude::*}
};

/// The default config location
const CONFIG_LOCATION: &str = "/etc/pihole/switch-api.toml";

/// The API config options
#[derive(Deserialize, Default, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub database: Database,
    /// The restart sequence is disabled when this section is missing
    #[serde(default)]
    pub restart: Option<RestartConfig>
}

impl Config {
    /// Load the config from the default location. If it does not exist, return
    /// the default config.
    pub fn load() -> Result<Config, Error> {
        Self::parse(CONFIG_LOCATION)
    }

    /// Parse the config from the file located at `config_location`. If it does
    /// not exist, return the default config.
    pub fn parse(config_location: &str) -> Result<Config, Error> {
        let mut buffer = String::new();

        // Read the file to a string, but return the default config if the file doesn't
        // exist
        let mut file = match File::open(config_location) {
            Ok(f) => f,
            Err(e) => match e.kind() {
                io::ErrorKind::NotFound => return Ok(Self::default()),
                _ => {
                    return Err(Error::from(
                        e.context(ErrorKind::FileRead(config_location.to_owned()))
                    ));
                }
            }
        };

        file.read_to_string(&mut buffer)
            .map_err(|e| Error::from(e.context(ErrorKind::FileRead(config_location.to_owned()))))?;

        let config = toml::from_str::<Config>(&buffer).context(ErrorKind::ConfigParsingError)?;

        if config.is_valid() {
            Ok(config)
        } else {
            Err(Error::from(ErrorKind::ConfigParsingError))
        }
    }

    /// Check if the config settings are valid
    pub fn is_valid(&self) -> bool {
        self.general.is_valid()
            && self.database.is_valid()
            && self.restart.as_ref().map_or(true, RestartConfig::is_valid)
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// The default config is valid
    #[test]
    fn valid_config() {
        let config = Config::default();
        assert!(config.is_valid());
    }

    /// A missing config file loads as the default config
    #[test]
    fn missing_config_file() {
        let config = Config::parse("/tmp/does_not_exist/switch-api.toml").unwrap();

        assert!(config.restart.is_none());
        assert_eq!(config.database.gravity_db, "/etc/pihole/gravity.db");
    }

    /// All of the config settings are read from the file
    #[test]
    fn parse_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "{}",
            r#"
                [general]
                address = "127.0.0.1"
                port = 5000
                api_key = "secret"

                [database]
                gravity_db = "/tmp/gravity.db"

                [restart]
                url = "http://portainer.lan:9000/api/endpoints/1/docker/containers/pihole/exec"
                token = "portainer_token"
            "#
        )
        .unwrap();

        let config = Config::parse(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.general.address, "127.0.0.1");
        assert_eq!(config.general.port, 5000);
        assert_eq!(config.general.api_key, Some("secret".to_owned()));
        assert_eq!(config.database.gravity_db, "/tmp/gravity.db");

        let restart = config.restart.unwrap();
        assert_eq!(
            restart.url,
            "http://portainer.lan:9000/api/endpoints/1/docker/containers/pihole/exec"
        );
        assert_eq!(restart.token, Some("portainer_token".to_owned()));
    }

    /// A config with an invalid setting fails to parse
    #[test]
    fn invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "{}",
            r#"
                [general]
                address = "not_an_address"
            "#
        )
        .unwrap();

        assert!(Config::parse(file.path().to_str().unwrap()).is_err());
    }
}
