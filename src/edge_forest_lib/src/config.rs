//! Configuration of the command line frontend.
//!
//! The configuration is read from a JSON file. Every field has a default, so
//! partial files and a missing file are both fine.

use crate::prelude::*;
use crate::utils::{find_config_file, read_config_file};

use std::path::Path;

/// The name of the configuration file in the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub forest: ForestConfig,
    pub output: OutputConfig,
}

/// Settings that affect which slots are reported.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ForestConfig {
    /// Drop slots without edges from the output.
    pub skip_empty_components: bool,
}

/// Settings that affect how slots are printed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print every component with local vertex ids.
    pub relabel: bool,
    /// Print statistics about the forest.
    pub with_statistics: bool,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicitly given file is used if present. Otherwise the standard
    /// configuration file is searched, and if there is none the defaults are
    /// used.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let value: serde_json::Value = if let Some(path) = path {
            let file = std::fs::read_to_string(path)
                .context(format!("Could not read configuration file: {}", path.display()))?;
            serde_json::from_str(&file).context("Parsing of the configuration file failed")?
        } else if find_config_file(CONFIG_FILE_NAME).is_some() {
            read_config_file(CONFIG_FILE_NAME)?
        } else {
            return Ok(Config::default());
        };

        Self::from_value(value)
    }

    /// Deserializes a configuration from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).context("Invalid configuration")
    }
}
