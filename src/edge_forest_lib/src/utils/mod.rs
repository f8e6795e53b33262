//! This module contains various utility modules and helper functions.

pub mod debug;
pub mod log;

use crate::prelude::*;

use std::{env, fs, path};

use anyhow::bail;

const ENV_EDGE_FOREST_CONFIGS_PATH: &str = "EDGE_FOREST_CONFIGS_PATH";

/// Get the contents of a configuration file.
///
/// We first search the file in our config directory. Then, we fall back to
/// the EDGE_FOREST_CONFIGS_PATH environment variable.
pub fn read_config_file(filename: &str) -> Result<serde_json::Value, Error> {
    let Some(config_path) = find_config_file(filename) else {
        bail!("Unable to find configuration file: {}.", filename)
    };
    let config_file = fs::read_to_string(config_path)
        .context(format!("Could not read configuration file: {}", filename))?;
    Ok(serde_json::from_str(&config_file)?)
}

/// Returns the path of the configuration file `filename`, if there is one.
pub fn find_config_file(filename: &str) -> Option<path::PathBuf> {
    get_config_path_from_project_dir(filename)
        .or_else(|| get_path_from_env(ENV_EDGE_FOREST_CONFIGS_PATH, filename))
}

fn get_config_path_from_project_dir(filename: &str) -> Option<path::PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "edge_forest")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join(filename);

    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

fn get_path_from_env(var: &str, filename: &str) -> Option<path::PathBuf> {
    let val = env::var(var).ok()?;
    let path = path::PathBuf::from(val).join(filename);

    if path.exists() {
        Some(path)
    } else {
        None
    }
}
