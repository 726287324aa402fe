// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{LaunchConfig, LaunchInputs, RawConfigFile};
use crate::errors::{LaunchError, Result};

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; defaults and required inputs
/// are handled by [`load_and_resolve`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        LaunchError::ConfigError(format!("cannot read config file {:?}: {e}", path))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Merge `inputs` over the optional config file and resolve the result.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML when a path is given.
/// - Lets CLI/env values win over file values.
/// - Applies platform defaults and validates required inputs.
pub fn load_and_resolve(inputs: LaunchInputs, config_path: Option<&Path>) -> Result<LaunchConfig> {
    let inputs = match config_path {
        Some(path) => inputs.or_file(&load_from_path(path)?.launch),
        None => inputs,
    };
    LaunchConfig::try_from(inputs)
}
