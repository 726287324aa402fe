// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// Unsupported platform, missing or invalid required input.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Version descriptor missing, unreadable or malformed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No matching install directory or executable.
    #[error("Discovery failure: {0}")]
    DiscoveryFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The executable could not be launched at all.
    #[error("process failed: could not spawn {path:?}: {source}")]
    SpawnError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Process exit status reported for this failure.
    ///
    /// Every failure that prevents the child from running to completion
    /// maps to 1; a child that ran and failed is not an error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
