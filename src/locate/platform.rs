// src/locate/platform.rs

use std::path::PathBuf;

use crate::errors::{LaunchError, Result};

/// Host platforms with a known editor layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Platform of the running binary.
    ///
    /// Anything other than Windows, macOS or Linux is a configuration error,
    /// raised before any filesystem search starts.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(LaunchError::ConfigError(format!(
                "unsupported platform: {other}"
            ))),
        }
    }

    /// Path of the editor binary relative to a version directory.
    pub fn executable_suffix(self) -> PathBuf {
        match self {
            Platform::Windows => PathBuf::from("Editor").join("Unity.exe"),
            Platform::MacOs => PathBuf::from("Unity.app")
                .join("Contents")
                .join("MacOS")
                .join("Unity"),
            Platform::Linux => PathBuf::from("Editor").join("Unity"),
        }
    }

    /// Where the hub installs editors when nothing else is configured.
    pub fn default_install_root(self) -> Result<PathBuf> {
        match self {
            Platform::Windows => Ok(PathBuf::from(r"C:\Program Files\Unity\Hub\Editor")),
            Platform::MacOs => Ok(PathBuf::from("/Applications/Unity/Hub/Editor")),
            Platform::Linux => dirs::home_dir()
                .map(|home| home.join("Unity").join("Hub").join("Editor"))
                .ok_or_else(|| {
                    LaunchError::ConfigError(
                        "cannot determine home directory for the default install root; \
                         pass --install-root"
                            .to_string(),
                    )
                }),
        }
    }
}
