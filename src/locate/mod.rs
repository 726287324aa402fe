// src/locate/mod.rs

//! Editor discovery.
//!
//! - [`platform`] knows the per-OS executable suffix and default install root.
//! - [`search`] holds the breadth-first version-directory search and the
//!   depth-first executable search.
//!
//! [`locate_editor`] chains both phases. "Not found" is reported as
//! `Ok(None)` plus a warning; deciding whether that is fatal is up to the
//! caller.

pub mod platform;
pub mod search;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

pub use platform::Platform;
pub use search::{find_executable, find_version_dir};

/// Find the editor executable for `version` under `install_root`.
pub fn locate_editor(
    fs: &dyn FileSystem,
    platform: Platform,
    install_root: &Path,
    version: &str,
) -> Result<Option<PathBuf>> {
    info!(install_root = ?install_root, %version, "searching for editor installation");

    let Some(version_dir) = find_version_dir(fs, install_root, version)? else {
        warn!(
            install_root = ?install_root,
            %version,
            "no directory matching the editor version was found"
        );
        return Ok(None);
    };

    let suffix = platform.executable_suffix();
    let executable = find_executable(fs, &version_dir, &suffix)?;
    if executable.is_none() {
        warn!(
            version_dir = ?version_dir,
            suffix = ?suffix,
            "version directory found but it contains no editor executable"
        );
    }

    Ok(executable)
}
