// src/project.rs

//! Reading the editor version a project was saved with.
//!
//! The version descriptor is a small YAML-ish text file:
//!
//! ```text
//! m_EditorVersion: 2021.3.1f1
//! m_EditorVersionWithRevision: 2021.3.1f1 (3b70a0754835)
//! ```
//!
//! Only the first `m_EditorVersion:` line matters; its second
//! whitespace-separated field is the version.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{LaunchError, Result};
use crate::fs::FileSystem;

/// Location of the version descriptor, relative to the project root.
pub const VERSION_FILE_PATH: &str = "ProjectSettings/ProjectVersion.txt";

/// Line marker holding the editor version.
pub const VERSION_MARKER: &str = "m_EditorVersion:";

pub fn version_file_path(project: &Path) -> PathBuf {
    project.join(VERSION_FILE_PATH)
}

/// Read the required editor version for the project at `project`.
///
/// Fails with [`LaunchError::ParseError`] if the file is missing,
/// unreadable, or has no usable `m_EditorVersion:` line.
pub fn read_editor_version(fs: &dyn FileSystem, project: &Path) -> Result<String> {
    let path = version_file_path(project);
    let contents = fs
        .read_to_string(&path)
        .map_err(|e| LaunchError::ParseError(format!("{e:#}")))?;

    let version = parse_editor_version(&contents).ok_or_else(|| {
        LaunchError::ParseError(format!(
            "no `{VERSION_MARKER} <version>` line in {:?}",
            path
        ))
    })?;

    debug!(%version, file = ?path, "read editor version");
    Ok(version)
}

/// Extract the version from the contents of a version descriptor.
pub fn parse_editor_version(contents: &str) -> Option<String> {
    let line = contents
        .lines()
        .find(|line| line.trim_start().starts_with(VERSION_MARKER))?;

    line.split_whitespace()
        .nth(1)
        .map(|v| v.trim().to_string())
}
