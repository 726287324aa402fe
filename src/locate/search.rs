// src/locate/search.rs

//! The two traversal phases of editor discovery.
//!
//! - [`find_version_dir`] walks the install root breadth-first looking for a
//!   directory whose name contains the version.
//! - [`find_executable`] walks that directory depth-first looking for the
//!   platform's executable suffix.
//!
//! Both phases skip directories they are not allowed to list and abort on
//! any other I/O error. Symlinked directories are followed, so a symlink
//! cycle under the install root is not detected.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::Result;
use crate::fs::FileSystem;

/// Breadth-first search under `root` for a directory whose file name
/// contains `version` (case-sensitive substring).
///
/// Within each listing the entries are scanned, and queued, in reverse
/// listing order; the first match is returned without visiting anything
/// else. `Ok(None)` means the queue ran dry.
pub fn find_version_dir(
    fs: &dyn FileSystem,
    root: &Path,
    version: &str,
) -> Result<Option<PathBuf>> {
    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(dir) = queue.pop_front() {
        trace!(dir = ?dir, "listing directory");
        let Some(entries) = list_dir(fs, &dir)? else {
            continue;
        };

        for entry in entries.into_iter().rev() {
            if !fs.is_dir(&entry) {
                continue;
            }
            if dir_name_contains(&entry, version) {
                debug!(dir = ?entry, %version, "found version directory");
                return Ok(Some(entry));
            }
            queue.push_back(entry);
        }
    }

    Ok(None)
}

/// Depth-first search under `root` for `root/<suffix>`, then
/// `<subdir>/<suffix>` for every subdirectory in pre-order.
///
/// The direct candidate wins over anything deeper.
pub fn find_executable(
    fs: &dyn FileSystem,
    root: &Path,
    suffix: &Path,
) -> Result<Option<PathBuf>> {
    let candidate = root.join(suffix);
    if fs.exists(&candidate) {
        debug!(executable = ?candidate, "found editor executable");
        return Ok(Some(candidate));
    }

    let Some(entries) = list_dir(fs, root)? else {
        return Ok(None);
    };

    for entry in entries {
        if !fs.is_dir(&entry) {
            continue;
        }
        if let Some(found) = find_executable(fs, &entry, suffix)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// List a directory, treating "permission denied" as "nothing to see".
fn list_dir(fs: &dyn FileSystem, dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    match fs.read_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            debug!(dir = ?dir, "permission denied; skipping directory");
            Ok(None)
        }
        Err(err) => {
            let context = format!("reading dir {:?}: {err}", dir);
            Err(io::Error::new(err.kind(), context).into())
        }
    }
}

fn dir_name_contains(path: &Path, version: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(version))
        .unwrap_or(false)
}
