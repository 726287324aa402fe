#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use unirun_test_utils::init_tracing;

/// Create `<root>/<rel>` as a directory tree on disk.
pub fn mkdirs(root: &Path, rel: &str) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).expect("create test dirs");
    dir
}

/// Create an empty file at `<root>/<rel>`, including parent directories.
pub fn touch(root: &Path, rel: impl AsRef<Path>) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, b"").expect("create test file");
    path
}
