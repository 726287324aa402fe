// src/exec/log_sink.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Append-mode log file owned by one process run.
///
/// [`LogSink::close`] consumes the sink, so the handle can only be closed
/// once.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: File,
}

impl LogSink {
    /// Open `path` for appending, creating missing parent directories.
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating log directory {:?}", parent))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("opening log file {:?}", path))?;

        debug!(log_file = ?path, "log file opened");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Append one chunk as a single write.
    pub async fn append(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.file.write_all(bytes).await
    }

    /// Flush and release the file handle.
    pub async fn close(mut self) -> std::io::Result<()> {
        let flushed = self.file.flush().await;
        let synced = self.file.sync_all().await;
        drop(self.file);
        debug!(log_file = ?self.path, "log file closed");
        flushed.and(synced)
    }
}
