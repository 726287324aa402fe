// src/exec/console.rs

use std::pin::Pin;
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

type SharedWriter = Arc<Mutex<Pin<Box<dyn AsyncWrite + Send>>>>;

/// Which child stream a chunk came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Where relayed child output goes.
///
/// Production uses the process's own stdout/stderr; tests plug in buffers.
/// Clones share the same underlying writers.
#[derive(Clone)]
pub struct ConsoleSink {
    stdout: SharedWriter,
    stderr: SharedWriter,
}

impl ConsoleSink {
    pub fn new<O, E>(stdout: O, stderr: E) -> Self
    where
        O: AsyncWrite + Send + 'static,
        E: AsyncWrite + Send + 'static,
    {
        Self {
            stdout: Arc::new(Mutex::new(Box::pin(stdout))),
            stderr: Arc::new(Mutex::new(Box::pin(stderr))),
        }
    }

    /// The launcher's own stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdout(), tokio::io::stderr())
    }

    /// Write one chunk to the matching stream and flush it right away.
    pub async fn write(&self, stream: OutputStream, bytes: &[u8]) -> std::io::Result<()> {
        let writer = match stream {
            OutputStream::Stdout => &self.stdout,
            OutputStream::Stderr => &self.stderr,
        };
        let mut guard = writer.lock().await;
        guard.write_all(bytes).await?;
        guard.flush().await
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
