// src/exec/streaming.rs

//! Streaming execution: the launcher captures the child's output itself.

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::errors::{LaunchError, Result};

use super::{ConsoleSink, EditorCommand, LogSink, OutputStream, exit_code};

const READ_BUF_SIZE: usize = 8192;

/// One read from one of the child's pipes.
#[derive(Debug)]
struct Chunk {
    stream: OutputStream,
    bytes: Vec<u8>,
}

/// Run `command`, relaying every output chunk to `console` and appending it
/// to the log file as it arrives.
///
/// The log file is opened before the spawn and closed before this returns,
/// whatever the outcome:
///
/// - `Ok(code)`: the child ran; `code` is its mapped exit code.
/// - `Err(LaunchError::SpawnError)`: the child never started.
pub async fn run_streaming(command: &EditorCommand, console: ConsoleSink) -> Result<i32> {
    let sink = LogSink::open(&command.log_file).await?;

    info!(
        executable = ?command.executable,
        args = ?command.args,
        log_file = ?command.log_file,
        "starting editor process"
    );

    let mut cmd = Command::new(&command.executable);
    cmd.args(&command.args)
        .current_dir(&command.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            error!(executable = ?command.executable, error = %source, "process failed");
            if let Err(e) = sink.close().await {
                warn!(error = %e, "failed to close log file after spawn failure");
            }
            return Err(LaunchError::SpawnError {
                path: command.executable.clone(),
                source,
            });
        }
    };

    let (tx, rx) = mpsc::channel::<Chunk>(64);

    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(tokio::spawn(pump(stdout, OutputStream::Stdout, tx.clone())));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(tokio::spawn(pump(stderr, OutputStream::Stderr, tx.clone())));
    }
    // The writer stops once both readers have dropped their senders.
    drop(tx);

    let writer = tokio::spawn(write_chunks(rx, sink, console));

    let status = child.wait().await;
    if status.is_err() {
        let _ = child.start_kill();
    }

    for reader in readers {
        if let Err(e) = reader.await {
            warn!(error = %e, "output reader task panicked");
        }
    }

    let log_result = writer
        .await
        .map_err(|e| anyhow::anyhow!("log writer task failed: {e}"))?;

    let status = status.map_err(|e| anyhow::anyhow!("waiting for editor process: {e}"))?;
    let code = exit_code(status);

    if code == 0 {
        info!("process exited successfully");
    } else {
        error!(exit_code = code, "process exited with code {code}");
    }

    if let Err(e) = log_result {
        error!(log_file = ?command.log_file, error = %e, "failed to write log file");
        return Err(LaunchError::IoError(e));
    }

    Ok(code)
}

/// Forward raw chunks from one pipe until EOF.
async fn pump<R>(mut reader: R, stream: OutputStream, tx: mpsc::Sender<Chunk>)
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; READ_BUF_SIZE];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                let chunk = Chunk {
                    stream,
                    bytes: buf[..n].to_vec(),
                };
                if tx.send(chunk).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!(?stream, error = %e, "error reading child output");
                break;
            }
        }
    }
    debug!(?stream, "output stream closed");
}

/// Single consumer: echo each chunk once, append it once, then close the
/// log.
///
/// A failed log write is remembered but draining continues so the child
/// never blocks on a full pipe.
async fn write_chunks(
    mut rx: mpsc::Receiver<Chunk>,
    mut sink: LogSink,
    console: ConsoleSink,
) -> std::io::Result<()> {
    let mut result = Ok(());

    while let Some(chunk) = rx.recv().await {
        if let Err(e) = console.write(chunk.stream, &chunk.bytes).await {
            debug!(error = %e, "console write failed");
        }
        if result.is_ok() {
            result = sink.append(&chunk.bytes).await;
        }
    }

    let closed = sink.close().await;
    result.and(closed)
}
