// src/exec/blocking.rs

//! Blocking execution: the child inherits the console and writes its own
//! log via `-logFile`; the launcher relays that file after the child exits.

use std::process::{Command, Stdio};

use anyhow::Context;
use tracing::{debug, error, info};

use crate::errors::{LaunchError, Result};

use super::{ConsoleSink, EditorCommand, OutputStream, exit_code};

/// Run `command` synchronously on the blocking pool and wait for it.
pub async fn run_blocking(command: &EditorCommand, console: ConsoleSink) -> Result<i32> {
    if let Some(parent) = command.log_file.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating log directory {:?}", parent))?;
    }

    info!(
        executable = ?command.executable,
        args = ?command.args,
        log_file = ?command.log_file,
        "starting editor process (blocking)"
    );

    let spawned = command.clone();
    let status = tokio::task::spawn_blocking(move || {
        Command::new(&spawned.executable)
            .args(&spawned.args)
            .current_dir(&spawned.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    })
    .await
    .map_err(|e| anyhow::anyhow!("blocking spawn task failed: {e}"))?;

    let status = match status {
        Ok(status) => status,
        Err(source) => {
            error!(executable = ?command.executable, error = %source, "process failed");
            return Err(LaunchError::SpawnError {
                path: command.executable.clone(),
                source,
            });
        }
    };

    relay_log_file(command, &console).await;

    let code = exit_code(status);
    if code == 0 {
        info!("process exited successfully");
    } else {
        error!(exit_code = code, "process exited with code {code}");
    }
    Ok(code)
}

/// Echo the child-written log file, if there is one.
async fn relay_log_file(command: &EditorCommand, console: &ConsoleSink) {
    match tokio::fs::read(&command.log_file).await {
        Ok(bytes) => {
            if let Err(e) = console.write(OutputStream::Stdout, &bytes).await {
                debug!(error = %e, "console write failed");
            }
        }
        Err(e) => {
            debug!(log_file = ?command.log_file, error = %e, "no log file to relay");
        }
    }
}
