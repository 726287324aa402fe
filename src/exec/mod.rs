// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the located editor and relays its output.
//!
//! - [`streaming`] pipes stdout/stderr through two reader tasks into a single
//!   sink task that echoes every chunk to the console and appends it to the
//!   log file.
//! - [`blocking`] lets the child inherit the console and relays the log file
//!   the editor wrote itself once it has exited.
//! - [`log_sink`] owns the append-mode log file handle.
//! - [`console`] is the injectable console writer pair.
//! - [`backend`] provides the `ProcessBackend` trait and the
//!   `RealProcessBackend` that the launcher uses in production, and which
//!   tests can replace with a fake implementation.

pub mod backend;
pub mod blocking;
pub mod console;
pub mod log_sink;
pub mod streaming;

use std::path::PathBuf;
use std::process::ExitStatus;

pub use backend::{ProcessBackend, RealProcessBackend};
pub use console::{ConsoleSink, OutputStream};
pub use log_sink::LogSink;

/// Everything needed to start the editor once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub executable: PathBuf,
    /// Passed to the child verbatim, in order.
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Absolute path of the log file.
    pub log_file: PathBuf,
}

impl EditorCommand {
    /// Human-readable command line, double-quoting entries with spaces.
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.display().to_string())
            .chain(self.args.iter().cloned())
            .map(|part| {
                if part.is_empty() || part.contains(' ') {
                    format!("\"{part}\"")
                } else {
                    part
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Map a child's exit status to the launcher's own exit code.
///
/// A normal exit keeps its code. On Unix, death by signal N becomes
/// `128 + N` like a shell reports it; anything else is 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
