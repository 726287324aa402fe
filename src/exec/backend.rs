// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of spawning processes
//! directly. This makes it easy to swap in a fake backend in tests while
//! keeping the production implementation in [`streaming`] and [`blocking`].
//!
//! [`streaming`]: super::streaming
//! [`blocking`]: super::blocking

use std::future::Future;
use std::pin::Pin;

use crate::config::ExecMode;
use crate::errors::Result;

use super::blocking::run_blocking;
use super::streaming::run_streaming;
use super::{ConsoleSink, EditorCommand};

/// Trait abstracting how the editor process is executed.
///
/// Production code uses [`RealProcessBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessBackend: Send {
    /// Run the command to completion.
    ///
    /// Resolves to the child's exit code, or to an error if it could not be
    /// started.
    fn run(
        &mut self,
        command: EditorCommand,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Real backend used in production.
#[derive(Debug, Clone)]
pub struct RealProcessBackend {
    mode: ExecMode,
    console: ConsoleSink,
}

impl RealProcessBackend {
    /// Backend relaying to the launcher's own stdout/stderr.
    pub fn new(mode: ExecMode) -> Self {
        Self::with_console(mode, ConsoleSink::stdio())
    }

    pub fn with_console(mode: ExecMode, console: ConsoleSink) -> Self {
        Self { mode, console }
    }
}

impl ProcessBackend for RealProcessBackend {
    fn run(
        &mut self,
        command: EditorCommand,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let console = self.console.clone();
        let mode = self.mode;

        Box::pin(async move {
            match mode {
                ExecMode::Streaming => run_streaming(&command, console).await,
                ExecMode::Blocking => run_blocking(&command, console).await,
            }
        })
    }
}
