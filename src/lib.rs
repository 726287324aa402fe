// src/lib.rs

pub mod args;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod locate;
pub mod logging;
pub mod project;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::{LaunchInputs, LaunchKind, load_and_resolve};
use crate::errors::Result;
use crate::exec::RealProcessBackend;
use crate::fs::RealFileSystem;
use crate::launcher::Launcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (CLI/env over optional TOML file)
/// - the real filesystem and process backend
/// - the launcher
///
/// Returns the exit code the launcher process should end with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let (kind, launch_args) = match &args.command {
        Command::Build(a) => (LaunchKind::Build, a),
        Command::Run(a) => (LaunchKind::Run, a),
        Command::Locate(a) => (LaunchKind::Locate, a),
    };

    let inputs = LaunchInputs::from_cli(kind, launch_args);
    let config_path = args.config.as_ref().map(PathBuf::from);
    let config = load_and_resolve(inputs, config_path.as_deref())?;
    debug!(?config, "resolved launch configuration");

    let backend = RealProcessBackend::new(config.mode);
    let mut launcher = Launcher::new(Arc::new(RealFileSystem), backend);
    launcher.launch(&config).await
}
