// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::args::Invocation;
use crate::cli::{self, LaunchArgs};
use crate::locate::Platform;

/// Log file used when none is configured, relative to the project.
pub const DEFAULT_LOG_PATH: &str = "Logs/unirun.log";

/// How the editor's output is captured.
///
/// - `Streaming` (default): pipe stdout/stderr through the launcher, which
///   echoes and logs every chunk.
/// - `Blocking`: the child inherits the console and writes the log itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    #[default]
    Streaming,
    Blocking,
}

impl From<cli::ExecMode> for ExecMode {
    fn from(mode: cli::ExecMode) -> Self {
        match mode {
            cli::ExecMode::Streaming => ExecMode::Streaming,
            cli::ExecMode::Blocking => ExecMode::Blocking,
        }
    }
}

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [launch]
/// install_root = "/opt/unity/editors"
/// project_path = "game"
/// log_path = "Logs/ci.log"
/// method = "BuildScript.PerformBuild"
/// custom_args = "-buildTarget Android"
/// mode = "streaming"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub launch: LaunchSection,
}

/// `[launch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    pub install_root: Option<String>,
    pub project_path: Option<String>,
    pub log_path: Option<String>,
    pub method: Option<String>,
    pub custom_args: Option<String>,
    pub editor_version: Option<String>,
    pub mode: Option<ExecMode>,
}

/// What the launcher was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    Build,
    Run,
    Locate,
}

/// Unvalidated inputs after merging CLI/env values over the config file.
#[derive(Debug, Clone)]
pub struct LaunchInputs {
    pub kind: LaunchKind,
    pub install_root: Option<String>,
    pub project_path: Option<String>,
    pub log_path: Option<String>,
    pub method: Option<String>,
    pub custom_args: Option<String>,
    pub editor_version: Option<String>,
    pub mode: Option<ExecMode>,
    pub dry_run: bool,
}

impl LaunchInputs {
    pub fn new(kind: LaunchKind) -> Self {
        Self {
            kind,
            install_root: None,
            project_path: None,
            log_path: None,
            method: None,
            custom_args: None,
            editor_version: None,
            mode: None,
            dry_run: false,
        }
    }

    pub fn from_cli(kind: LaunchKind, args: &LaunchArgs) -> Self {
        Self {
            kind,
            install_root: args.install_root.clone(),
            project_path: args.project.clone(),
            log_path: args.log_path.clone(),
            method: args.method.clone(),
            custom_args: args.custom_args.clone(),
            editor_version: args.editor_version.clone(),
            mode: args.mode.map(ExecMode::from),
            dry_run: args.dry_run,
        }
    }

    /// Fill every value still unset from the config file.
    pub fn or_file(self, file: &LaunchSection) -> Self {
        Self {
            kind: self.kind,
            install_root: self.install_root.or_else(|| file.install_root.clone()),
            project_path: self.project_path.or_else(|| file.project_path.clone()),
            log_path: self.log_path.or_else(|| file.log_path.clone()),
            method: self.method.or_else(|| file.method.clone()),
            custom_args: self.custom_args.or_else(|| file.custom_args.clone()),
            editor_version: self.editor_version.or_else(|| file.editor_version.clone()),
            mode: self.mode.or(file.mode),
            dry_run: self.dry_run,
        }
    }
}

/// The action a validated configuration describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Spawn the editor with this invocation.
    Launch(Invocation),
    /// Only report what would be launched.
    Locate,
}

/// Fully resolved launch configuration handed to the launcher by value.
///
/// Built through `LaunchConfig::from_inputs` (see `validate.rs`), which
/// applies defaults and checks required inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub action: Action,
    pub platform: Platform,
    pub install_root: PathBuf,
    pub project_path: PathBuf,
    /// Absolute log file path.
    pub log_file: PathBuf,
    pub custom_args: String,
    /// Skip the version descriptor when set.
    pub editor_version: Option<String>,
    pub mode: ExecMode,
    pub dry_run: bool,
}
