// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every launch input can also come from an environment variable, which is
//! how CI pipelines usually hand them over.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `unirun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unirun",
    version,
    about = "Locate the project's editor version, run it headless and capture its log.",
    long_about = None
)]
pub struct CliArgs {
    /// Optional TOML file with a `[launch]` table.
    ///
    /// Values given on the command line (or via env) take precedence.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `UNIRUN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a build method non-interactively and quit.
    Build(LaunchArgs),

    /// Run the editor in batch mode with the given custom arguments.
    Run(LaunchArgs),

    /// Print the editor version and executable that would be launched.
    Locate(LaunchArgs),
}

/// Inputs shared by all subcommands.
#[derive(Debug, Clone, Default, Args)]
pub struct LaunchArgs {
    /// Directory containing the editor installations.
    #[arg(long, env = "UNIRUN_INSTALL_ROOT", value_name = "PATH")]
    pub install_root: Option<String>,

    /// Project directory (defaults to the current directory for `run`).
    #[arg(long, env = "UNIRUN_PROJECT_PATH", value_name = "PATH")]
    pub project: Option<String>,

    /// Log file, relative to the project directory.
    #[arg(long, env = "UNIRUN_LOG_PATH", value_name = "PATH")]
    pub log_path: Option<String>,

    /// Static method to invoke, e.g. `BuildScript.PerformBuild`.
    #[arg(long, env = "UNIRUN_BUILD_METHOD", value_name = "METHOD")]
    pub method: Option<String>,

    /// Extra editor options, e.g. `-buildTarget Android -quit`.
    #[arg(
        long,
        env = "UNIRUN_CUSTOM_ARGS",
        value_name = "ARGS",
        allow_hyphen_values = true
    )]
    pub custom_args: Option<String>,

    /// Use this editor version instead of reading the project's version file.
    #[arg(long, value_name = "VERSION")]
    pub editor_version: Option<String>,

    /// How the child's output is captured.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ExecMode>,

    /// Resolve everything and print the command line, but don't spawn.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execution mode as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExecMode {
    Streaming,
    Blocking,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
