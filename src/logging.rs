// src/logging.rs

//! Launcher diagnostics via `tracing` + `tracing-subscriber`.
//!
//! Filter selection:
//! 1. `--log-level` sets one level for everything.
//! 2. Otherwise `UNIRUN_LOG` is read as `EnvFilter` directives, so a single
//!    phase can be turned up, e.g. `UNIRUN_LOG=info,unirun::locate=debug`
//!    to watch the install-root search.
//! 3. Otherwise `info`.
//!
//! Diagnostics go to STDERR; in streaming mode STDOUT carries the editor's
//! relayed output only. Colours are dropped when STDERR is not a terminal,
//! which is the usual case on CI runners.

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "UNIRUN_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = resolve_filter(cli_level, env_value.as_deref());
    let verbose = matches!(cli_level, Some(LogLevel::Debug | LogLevel::Trace));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising logging: {e}"))?;

    Ok(())
}

/// Pick the filter from the CLI level or the `UNIRUN_LOG` value.
///
/// Unparsable directives fall back to `info`.
pub fn resolve_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level_directive(level));
    }

    env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
