// tests/logging_filter.rs

use unirun::cli::LogLevel;
use unirun::logging::resolve_filter;

#[test]
fn cli_level_wins_over_env_directives() {
    let filter = resolve_filter(Some(LogLevel::Debug), Some("error"));
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn env_directives_are_used_when_no_cli_level() {
    let filter = resolve_filter(None, Some("warn,unirun::locate=debug"));
    let rendered = filter.to_string();
    assert!(rendered.contains("unirun::locate=debug"), "{rendered}");
    assert!(rendered.contains("warn"), "{rendered}");
}

#[test]
fn missing_blank_or_invalid_env_falls_back_to_info() {
    assert_eq!(resolve_filter(None, None).to_string(), "info");
    assert_eq!(resolve_filter(None, Some("   ")).to_string(), "info");
    assert_eq!(resolve_filter(None, Some("unirun=loud")).to_string(), "info");
}
