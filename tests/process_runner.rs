// tests/process_runner.rs
#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use unirun::config::ExecMode;
use unirun::errors::LaunchError;
use unirun::exec::blocking::run_blocking;
use unirun::exec::streaming::run_streaming;
use unirun::exec::{EditorCommand, ProcessBackend, RealProcessBackend};
use unirun::fs::RealFileSystem;
use unirun::launcher::Launcher;
use unirun::locate::Platform;
use unirun_test_utils::buffer::capture_console;
use unirun_test_utils::builders::LaunchConfigBuilder;
use unirun_test_utils::with_timeout;

type TestResult = Result<(), Box<dyn Error>>;

/// `/bin/sh -c <script>` with the log under `dir/Logs/run.log`.
fn shell(dir: &Path, script: &str) -> EditorCommand {
    EditorCommand {
        executable: PathBuf::from("/bin/sh"),
        args: vec!["-c".to_string(), script.to_string()],
        working_dir: dir.to_path_buf(),
        log_file: dir.join("Logs").join("run.log"),
    }
}

#[tokio::test]
async fn stdout_round_trips_into_log_and_console() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "printf 'hello from editor\\n'");
    let (console, stdout, stderr) = capture_console();

    let code = with_timeout(run_streaming(&command, console)).await?;

    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(&command.log_file)?, "hello from editor\n");
    assert_eq!(stdout.contents_string(), "hello from editor\n");
    assert!(stderr.contents().is_empty());
    Ok(())
}

#[tokio::test]
async fn both_streams_are_logged_and_echoed_exactly_once() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(
        dir.path(),
        "echo out1; echo err1 >&2; echo out2; echo err2 >&2",
    );
    let (console, stdout, stderr) = capture_console();

    let code = with_timeout(run_streaming(&command, console)).await?;
    assert_eq!(code, 0);

    assert_eq!(stdout.contents_string(), "out1\nout2\n");
    assert_eq!(stderr.contents_string(), "err1\nerr2\n");

    // Cross-stream order is not guaranteed, but per-stream order is, and
    // every line appears exactly once.
    let log = fs::read_to_string(&command.log_file)?;
    assert_eq!(log.len(), "out1\nout2\nerr1\nerr2\n".len());
    for line in ["out1", "out2", "err1", "err2"] {
        assert_eq!(log.lines().filter(|l| *l == line).count(), 1, "{line}");
    }
    assert!(log.find("out1") < log.find("out2"));
    assert!(log.find("err1") < log.find("err2"));
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_is_returned_as_code() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "echo failing; exit 3");
    let (console, _stdout, _stderr) = capture_console();

    let code = with_timeout(run_streaming(&command, console)).await?;

    assert_eq!(code, 3);
    assert_eq!(fs::read_to_string(&command.log_file)?, "failing\n");
    Ok(())
}

#[tokio::test]
async fn killed_child_maps_to_128_plus_signal() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "kill -9 $$");
    let (console, _stdout, _stderr) = capture_console();

    let code = with_timeout(run_streaming(&command, console)).await?;
    assert_eq!(code, 137);
    Ok(())
}

#[tokio::test]
async fn spawn_failure_is_distinct_and_closes_the_log() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = EditorCommand {
        executable: dir.path().join("no-such-editor"),
        args: vec!["-batchmode".to_string()],
        working_dir: dir.path().to_path_buf(),
        log_file: dir.path().join("Logs").join("run.log"),
    };
    let (console, stdout, _stderr) = capture_console();

    let result = with_timeout(run_streaming(&command, console)).await;

    match result {
        Err(LaunchError::SpawnError { path, .. }) => assert_eq!(path, command.executable),
        other => panic!("Expected SpawnError, got: {:?}", other),
    }
    assert!(stdout.contents().is_empty());

    // The log was created before the spawn attempt and released afterwards:
    // it is empty and can be removed right away.
    assert_eq!(fs::metadata(&command.log_file)?.len(), 0);
    fs::remove_file(&command.log_file)?;
    Ok(())
}

#[tokio::test]
async fn log_is_appended_not_truncated() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "echo second");
    fs::create_dir_all(command.log_file.parent().unwrap())?;
    fs::write(&command.log_file, "first\n")?;
    let (console, _stdout, _stderr) = capture_console();

    with_timeout(run_streaming(&command, console)).await?;

    assert_eq!(fs::read_to_string(&command.log_file)?, "first\nsecond\n");
    Ok(())
}

#[tokio::test]
async fn child_runs_in_the_working_directory() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let work = dir.path().join("project");
    fs::create_dir_all(&work)?;
    let mut command = shell(&work, "pwd");
    command.log_file = dir.path().join("pwd.log");
    let (console, _stdout, _stderr) = capture_console();

    with_timeout(run_streaming(&command, console)).await?;

    let printed = PathBuf::from(fs::read_to_string(&command.log_file)?.trim());
    assert_eq!(fs::canonicalize(printed)?, fs::canonicalize(&work)?);
    Ok(())
}

#[tokio::test]
async fn large_output_is_not_lost() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(
        dir.path(),
        "i=0; while [ $i -lt 2000 ]; do echo \"line $i\"; echo \"warn $i\" >&2; i=$((i+1)); done",
    );
    let (console, stdout, stderr) = capture_console();

    let code = with_timeout(run_streaming(&command, console)).await?;
    assert_eq!(code, 0);

    let log = fs::read_to_string(&command.log_file)?;
    assert_eq!(log.lines().count(), 4000);
    assert_eq!(stdout.contents_string().lines().count(), 2000);
    assert_eq!(stderr.contents_string().lines().count(), 2000);
    assert_eq!(
        log.len(),
        stdout.contents().len() + stderr.contents().len()
    );
    Ok(())
}

#[tokio::test]
async fn blocking_mode_relays_the_child_written_log() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let log_file = dir.path().join("Logs").join("editor.log");
    let command = EditorCommand {
        executable: PathBuf::from("/bin/sh"),
        args: vec![
            "-c".to_string(),
            format!("echo 'written by editor' > '{}'", log_file.display()),
        ],
        working_dir: dir.path().to_path_buf(),
        log_file: log_file.clone(),
    };
    let (console, stdout, _stderr) = capture_console();

    let code = with_timeout(run_blocking(&command, console)).await?;

    assert_eq!(code, 0);
    assert_eq!(stdout.contents_string(), "written by editor\n");
    Ok(())
}

#[tokio::test]
async fn blocking_mode_returns_child_exit_code() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "exit 7");
    let (console, stdout, _stderr) = capture_console();

    let code = with_timeout(run_blocking(&command, console)).await?;

    assert_eq!(code, 7);
    // The child never wrote a log, so there is nothing to relay.
    assert!(stdout.contents().is_empty());
    Ok(())
}

#[tokio::test]
async fn blocking_mode_spawn_failure() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = EditorCommand {
        executable: dir.path().join("missing"),
        args: vec![],
        working_dir: dir.path().to_path_buf(),
        log_file: dir.path().join("editor.log"),
    };
    let (console, _stdout, _stderr) = capture_console();

    let result = with_timeout(run_blocking(&command, console)).await;
    assert!(matches!(result, Err(LaunchError::SpawnError { .. })));
    Ok(())
}

#[tokio::test]
async fn real_backend_dispatches_on_mode() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let command = shell(dir.path(), "echo via backend");
    let (console, stdout, _stderr) = capture_console();

    let mut backend = RealProcessBackend::with_console(ExecMode::Streaming, console);
    let code = with_timeout(backend.run(command.clone())).await?;

    assert_eq!(code, 0);
    assert_eq!(stdout.contents_string(), "via backend\n");
    assert_eq!(fs::read_to_string(&command.log_file)?, "via backend\n");
    Ok(())
}

/// Editor stand-in: prints one line, then writes one line to its `-logFile`
/// target (stdout when the target is `-`).
const FAKE_EDITOR: &str = r#"#!/bin/sh
echo relayed-stdout
log=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-logFile" ]; then log="$2"; fi
  shift
done
if [ "$log" = "-" ]; then
  echo editor-own-log
else
  echo editor-own-log > "$log"
fi
"#;

#[tokio::test]
async fn streaming_launch_keeps_every_chunk_in_the_log() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let root = dir.path().join("editors");
    let project = dir.path().join("game");
    fs::create_dir_all(&project)?;

    let exe = root
        .join("2021.3.1f1")
        .join(Platform::Linux.executable_suffix());
    fs::create_dir_all(exe.parent().ok_or("no parent")?)?;
    fs::write(&exe, FAKE_EDITOR)?;
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755))?;

    let config = LaunchConfigBuilder::new(&root, &project)
        .build_method("Builder.PerformBuild")
        .editor_version("2021.3.1f1")
        .build();
    let (console, stdout, _stderr) = capture_console();
    let backend = RealProcessBackend::with_console(ExecMode::Streaming, console);
    let mut launcher = Launcher::new(Arc::new(RealFileSystem), backend);

    let code = with_timeout(launcher.launch(&config)).await?;

    assert_eq!(code, 0);
    assert_eq!(stdout.contents_string(), "relayed-stdout\neditor-own-log\n");
    assert_eq!(
        fs::read_to_string(&config.log_file)?,
        "relayed-stdout\neditor-own-log\n"
    );
    Ok(())
}
