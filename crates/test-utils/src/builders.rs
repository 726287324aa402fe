#![allow(dead_code)]

use std::path::{Path, PathBuf};

use unirun::args::Invocation;
use unirun::config::{Action, ExecMode, LaunchConfig};
use unirun::fs::mock::MockFileSystem;
use unirun::locate::Platform;
use unirun::project::VERSION_FILE_PATH;

/// Builder for `LaunchConfig` to simplify test setup.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    /// A `run` launch on Linux with the given roots and default log file.
    pub fn new(install_root: impl AsRef<Path>, project: impl AsRef<Path>) -> Self {
        let project = project.as_ref().to_path_buf();
        Self {
            config: LaunchConfig {
                action: Action::Launch(Invocation::Run { method: None }),
                platform: Platform::Linux,
                install_root: install_root.as_ref().to_path_buf(),
                log_file: project.join("Logs/unirun.log"),
                project_path: project,
                custom_args: String::new(),
                editor_version: None,
                mode: ExecMode::Streaming,
                dry_run: false,
            },
        }
    }

    pub fn build_method(mut self, method: &str) -> Self {
        self.config.action = Action::Launch(Invocation::Build {
            method: method.to_string(),
        });
        self
    }

    pub fn locate(mut self) -> Self {
        self.config.action = Action::Locate;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.config.platform = platform;
        self
    }

    pub fn custom_args(mut self, args: &str) -> Self {
        self.config.custom_args = args.to_string();
        self
    }

    pub fn editor_version(mut self, version: &str) -> Self {
        self.config.editor_version = Some(version.to_string());
        self
    }

    pub fn mode(mut self, mode: ExecMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn dry_run(mut self, val: bool) -> Self {
        self.config.dry_run = val;
        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

/// Write a version descriptor for `project` into the mock filesystem.
pub fn add_project(fs: &MockFileSystem, project: impl AsRef<Path>, version: &str) {
    fs.add_file(
        project.as_ref().join(VERSION_FILE_PATH),
        format!(
            "m_EditorVersion: {version}\nm_EditorVersionWithRevision: {version} (0000000000)\n"
        ),
    );
}

/// Add an editor install `<root>/<dir_name>/<platform suffix>` to the mock
/// filesystem and return the executable path.
pub fn add_editor(
    fs: &MockFileSystem,
    root: impl AsRef<Path>,
    dir_name: &str,
    platform: Platform,
) -> PathBuf {
    let exe = root
        .as_ref()
        .join(dir_name)
        .join(platform.executable_suffix());
    fs.add_file(&exe, b"binary".to_vec());
    exe
}
