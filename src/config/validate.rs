// src/config/validate.rs

use std::path::{Path, PathBuf};

use crate::args::Invocation;
use crate::config::model::{
    Action, DEFAULT_LOG_PATH, LaunchConfig, LaunchInputs, LaunchKind,
};
use crate::errors::{LaunchError, Result};
use crate::locate::Platform;

impl TryFrom<LaunchInputs> for LaunchConfig {
    type Error = LaunchError;

    /// Resolve against the host platform and the current directory.
    fn try_from(inputs: LaunchInputs) -> std::result::Result<Self, Self::Error> {
        let platform = Platform::current()?;
        let cwd = std::env::current_dir()?;
        LaunchConfig::from_inputs(inputs, platform, &cwd)
    }
}

impl LaunchConfig {
    /// Apply defaults and check required inputs.
    ///
    /// Relative project paths are resolved against `cwd`; the log path is
    /// resolved against the project.
    pub fn from_inputs(inputs: LaunchInputs, platform: Platform, cwd: &Path) -> Result<Self> {
        let project_path = resolve_project(&inputs, cwd)?;
        let action = resolve_action(&inputs)?;

        let install_root = match non_empty(inputs.install_root) {
            Some(root) => PathBuf::from(root),
            None => platform.default_install_root()?,
        };

        let log_path = non_empty(inputs.log_path).unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
        let log_file = project_path.join(log_path);

        Ok(LaunchConfig {
            action,
            platform,
            install_root,
            project_path,
            log_file,
            custom_args: inputs.custom_args.unwrap_or_default(),
            editor_version: non_empty(inputs.editor_version),
            mode: inputs.mode.unwrap_or_default(),
            dry_run: inputs.dry_run,
        })
    }
}

fn resolve_project(inputs: &LaunchInputs, cwd: &Path) -> Result<PathBuf> {
    match non_empty(inputs.project_path.clone()) {
        Some(project) => Ok(cwd.join(project)),
        None if inputs.kind == LaunchKind::Build => Err(LaunchError::ConfigError(
            "a project path is required for `build` (--project or UNIRUN_PROJECT_PATH)"
                .to_string(),
        )),
        None => Ok(cwd.to_path_buf()),
    }
}

fn resolve_action(inputs: &LaunchInputs) -> Result<Action> {
    let method = non_empty(inputs.method.clone());
    match inputs.kind {
        LaunchKind::Build => {
            let method = method.ok_or_else(|| {
                LaunchError::ConfigError(
                    "a build method is required for `build` (--method or UNIRUN_BUILD_METHOD)"
                        .to_string(),
                )
            })?;
            Ok(Action::Launch(Invocation::Build { method }))
        }
        LaunchKind::Run => Ok(Action::Launch(Invocation::Run { method })),
        LaunchKind::Locate => Ok(Action::Locate),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
