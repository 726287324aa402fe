// src/launcher.rs

//! Sequencing of a single launch.
//!
//! install root -> editor version -> executable -> arguments -> process ->
//! exit code. Everything before the spawn is synchronous filesystem work;
//! the spawn itself goes through a [`ProcessBackend`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::args::{Invocation, LogTarget, build_arguments};
use crate::config::{Action, ExecMode, LaunchConfig};
use crate::errors::{LaunchError, Result};
use crate::exec::{EditorCommand, ProcessBackend};
use crate::fs::FileSystem;
use crate::locate::locate_editor;
use crate::project::read_editor_version;

/// Editor version and executable resolved for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEditor {
    pub version: String,
    pub executable: std::path::PathBuf,
}

pub struct Launcher<B: ProcessBackend> {
    fs: Arc<dyn FileSystem>,
    backend: B,
}

impl<B: ProcessBackend> Launcher<B> {
    pub fn new(fs: Arc<dyn FileSystem>, backend: B) -> Self {
        Self { fs, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the version (unless overridden) and find its executable.
    ///
    /// A missing installation is a [`LaunchError::DiscoveryFailure`] here, so
    /// an empty path is never handed to the spawn step.
    pub fn resolve_editor(&self, config: &LaunchConfig) -> Result<ResolvedEditor> {
        let version = match &config.editor_version {
            Some(version) => {
                debug!(%version, "using editor version override");
                version.clone()
            }
            None => read_editor_version(self.fs.as_ref(), &config.project_path)?,
        };
        info!(%version, project = ?config.project_path, "editor version required by project");

        let executable = locate_editor(
            self.fs.as_ref(),
            config.platform,
            &config.install_root,
            &version,
        )?
        .ok_or_else(|| {
            LaunchError::DiscoveryFailure(format!(
                "no editor {version} found under {:?}",
                config.install_root
            ))
        })?;

        Ok(ResolvedEditor {
            version,
            executable,
        })
    }

    /// Assemble the command for `invocation` without running it.
    pub fn prepare(
        &self,
        config: &LaunchConfig,
        invocation: &Invocation,
    ) -> Result<(ResolvedEditor, EditorCommand)> {
        let editor = self.resolve_editor(config)?;

        // In streaming mode the runner is the log's only writer.
        let log = match config.mode {
            ExecMode::Streaming => LogTarget::Stdout,
            ExecMode::Blocking => LogTarget::File(&config.log_file),
        };
        let args = build_arguments(
            invocation,
            &config.project_path,
            log,
            &config.custom_args,
        );

        let command = EditorCommand {
            executable: editor.executable.clone(),
            args,
            working_dir: config.project_path.clone(),
            log_file: config.log_file.clone(),
        };
        Ok((editor, command))
    }

    /// Run the configured action and return the process exit code.
    ///
    /// `Ok(code)` is the child's own code (0 on success). Every failure
    /// before or during the spawn is an `Err`.
    pub async fn launch(&mut self, config: &LaunchConfig) -> Result<i32> {
        let invocation = match &config.action {
            Action::Locate => {
                let editor = self.resolve_editor(config)?;
                println!("{}", editor.version);
                println!("{}", editor.executable.display());
                return Ok(0);
            }
            Action::Launch(invocation) => invocation,
        };

        let (editor, command) = self.prepare(config, invocation)?;

        if config.dry_run {
            println!("{}", command.command_line());
            debug!("dry-run complete (no execution)");
            return Ok(0);
        }

        info!(version = %editor.version, mode = ?config.mode, "launching editor");
        self.backend.run(command).await
    }
}
