use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use unirun::errors::{LaunchError, Result};
use unirun::exec::{EditorCommand, ProcessBackend};

/// How the fake "process" ends.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Exit(i32),
    SpawnFailure,
}

/// A fake backend that:
/// - records every command it was asked to run
/// - resolves with a preconfigured outcome, without spawning anything.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    outcome: FakeOutcome,
    commands: Arc<Mutex<Vec<EditorCommand>>>,
}

impl FakeBackend {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn exiting_with(code: i32) -> Self {
        Self::new(FakeOutcome::Exit(code))
    }

    pub fn commands(&self) -> Vec<EditorCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessBackend for FakeBackend {
    fn run(
        &mut self,
        command: EditorCommand,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let commands = Arc::clone(&self.commands);
        let outcome = self.outcome;

        Box::pin(async move {
            let path = command.executable.clone();
            commands.lock().unwrap().push(command);
            match outcome {
                FakeOutcome::Exit(code) => Ok(code),
                FakeOutcome::SpawnFailure => Err(LaunchError::SpawnError {
                    path,
                    source: io::Error::new(io::ErrorKind::NotFound, "fake spawn failure"),
                }),
            }
        })
    }
}
