// src/args.rs

//! Editor command-line assembly.
//!
//! The argument list is a fixed prefix chosen by the invocation kind,
//! followed by the user's custom options re-tokenized into flag/value
//! entries.

use std::path::Path;

/// Which fixed flags lead the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Build via a static method, then quit.
    Build { method: String },
    /// Batch-mode run; the editor only quits if the custom options ask it to.
    Run { method: Option<String> },
}

/// Where the editor is told to write its log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// `-logFile -`: the editor logs to stdout, which the launcher captures
    /// and appends to its own log file.
    Stdout,
    /// The editor owns the log file at this path.
    File(&'a Path),
}

impl LogTarget<'_> {
    fn as_arg(&self) -> String {
        match self {
            LogTarget::Stdout => "-".to_string(),
            LogTarget::File(path) => path.display().to_string(),
        }
    }
}

/// Build the full, ordered argument list for the editor.
pub fn build_arguments(
    invocation: &Invocation,
    project: &Path,
    log: LogTarget<'_>,
    custom_options: &str,
) -> Vec<String> {
    let mut args = fixed_flags(invocation, project, log);
    args.extend(parse_custom_options(custom_options));
    args
}

/// Fixed prefix: batch mode, auto-quit for builds, log redirection,
/// project path, and the method to invoke.
pub fn fixed_flags(invocation: &Invocation, project: &Path, log: LogTarget<'_>) -> Vec<String> {
    let mut args = vec!["-batchmode".to_string()];

    if matches!(invocation, Invocation::Build { .. }) {
        args.push("-quit".to_string());
    }

    args.push("-logFile".to_string());
    args.push(log.as_arg());
    args.push("-projectPath".to_string());
    args.push(project.display().to_string());

    let method = match invocation {
        Invocation::Build { method } => Some(method.as_str()),
        Invocation::Run { method } => method.as_deref(),
    };
    if let Some(method) = method {
        args.push("-executeMethod".to_string());
        args.push(method.to_string());
    }

    args
}

/// Re-tokenize a free-form option string.
///
/// The string is split on single spaces. A token starting with `-` opens a
/// flag; if the next token exists and does not start with `-`, it is taken
/// as the value and the pair becomes ONE entry `"<flag> <value>"`. Any other
/// token is dropped, so multi-word values and values without a preceding
/// flag cannot be expressed.
pub fn parse_custom_options(options: &str) -> Vec<String> {
    let tokens: Vec<&str> = options.split(' ').collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        if !token.starts_with('-') {
            i += 1;
            continue;
        }

        match tokens.get(i + 1) {
            Some(next) if !next.starts_with('-') => {
                out.push(format!("{token} {next}"));
                i += 2;
            }
            _ => {
                out.push(token.to_string());
                i += 1;
            }
        }
    }

    out
}
