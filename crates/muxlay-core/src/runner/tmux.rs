use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::errors::RunnerError;
use super::{CommandOutput, Runner, SessionProbe};
use crate::sequencer::TmuxCommand;

/// Runs commands against the real tmux binary.
#[derive(Debug, Clone)]
pub struct TmuxRunner {
    binary: PathBuf,
    echo: bool,
}

impl TmuxRunner {
    /// Use `binary` as given, without checking that it exists.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            echo: false,
        }
    }

    /// Resolve `binary` on `PATH` (or as a path) before use.
    pub fn locate(binary: &str) -> Result<Self, RunnerError> {
        let resolved = which::which(binary).map_err(|_| RunnerError::BinaryNotFound {
            binary: binary.to_string(),
        })?;
        debug!(
            event = "core.runner.binary_resolved",
            binary = binary,
            path = %resolved.display()
        );
        Ok(Self::new(resolved))
    }

    /// Print each command line to stderr before running it.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn program(&self) -> String {
        self.binary.display().to_string()
    }
}

impl SessionProbe for TmuxRunner {
    fn session_exists(&self, name: &str) -> Result<bool, RunnerError> {
        // `=` forces an exact match; plain `-t name` also matches prefixes.
        let target = format!("={name}");
        let status = Command::new(&self.binary)
            .args(["has-session", "-t", &target])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| RunnerError::SpawnFailed {
                command: format!("{} has-session -t {}", self.program(), target),
                source,
            })?;

        let exists = status.success();
        debug!(
            event = "core.runner.session_probe_completed",
            session = name,
            exists = exists
        );
        Ok(exists)
    }
}

impl Runner for TmuxRunner {
    fn run(&self, command: &TmuxCommand) -> Result<CommandOutput, RunnerError> {
        let line = command.render_with(&self.program());
        if self.echo {
            eprintln!("+ {line}");
        }

        debug!(
            event = "core.runner.command_started",
            kind = %command.kind,
            command = %line
        );

        let output = Command::new(&self.binary)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::SpawnFailed {
                command: line.clone(),
                source,
            })?;

        let result = CommandOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        };

        let stdout = result.stdout_lossy();
        if !stdout.is_empty() {
            debug!(
                event = "core.runner.command_output",
                kind = %command.kind,
                stdout = %stdout
            );
        }

        if result.is_success() {
            info!(
                event = "core.runner.command_completed",
                kind = %command.kind,
                command = %line
            );
        } else {
            warn!(
                event = "core.runner.command_failed",
                kind = %command.kind,
                command = %line,
                exit_code = ?result.exit_code,
                stderr = %result.stderr_lossy()
            );
        }

        Ok(result)
    }
}
