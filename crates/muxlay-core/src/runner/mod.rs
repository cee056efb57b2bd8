//! External tmux invocation.
//!
//! The validator and executor only talk to tmux through [`SessionProbe`] and
//! [`Runner`], so tests can substitute a recording fake for the real binary.

pub mod errors;
mod tmux;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::RunnerError;
pub use tmux::TmuxRunner;

use crate::sequencer::TmuxCommand;

/// Captured result of one tmux invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            ..Default::default()
        }
    }

    pub fn failure(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }
}

/// Read-only query against the running tmux server.
pub trait SessionProbe {
    /// Whether a session with exactly this name already exists.
    fn session_exists(&self, name: &str) -> Result<bool, RunnerError>;
}

/// Synchronous tmux command execution.
///
/// `run` blocks until the command exits. A non-zero exit is reported in the
/// returned [`CommandOutput`], not as an `Err`; `Err` means tmux could not
/// be invoked at all.
pub trait Runner: SessionProbe {
    fn run(&self, command: &TmuxCommand) -> Result<CommandOutput, RunnerError>;
}

impl<T: SessionProbe + ?Sized> SessionProbe for &T {
    fn session_exists(&self, name: &str) -> Result<bool, RunnerError> {
        (**self).session_exists(name)
    }
}

impl<T: Runner + ?Sized> Runner for &T {
    fn run(&self, command: &TmuxCommand) -> Result<CommandOutput, RunnerError> {
        (**self).run(command)
    }
}
