//! Builds a tmux session from a layout.
//!
//! Validation runs first and nothing is sent to tmux if it fails. Commands
//! then run one at a time, each waiting for the previous to exit, and the
//! first failure stops the run. There is no rollback: a session that fails
//! halfway is left in place.

pub mod errors;

use tracing::{error, info};

use muxlay_config::SessionLayout;

use crate::runner::Runner;
use crate::sequencer::{self, SequencerOptions, TmuxCommand};
use crate::validation::validate_layout;
pub use errors::ExecutionError;

/// Summary of a fully built session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCreated {
    pub session: String,
    pub windows: usize,
    pub panes: usize,
    pub commands_run: usize,
}

impl SessionCreated {
    /// Command the operator runs to enter the session.
    pub fn attach_command(&self) -> String {
        format!("tmux attach -t {}", self.session)
    }
}

pub struct Executor<R: Runner> {
    runner: R,
    options: SequencerOptions,
}

impl<R: Runner> Executor<R> {
    pub fn new(runner: R, options: SequencerOptions) -> Self {
        Self { runner, options }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Validate `layout` and return the commands that would build it.
    pub fn plan(&self, layout: &SessionLayout) -> Result<Vec<TmuxCommand>, ExecutionError> {
        validate_layout(layout, &self.runner)?;
        Ok(sequencer::sequence(layout, &self.options))
    }

    /// Validate `layout`, then run its commands in order.
    ///
    /// # Errors
    ///
    /// - `ExecutionError::Validation` before any command runs
    /// - `ExecutionError::CommandFailed` on the first non-zero exit
    /// - `ExecutionError::Runner` if tmux could not be invoked
    pub fn execute(&self, layout: &SessionLayout) -> Result<SessionCreated, ExecutionError> {
        let session = layout.name.as_str();
        info!(event = "core.executor.execute_started", session = session);

        let commands = self.plan(layout).inspect_err(|e| {
            error!(
                event = "core.executor.validation_failed",
                session = session,
                error = %e
            );
        })?;

        for (completed, command) in commands.iter().enumerate() {
            let output = self.runner.run(command).map_err(|source| {
                error!(
                    event = "core.executor.runner_failed",
                    session = session,
                    step = %command.step,
                    error = %source
                );
                ExecutionError::Runner {
                    session: session.to_string(),
                    step: command.step.clone(),
                    source,
                    completed,
                }
            })?;

            if !output.is_success() {
                let stderr = output.stderr_lossy();
                error!(
                    event = "core.executor.command_failed",
                    session = session,
                    step = %command.step,
                    command = %command,
                    exit_code = ?output.exit_code,
                    stderr = %stderr,
                    completed = completed
                );
                return Err(ExecutionError::CommandFailed {
                    session: session.to_string(),
                    step: command.step.clone(),
                    command: command.command_line(),
                    exit_code: output.exit_code,
                    stderr,
                    completed,
                });
            }
        }

        let created = SessionCreated {
            session: session.to_string(),
            windows: layout.windows().len(),
            panes: layout.pane_count(),
            commands_run: commands.len(),
        };
        info!(
            event = "core.executor.execute_completed",
            session = session,
            windows = created.windows,
            panes = created.panes,
            commands = created.commands_run
        );
        Ok(created)
    }
}
