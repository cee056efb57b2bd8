use crate::errors::MuxlayError;
use crate::runner::RunnerError;
use crate::sequencer::Step;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "Step '{step}' failed ({}): {}\nSession '{session}' may be partially created; inspect it or remove it with `tmux kill-session -t {session}`",
        describe_exit(.exit_code),
        stderr_or_placeholder(.stderr)
    )]
    CommandFailed {
        session: String,
        step: Step,
        command: String,
        exit_code: Option<i32>,
        stderr: String,
        /// Commands that completed before this one.
        completed: usize,
    },

    #[error(
        "Step '{step}' could not run: {source}\nSession '{session}' may be partially created"
    )]
    Runner {
        session: String,
        step: Step,
        #[source]
        source: RunnerError,
        completed: usize,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match *exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_or_placeholder(stderr: &str) -> &str {
    if stderr.is_empty() {
        "no error output"
    } else {
        stderr
    }
}

impl ExecutionError {
    /// The failed step, if execution got past validation.
    pub fn step(&self) -> Option<&Step> {
        match self {
            ExecutionError::Validation(_) => None,
            ExecutionError::CommandFailed { step, .. } | ExecutionError::Runner { step, .. } => {
                Some(step)
            }
        }
    }

    /// Whether tmux state may have changed before the failure.
    pub fn left_partial_session(&self) -> bool {
        match self {
            ExecutionError::Validation(_) => false,
            ExecutionError::CommandFailed { completed, .. }
            | ExecutionError::Runner { completed, .. } => *completed > 0,
        }
    }
}

impl MuxlayError for ExecutionError {
    fn error_code(&self) -> &'static str {
        match self {
            ExecutionError::Validation(e) => e.error_code(),
            ExecutionError::CommandFailed { .. } => "TMUX_COMMAND_FAILED",
            ExecutionError::Runner { source, .. } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ExecutionError::Validation(e) => e.is_user_error(),
            ExecutionError::CommandFailed { .. } => false,
            ExecutionError::Runner { source, .. } => source.is_user_error(),
        }
    }
}
