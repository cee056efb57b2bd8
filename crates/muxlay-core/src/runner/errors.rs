use crate::errors::MuxlayError;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("tmux binary '{binary}' not found in PATH")]
    BinaryNotFound { binary: String },

    #[error("Failed to execute '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl MuxlayError for RunnerError {
    fn error_code(&self) -> &'static str {
        match self {
            RunnerError::BinaryNotFound { .. } => "TMUX_NOT_FOUND",
            RunnerError::SpawnFailed { .. } => "TMUX_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RunnerError::BinaryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_not_found() {
        let error = RunnerError::BinaryNotFound {
            binary: "tmux".to_string(),
        };
        assert_eq!(error.to_string(), "tmux binary 'tmux' not found in PATH");
        assert_eq!(error.error_code(), "TMUX_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_spawn_failed() {
        let error = RunnerError::SpawnFailed {
            command: "tmux has-session -t =work".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("tmux has-session -t =work"));
        assert_eq!(error.error_code(), "TMUX_SPAWN_FAILED");
        assert!(!error.is_user_error());
    }
}
