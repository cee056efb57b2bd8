use crate::errors::MuxlayError;
use crate::runner::RunnerError;

/// First layout rule a layout broke.
///
/// Split `depth` is 1-based: the window's root split is depth 1.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Session name '{name}' is invalid: names must be non-empty and cannot include spaces")]
    InvalidSessionName { name: String },

    #[error(
        "Session name '{name}' contains '{separator}': tmux reads '.' and ':' in a target as separators"
    )]
    SessionNameHasSeparator { name: String, separator: char },

    #[error("There already exists a session named '{name}'")]
    SessionExists { name: String },

    #[error("Failed to check for an existing session '{name}': {source}")]
    Probe {
        name: String,
        #[source]
        source: RunnerError,
    },

    #[error("No \"windows\" list in layout configuration")]
    MissingWindows,

    #[error("The \"windows\" list in layout configuration is empty")]
    EmptyWindows,

    #[error("Window {position} has no \"name\"")]
    MissingWindowName { position: usize },

    #[error(
        "Window {position} name '{name}' is invalid: names must be non-empty and cannot include spaces"
    )]
    InvalidWindowName { position: usize, name: String },

    #[error(
        "Window {position} name '{name}' contains '{separator}': tmux reads '.' and ':' in a target as separators"
    )]
    WindowNameHasSeparator {
        position: usize,
        name: String,
        separator: char,
    },

    #[error(
        "Window {position} name '{name}' is all digits: tmux would take it as a window index"
    )]
    NumericWindowName { position: usize, name: String },

    #[error("Window {position} reuses the name '{name}'")]
    DuplicateWindowName { position: usize, name: String },

    #[error("Split {depth} in window '{window}' has no \"type\" field")]
    MissingSplitType { window: String, depth: usize },

    #[error(
        "Split {depth} in window '{window}' has type '{value}': the split type should be either \"horizontal\" or \"vertical\""
    )]
    UnrecognizedOrientation {
        window: String,
        depth: usize,
        value: String,
    },

    #[error(
        "Split {depth} in window '{window}' has percentage {value}: expected a value between 0 and 100"
    )]
    InvalidPercentage {
        window: String,
        depth: usize,
        value: f64,
    },
}

impl MuxlayError for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidSessionName { .. } => "INVALID_SESSION_NAME",
            ValidationError::SessionNameHasSeparator { .. } => "SESSION_NAME_HAS_SEPARATOR",
            ValidationError::SessionExists { .. } => "SESSION_EXISTS",
            ValidationError::Probe { .. } => "SESSION_PROBE_FAILED",
            ValidationError::MissingWindows => "MISSING_WINDOWS",
            ValidationError::EmptyWindows => "EMPTY_WINDOWS",
            ValidationError::MissingWindowName { .. } => "MISSING_WINDOW_NAME",
            ValidationError::InvalidWindowName { .. } => "INVALID_WINDOW_NAME",
            ValidationError::WindowNameHasSeparator { .. } => "WINDOW_NAME_HAS_SEPARATOR",
            ValidationError::NumericWindowName { .. } => "NUMERIC_WINDOW_NAME",
            ValidationError::DuplicateWindowName { .. } => "DUPLICATE_WINDOW_NAME",
            ValidationError::MissingSplitType { .. } => "MISSING_SPLIT_TYPE",
            ValidationError::UnrecognizedOrientation { .. } => "UNRECOGNIZED_ORIENTATION",
            ValidationError::InvalidPercentage { .. } => "INVALID_SPLIT_PERCENTAGE",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ValidationError::Probe { source, .. } => source.is_user_error(),
            _ => true,
        }
    }
}
