use std::error::Error;

/// Base trait for all muxlay errors
pub trait MuxlayError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl MuxlayError for muxlay_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            muxlay_config::ConfigError::LayoutParseError { .. } => "LAYOUT_PARSE_ERROR",
            muxlay_config::ConfigError::LayoutNotFound { .. } => "LAYOUT_NOT_FOUND",
            muxlay_config::ConfigError::SettingsParseError { .. } => "SETTINGS_PARSE_ERROR",
            muxlay_config::ConfigError::InvalidSettings { .. } => "INVALID_SETTINGS",
            muxlay_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, muxlay_config::ConfigError::IoError { .. })
    }
}
