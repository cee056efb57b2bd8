use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse layout '{}': {message}", path.display())]
    LayoutParseError { path: PathBuf, message: String },

    #[error("Layout '{name}' not found. Looked in: {searched}")]
    LayoutNotFound { name: String, searched: String },

    #[error("Failed to parse config file: {message}")]
    SettingsParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidSettings { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
