//! # muxlay-config
//!
//! Layout document types, layout loading, and the TOML settings hierarchy
//! for muxlay. Depends only on `muxlay-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod layout;
pub mod settings;

// Public API re-exports
pub use errors::ConfigError;
pub use layout::{Orientation, SessionLayout, Split, SplitChain, WindowLayout};
pub use loading::{load_hierarchy_from, load_layout, merge_settings, resolve_layout_path};
pub use settings::{
    DEFAULT_SPLIT_PERCENTAGE, DEFAULT_TMUX_BINARY, MuxlaySettings, SplitSettings, TmuxSettings,
};
pub use validation::validate_settings;

impl MuxlaySettings {
    /// Load settings from the user/project hierarchy.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the settings.
    ///
    /// See [`validation::validate_settings`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_settings(self)
    }
}
