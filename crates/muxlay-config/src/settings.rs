use serde::{Deserialize, Serialize};

/// Fallback tmux binary name, resolved on `PATH`.
pub const DEFAULT_TMUX_BINARY: &str = "tmux";

/// Split size used when a split does not request one.
pub const DEFAULT_SPLIT_PERCENTAGE: u8 = 50;

/// User/project settings loaded from `config.toml`.
///
/// All leaf fields are optional so a project file only overrides what it
/// names; accessors supply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuxlaySettings {
    #[serde(default)]
    pub tmux: TmuxSettings,
    #[serde(default)]
    pub split: SplitSettings,
}

/// # Example
///
/// ```toml
/// [tmux]
/// binary = "/opt/homebrew/bin/tmux"
/// pane_base_index = 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmuxSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
    /// Must match tmux's own `pane-base-index` option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pane_base_index: Option<u32>,
}

impl TmuxSettings {
    pub fn binary(&self) -> &str {
        self.binary.as_deref().unwrap_or(DEFAULT_TMUX_BINARY)
    }

    pub fn pane_base_index(&self) -> u32 {
        self.pane_base_index.unwrap_or(0)
    }
}

/// Controls how a split's `percentage` is applied.
///
/// With `honor_percentage = false` every split is a fixed 50/50 cut and
/// configured percentages are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honor_percentage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_percentage: Option<u8>,
}

impl SplitSettings {
    pub fn honor_percentage(&self) -> bool {
        self.honor_percentage.unwrap_or(true)
    }

    pub fn default_percentage(&self) -> u8 {
        self.default_percentage.unwrap_or(DEFAULT_SPLIT_PERCENTAGE)
    }
}
