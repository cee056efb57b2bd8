//! Settings validation.
//!
//! Layout rules (names, windows, split chains) are checked by the
//! validator in `muxlay-core`, since one of them needs tmux itself.

use crate::errors::ConfigError;
use crate::settings::MuxlaySettings;

/// Validate merged settings.
///
/// # Errors
///
/// Returns `ConfigError::InvalidSettings` if the tmux binary is blank or the
/// default split percentage is outside `1..=99`.
pub fn validate_settings(settings: &MuxlaySettings) -> Result<(), ConfigError> {
    if let Some(ref binary) = settings.tmux.binary
        && binary.trim().is_empty()
    {
        return Err(ConfigError::InvalidSettings {
            message: "tmux.binary must not be empty".to_string(),
        });
    }

    if let Some(percentage) = settings.split.default_percentage
        && !(1..=99).contains(&percentage)
    {
        return Err(ConfigError::InvalidSettings {
            message: format!(
                "Invalid split.default_percentage '{}'. Must be between 1 and 99",
                percentage
            ),
        });
    }

    Ok(())
}
