//! Layout validation.
//!
//! Rules are checked in a fixed order and the first failure is returned, so
//! the same layout always produces the same diagnostic. Apart from one
//! read-only `has-session` query, nothing here touches tmux.

pub mod errors;

use std::collections::HashSet;

use tracing::{debug, info};

use muxlay_config::{SessionLayout, WindowLayout};

use crate::runner::SessionProbe;
pub use errors::ValidationError;

/// Validate `layout` before any tmux command is issued.
///
/// # Validation Rules
///
/// 1. Session name is non-empty, has no whitespace, and no `.` or `:`
/// 2. No session with that name already exists
/// 3. `windows` is present and non-empty
/// 4. Each window has a non-empty, whitespace-free, unique name with no
///    `.` or `:` that is not all digits
/// 5. Each split has a `type` of `horizontal` or `vertical`, and any
///    `percentage` lies strictly between 0 and 100
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_layout(
    layout: &SessionLayout,
    probe: &dyn SessionProbe,
) -> Result<(), ValidationError> {
    debug!(event = "core.validation.started", session = %layout.name);

    if !is_valid_name(&layout.name) {
        return Err(ValidationError::InvalidSessionName {
            name: layout.name.clone(),
        });
    }

    if let Some(separator) = target_separator(&layout.name) {
        return Err(ValidationError::SessionNameHasSeparator {
            name: layout.name.clone(),
            separator,
        });
    }

    let exists = probe
        .session_exists(&layout.name)
        .map_err(|source| ValidationError::Probe {
            name: layout.name.clone(),
            source,
        })?;
    if exists {
        return Err(ValidationError::SessionExists {
            name: layout.name.clone(),
        });
    }

    let windows = match layout.windows.as_deref() {
        None => return Err(ValidationError::MissingWindows),
        Some([]) => return Err(ValidationError::EmptyWindows),
        Some(windows) => windows,
    };

    let mut seen = HashSet::new();
    for (index, window) in windows.iter().enumerate() {
        let position = index + 1;
        let name = validate_window_name(window, position)?;
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateWindowName {
                position,
                name: name.to_string(),
            });
        }
        validate_split_chain(window, name)?;
    }

    info!(
        event = "core.validation.completed",
        session = %layout.name,
        windows = windows.len()
    );
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// First character tmux would split a `session:window.pane` target on.
fn target_separator(name: &str) -> Option<char> {
    name.chars().find(|c| matches!(c, '.' | ':'))
}

fn validate_window_name(window: &WindowLayout, position: usize) -> Result<&str, ValidationError> {
    let name = window
        .name()
        .ok_or(ValidationError::MissingWindowName { position })?;
    if !is_valid_name(name) {
        return Err(ValidationError::InvalidWindowName {
            position,
            name: name.to_string(),
        });
    }
    if let Some(separator) = target_separator(name) {
        return Err(ValidationError::WindowNameHasSeparator {
            position,
            name: name.to_string(),
            separator,
        });
    }
    // `S:2` resolves to window index 2 before any window named "2".
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NumericWindowName {
            position,
            name: name.to_string(),
        });
    }
    Ok(name)
}

fn validate_split_chain(window: &WindowLayout, name: &str) -> Result<(), ValidationError> {
    for (index, split) in window.splits().enumerate() {
        let depth = index + 1;
        let orientation = split
            .orientation
            .as_ref()
            .ok_or_else(|| ValidationError::MissingSplitType {
                window: name.to_string(),
                depth,
            })?;

        if !orientation.is_recognized() {
            return Err(ValidationError::UnrecognizedOrientation {
                window: name.to_string(),
                depth,
                value: orientation.as_str().to_string(),
            });
        }

        if let Some(value) = split.percentage
            && !(value.is_finite() && value > 0.0 && value < 100.0)
        {
            return Err(ValidationError::InvalidPercentage {
                window: name.to_string(),
                depth,
                value,
            });
        }
    }
    Ok(())
}
