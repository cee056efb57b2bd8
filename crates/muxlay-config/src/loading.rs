//! Layout and settings loading.
//!
//! # Settings Hierarchy
//!
//! Settings are loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.muxlay/config.toml`
//! 3. **Project config** - `./.muxlay/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! Layout documents are JSON unless the file ends in `.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use muxlay_paths::MuxlayPaths;

use crate::errors::ConfigError;
use crate::layout::SessionLayout;
use crate::settings::{MuxlaySettings, SplitSettings, TmuxSettings};
use crate::validation::validate_settings;

fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)).into()
    })
}

/// Load a layout document from `path`.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read and
/// `ConfigError::LayoutParseError` if it is not a well-formed layout.
pub fn load_layout(path: &Path) -> Result<SessionLayout, ConfigError> {
    let content = read_file(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let layout = if is_toml {
        toml::from_str::<SessionLayout>(&content).map_err(|e| ConfigError::LayoutParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str::<SessionLayout>(&content).map_err(|e| {
            ConfigError::LayoutParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    };

    info!(
        event = "config.layout.load_completed",
        path = %path.display(),
        session = %layout.name,
        windows = layout.windows().len()
    );
    Ok(layout)
}

/// Resolve a layout argument to a file.
///
/// An existing path wins. Otherwise a bare name (no separator, no
/// extension) is looked up as `<layouts_dir>/<name>.json` then `.toml`.
pub fn resolve_layout_path(arg: &str, paths: &MuxlayPaths) -> Result<PathBuf, ConfigError> {
    let direct = PathBuf::from(arg);
    if direct.exists() {
        return Ok(direct);
    }

    let is_bare_name = !arg.is_empty()
        && direct.extension().is_none()
        && direct.components().count() == 1;

    if !is_bare_name {
        // Let the read report the missing file with its path.
        return Ok(direct);
    }

    let candidates = paths.named_layout_candidates(arg);
    if let Some(found) = candidates.iter().find(|c| c.is_file()) {
        debug!(
            event = "config.layout.named_resolved",
            name = arg,
            path = %found.display()
        );
        return Ok(found.clone());
    }

    Err(ConfigError::LayoutNotFound {
        name: arg.to_string(),
        searched: candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Load settings from the user/project hierarchy.
///
/// # Errors
///
/// Missing files are not errors. Parse and validation failures are.
pub fn load_hierarchy() -> Result<MuxlaySettings, ConfigError> {
    let paths = MuxlayPaths::resolve().map_err(|e| ConfigError::InvalidSettings {
        message: e.to_string(),
    })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(
        &paths.user_config(),
        &MuxlayPaths::project_config(&project_root),
    )
}

/// Load and merge settings from explicit user and project files.
pub fn load_hierarchy_from(
    user_config: &Path,
    project_config: &Path,
) -> Result<MuxlaySettings, ConfigError> {
    let mut settings = MuxlaySettings::default();

    for path in [user_config, project_config] {
        match load_settings_file(path) {
            Ok(loaded) => settings = merge_settings(settings, loaded),
            Err(e) if !is_file_not_found(&e) => return Err(e),
            Err(_) => {} // File not found - keep what we have
        }
    }

    validate_settings(&settings)?;
    Ok(settings)
}

fn load_settings_file(path: &Path) -> Result<MuxlaySettings, ConfigError> {
    let content = read_file(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::SettingsParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two settings values, with `override_settings` taking precedence
/// field by field.
pub fn merge_settings(base: MuxlaySettings, override_settings: MuxlaySettings) -> MuxlaySettings {
    MuxlaySettings {
        tmux: TmuxSettings {
            binary: override_settings.tmux.binary.or(base.tmux.binary),
            pane_base_index: override_settings
                .tmux
                .pane_base_index
                .or(base.tmux.pane_base_index),
        },
        split: SplitSettings {
            honor_percentage: override_settings
                .split
                .honor_percentage
                .or(base.split.honor_percentage),
            default_percentage: override_settings
                .split
                .default_percentage
                .or(base.split.default_percentage),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("work.json");
        fs::write(
            &path,
            r#"{"session":"work","windows":[{"name":"w1","process":"htop","split":{"type":"horizontal","percentage":30}}]}"#,
        )
        .unwrap();

        let layout = load_layout(&path).unwrap();
        assert_eq!(layout.name, "work");
        let window = &layout.windows()[0];
        assert_eq!(window.process(), Some("htop"));
        let split = window.split.as_ref().unwrap();
        assert_eq!(split.orientation, Some(Orientation::Horizontal));
        assert_eq!(split.percentage, Some(30.0));
    }

    #[test]
    fn test_load_toml_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("work.toml");
        fs::write(
            &path,
            r#"
session = "work"

[[windows]]
name = "editor"
process = "nvim"

[windows.split]
type = "vertical"
percentage = 60

[windows.split.split]
type = "horizontal"
"#,
        )
        .unwrap();

        let layout = load_layout(&path).unwrap();
        let window = &layout.windows()[0];
        assert_eq!(window.name(), Some("editor"));
        assert_eq!(window.pane_count(), 3);
        assert_eq!(window.split.as_ref().unwrap().percentage, Some(60.0));
    }

    #[test]
    fn test_load_layout_parse_error_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_layout(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LayoutParseError { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_layout_missing_session_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nosession.json");
        fs::write(&path, r#"{"windows":[{"name":"w1"}]}"#).unwrap();

        assert!(matches!(
            load_layout(&path).unwrap_err(),
            ConfigError::LayoutParseError { .. }
        ));
    }

    #[test]
    fn test_load_layout_missing_file() {
        let err = load_layout(Path::new("/nonexistent/layout.json")).unwrap_err();
        assert!(is_file_not_found(&err));
        assert!(err.to_string().contains("/nonexistent/layout.json"));
    }

    #[test]
    fn test_resolve_existing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "{}").unwrap();
        let paths = MuxlayPaths::from_dir(dir.path().join(".muxlay"));

        assert_eq!(
            resolve_layout_path(path.to_str().unwrap(), &paths).unwrap(),
            path
        );
    }

    #[test]
    fn test_resolve_named_layout_prefers_json() {
        let dir = TempDir::new().unwrap();
        let paths = MuxlayPaths::from_dir(dir.path().to_path_buf());
        fs::create_dir_all(paths.layouts_dir()).unwrap();
        fs::write(paths.layouts_dir().join("dev.toml"), "").unwrap();
        fs::write(paths.layouts_dir().join("dev.json"), "").unwrap();

        let resolved = resolve_layout_path("dev", &paths).unwrap();
        assert_eq!(resolved, paths.layouts_dir().join("dev.json"));
    }

    #[test]
    fn test_resolve_named_layout_not_found() {
        let dir = TempDir::new().unwrap();
        let paths = MuxlayPaths::from_dir(dir.path().to_path_buf());

        let err = resolve_layout_path("missing-layout", &paths).unwrap_err();
        assert!(matches!(err, ConfigError::LayoutNotFound { .. }));
        assert!(err.to_string().contains("missing-layout.json"));
    }

    #[test]
    fn test_hierarchy_missing_files_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings =
            load_hierarchy_from(&dir.path().join("user.toml"), &dir.path().join("proj.toml"))
                .unwrap();
        assert_eq!(settings, MuxlaySettings::default());
    }

    #[test]
    fn test_hierarchy_project_overrides_user() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &user,
            "[tmux]\nbinary = \"/usr/bin/tmux\"\npane_base_index = 1\n",
        )
        .unwrap();
        fs::write(&project, "[tmux]\npane_base_index = 0\n").unwrap();

        let settings = load_hierarchy_from(&user, &project).unwrap();
        assert_eq!(settings.tmux.binary(), "/usr/bin/tmux");
        assert_eq!(settings.tmux.pane_base_index(), 0);
    }

    #[test]
    fn test_hierarchy_parse_error_fails() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user.toml");
        fs::write(&user, "[tmux\nbinary = ").unwrap();

        let err = load_hierarchy_from(&user, &dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::SettingsParseError { .. }));
    }

    #[test]
    fn test_hierarchy_validates_merged_result() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("project.toml");
        fs::write(&project, "[split]\ndefault_percentage = 0\n").unwrap();

        let err = load_hierarchy_from(&dir.path().join("none.toml"), &project).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSettings { .. }));
    }

    #[test]
    fn test_load_hierarchy_reads_user_config_from_home() {
        let home = TempDir::new().unwrap();
        let paths = MuxlayPaths::from_dir(home.path().join(".muxlay"));
        fs::create_dir_all(paths.muxlay_dir()).unwrap();
        fs::write(paths.user_config(), "[split]\nhonor_percentage = false\n").unwrap();

        temp_env::with_var("HOME", Some(home.path()), || {
            let settings = load_hierarchy().unwrap();
            assert!(!settings.split.honor_percentage());
        });
    }

    #[test]
    fn test_merge_settings_keeps_base_when_override_empty() {
        let mut base = MuxlaySettings::default();
        base.split.default_percentage = Some(30);
        let merged = merge_settings(base.clone(), MuxlaySettings::default());
        assert_eq!(merged, base);
    }
}
