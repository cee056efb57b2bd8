use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set the $HOME environment variable")]
    HomeNotFound,
}

/// Extensions tried, in order, when a layout is referenced by bare name.
pub const LAYOUT_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Centralized path construction for the `~/.muxlay/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct MuxlayPaths {
    muxlay_dir: PathBuf,
}

impl MuxlayPaths {
    /// Resolve paths from the user's home directory (`~/.muxlay`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            muxlay_dir: home.join(".muxlay"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(muxlay_dir: PathBuf) -> Self {
        Self { muxlay_dir }
    }

    /// The base `~/.muxlay` directory.
    pub fn muxlay_dir(&self) -> &Path {
        &self.muxlay_dir
    }

    /// Directory holding named layouts (`muxlay load work` → `layouts/work.json`).
    pub fn layouts_dir(&self) -> PathBuf {
        self.muxlay_dir.join("layouts")
    }

    pub fn user_config(&self) -> PathBuf {
        self.muxlay_dir.join("config.toml")
    }

    /// Candidate files for a named layout, in lookup order.
    pub fn named_layout_candidates(&self, name: &str) -> Vec<PathBuf> {
        LAYOUT_EXTENSIONS
            .iter()
            .map(|ext| self.layouts_dir().join(format!("{name}.{ext}")))
            .collect()
    }

    // --- Static helpers (no self) ---

    /// Project-level config: `<project_root>/.muxlay/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".muxlay").join("config.toml")
    }
}
