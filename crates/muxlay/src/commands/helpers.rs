use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info, warn};

use muxlay_config::{ConfigError, DEFAULT_SPLIT_PERCENTAGE, MuxlaySettings, SessionLayout};
use muxlay_core::{
    MuxlayError, RunnerError, SequencerOptions, SessionProbe, SplitPolicy, TmuxRunner,
    validate_layout,
};
use muxlay_paths::MuxlayPaths;

use crate::color;

/// Where a layout came from, for user-facing messages.
pub enum LayoutSource {
    Default,
    File(PathBuf),
}

impl std::fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutSource::Default => f.write_str("built-in default layout"),
            LayoutSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Probe that reports no existing sessions, for `--offline`.
pub struct OfflineProbe;

impl SessionProbe for OfflineProbe {
    fn session_exists(&self, _name: &str) -> Result<bool, RunnerError> {
        Ok(false)
    }
}

/// Load settings with warning on errors.
///
/// Falls back to defaults if loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_settings_with_warning() -> MuxlaySettings {
    match MuxlaySettings::load_hierarchy() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!(
                    "Warning: Could not load config: {}. Using defaults.\n\
                     Tip: Check ~/.muxlay/config.toml and ./.muxlay/config.toml for syntax errors.",
                    e
                ))
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            MuxlaySettings::default()
        }
    }
}

/// Read the layout named by the `layout` argument, or the default layout.
pub fn read_layout(matches: &ArgMatches) -> Result<(SessionLayout, LayoutSource), ConfigError> {
    let Some(arg) = matches.get_one::<String>("layout") else {
        info!(event = "cli.layout.default_used");
        return Ok((SessionLayout::default_layout(), LayoutSource::Default));
    };

    let path = match MuxlayPaths::resolve() {
        Ok(paths) => muxlay_config::resolve_layout_path(arg, &paths)?,
        Err(e) => {
            warn!(event = "cli.layout.paths_unavailable", error = %e);
            PathBuf::from(arg)
        }
    };
    let layout = muxlay_config::load_layout(&path)?;
    Ok((layout, LayoutSource::File(path)))
}

/// Locate tmux, preferring `--tmux` over the configured binary.
pub fn tmux_runner(
    matches: &ArgMatches,
    settings: &MuxlaySettings,
) -> Result<TmuxRunner, RunnerError> {
    let binary = matches
        .get_one::<String>("tmux")
        .map(String::as_str)
        .unwrap_or_else(|| settings.tmux.binary());
    TmuxRunner::locate(binary)
}

/// Sequencer options from settings, with `--fixed-split` applied.
pub fn sequencer_options(matches: &ArgMatches, settings: &MuxlaySettings) -> SequencerOptions {
    let mut options = SequencerOptions::from_settings(settings);
    let fixed = matches
        .try_get_one::<bool>("fixed-split")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    if fixed {
        options.split_policy = SplitPolicy::Fixed(DEFAULT_SPLIT_PERCENTAGE);
    }
    options
}

/// Validate `layout`, probing tmux for an existing session unless `--offline`.
pub fn validate_against_tmux(
    matches: &ArgMatches,
    settings: &MuxlaySettings,
    layout: &SessionLayout,
    failure_event: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if matches.get_flag("offline") {
        return validate_layout(layout, &OfflineProbe)
            .map_err(|e| report_failure(failure_event, e));
    }

    let runner = tmux_runner(matches, settings).map_err(|e| report_failure(failure_event, e))?;
    validate_layout(layout, &runner).map_err(|e| report_failure(failure_event, e))
}

/// Print `e` to stderr, log it under `event`, and box it for the caller.
pub fn report_failure<E: MuxlayError>(event: &str, e: E) -> Box<dyn std::error::Error> {
    eprintln!("{}", color::error(&e.to_string()));
    if e.is_user_error() {
        warn!(event = event, error_code = e.error_code(), error = %e);
    } else {
        error!(event = event, error_code = e.error_code(), error = %e);
    }
    Box::new(e)
}
