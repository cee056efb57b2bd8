use clap::ArgMatches;
use tracing::info;

use super::helpers::{
    load_settings_with_warning, read_layout, report_failure, validate_against_tmux,
};
use crate::color;

pub(crate) fn handle_check_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings_with_warning();
    let (layout, source) =
        read_layout(matches).map_err(|e| report_failure("cli.check_failed", e))?;
    info!(event = "cli.check_started", session = %layout.name, source = %source);

    validate_against_tmux(matches, &settings, &layout, "cli.check_failed")?;

    println!(
        "{} {} ({} windows, {} panes)",
        color::moss("Layout is valid:"),
        color::teal(&layout.name),
        layout.windows().len(),
        layout.pane_count()
    );

    info!(event = "cli.check_completed", session = %layout.name);
    Ok(())
}
