use clap::ArgMatches;
use tracing::info;

use muxlay_core::Executor;

use super::helpers::{
    load_settings_with_warning, read_layout, report_failure, sequencer_options, tmux_runner,
};
use crate::color;

pub(crate) fn handle_load_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings_with_warning();
    let (layout, source) =
        read_layout(matches).map_err(|e| report_failure("cli.load_failed", e))?;

    info!(
        event = "cli.load_started",
        session = %layout.name,
        source = %source
    );
    println!("{} {}", color::muted("Layout:"), source);

    let runner = tmux_runner(matches, &settings)
        .map_err(|e| report_failure("cli.load_failed", e))?
        .with_echo(matches.get_flag("trace"));
    let executor = Executor::new(runner, sequencer_options(matches, &settings));

    let created = executor
        .execute(&layout)
        .map_err(|e| report_failure("cli.load_failed", e))?;

    println!(
        "{} {}",
        color::moss("Session created:"),
        color::bold(&color::teal(&created.session))
    );
    println!("  {} {}", color::muted("Windows:"), created.windows);
    println!("  {} {}", color::muted("Panes:"), created.panes);
    eprintln!(
        "{}",
        color::hint(&format!("Attach with: {}", created.attach_command()))
    );

    info!(
        event = "cli.load_completed",
        session = %created.session,
        commands = created.commands_run
    );

    Ok(())
}
