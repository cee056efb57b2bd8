use clap::ArgMatches;
use tracing::info;

use muxlay_core::{TmuxCommand, sequence};

use super::helpers::{
    load_settings_with_warning, read_layout, report_failure, sequencer_options,
    validate_against_tmux,
};
use crate::color;

#[derive(serde::Serialize)]
struct PlannedCommand<'a> {
    step: String,
    kind: String,
    command: String,
    args: &'a [String],
}

pub(crate) fn handle_plan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings_with_warning();
    let (layout, source) =
        read_layout(matches).map_err(|e| report_failure("cli.plan_failed", e))?;
    info!(event = "cli.plan_started", session = %layout.name, source = %source);

    validate_against_tmux(matches, &settings, &layout, "cli.plan_failed")?;

    let program = matches
        .get_one::<String>("tmux")
        .map(String::as_str)
        .unwrap_or_else(|| settings.tmux.binary());
    let commands = sequence(&layout, &sequencer_options(matches, &settings));

    if matches.get_flag("json") {
        let planned: Vec<PlannedCommand> = commands
            .iter()
            .map(|command| planned_command(command, program))
            .collect();
        println!("{}", serde_json::to_string_pretty(&planned)?);
    } else {
        let width = commands.len().to_string().len();
        for (i, command) in commands.iter().enumerate() {
            println!(
                "{:>width$}. {} {}",
                i + 1,
                color::amber(&format!("[{}]", command.step)),
                command.render_with(program),
            );
        }
    }

    info!(
        event = "cli.plan_completed",
        session = %layout.name,
        commands = commands.len()
    );
    Ok(())
}

fn planned_command<'a>(command: &'a TmuxCommand, program: &str) -> PlannedCommand<'a> {
    PlannedCommand {
        step: command.step.to_string(),
        kind: command.kind.to_string(),
        command: command.render_with(program),
        args: &command.args,
    }
}
