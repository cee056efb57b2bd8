use clap::ArgMatches;
use tracing::error;

mod check;
mod example;
mod helpers;
mod load;
mod plan;

use check::handle_check_command;
use example::handle_example_command;
use load::handle_load_command;
use plan::handle_plan_command;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("load", sub_matches)) => handle_load_command(sub_matches),
        Some(("check", sub_matches)) => handle_check_command(sub_matches),
        Some(("plan", sub_matches)) => handle_plan_command(sub_matches),
        Some(("example", sub_matches)) => handle_example_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
