mod global;
mod layout;

#[cfg(test)]
mod tests;

use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(layout::load_command())
        .subcommand(layout::check_command())
        .subcommand(layout::plan_command())
        .subcommand(layout::example_command())
}
