use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("muxlay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create tmux sessions from declarative window and pane layouts")
        .long_about("muxlay reads a JSON or TOML layout describing a tmux session (named windows, each split into panes) and drives tmux to build exactly that layout. Every step is checked; the first failing tmux command stops the run.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
