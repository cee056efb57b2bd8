use clap::{Arg, ArgAction, Command};

fn layout_arg() -> Arg {
    Arg::new("layout")
        .help("Layout file, or the name of a layout in ~/.muxlay/layouts (default layout if omitted)")
        .index(1)
}

fn tmux_arg() -> Arg {
    Arg::new("tmux")
        .long("tmux")
        .help("tmux binary to use (overrides tmux.binary in config)")
        .value_name("BINARY")
}

fn fixed_split_arg() -> Arg {
    Arg::new("fixed-split")
        .long("fixed-split")
        .help("Split every pane 50/50, ignoring configured percentages")
        .action(ArgAction::SetTrue)
}

fn offline_arg() -> Arg {
    Arg::new("offline")
        .long("offline")
        .help("Skip the existing-session check so tmux is not needed")
        .action(ArgAction::SetTrue)
}

pub fn load_command() -> Command {
    Command::new("load")
        .about("Create a tmux session from a layout")
        .arg(layout_arg())
        .arg(tmux_arg())
        .arg(fixed_split_arg())
        .arg(
            Arg::new("trace")
                .short('x')
                .long("trace")
                .help("Print each tmux command before running it")
                .action(ArgAction::SetTrue),
        )
}

pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a layout without creating anything")
        .arg(layout_arg())
        .arg(tmux_arg())
        .arg(offline_arg())
}

pub fn plan_command() -> Command {
    Command::new("plan")
        .about("Print the tmux commands a layout would run")
        .arg(layout_arg())
        .arg(tmux_arg())
        .arg(fixed_split_arg())
        .arg(offline_arg())
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}

pub fn example_command() -> Command {
    Command::new("example")
        .about("Print the built-in default layout")
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["json", "toml"])
                .default_value("json"),
        )
}
