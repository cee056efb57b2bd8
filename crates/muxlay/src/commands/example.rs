use clap::ArgMatches;
use tracing::{error, info};

use muxlay_config::SessionLayout;

pub(crate) fn handle_example_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");
    let layout = SessionLayout::default_layout();

    let rendered = match format {
        "toml" => toml::to_string_pretty(&layout)?,
        "json" => serde_json::to_string_pretty(&layout)?,
        other => {
            error!(event = "cli.example_unknown_format", format = other);
            return Err(format!("Unknown format: {other}").into());
        }
    };
    println!("{}", rendered.trim_end());

    info!(event = "cli.example_completed", format = format);
    Ok(())
}
