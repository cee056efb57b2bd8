use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global JSON log subscriber on stderr.
///
/// Quiet mode turns every level off so stderr only carries user-facing
/// errors. Otherwise `RUST_LOG` is honored, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
