//! muxlay-core: build tmux sessions from declarative layouts
//!
//! # Main Entry Points
//!
//! - [`validation`] - Check a layout before touching tmux
//! - [`sequencer`] - Turn a layout into ordered tmux commands
//! - [`runner`] - Run commands against the tmux binary
//! - [`executor`] - Validate, sequence and run in one pass

pub mod errors;
pub mod executor;
pub mod logging;
pub mod runner;
pub mod sequencer;
pub mod validation;

pub use errors::MuxlayError;
pub use executor::{ExecutionError, Executor, SessionCreated};
pub use runner::{CommandOutput, Runner, RunnerError, SessionProbe, TmuxRunner};
pub use sequencer::{CommandKind, SequencerOptions, SplitPolicy, Step, TmuxCommand, sequence};
pub use validation::{ValidationError, validate_layout};

// Re-export config types used in the core API
pub use muxlay_config::{ConfigError, MuxlaySettings, Orientation, SessionLayout, Split, WindowLayout};

// Re-export logging initialization
pub use logging::init_logging;
