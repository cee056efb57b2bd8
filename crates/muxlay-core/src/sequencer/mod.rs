//! Turns a validated layout into the ordered list of tmux commands that
//! builds it.
//!
//! Every command's target depends on what earlier commands created, so the
//! walk threads a small [`SequenceState`] (window number, next pane index)
//! through each step. The output is a pure function of the layout and the
//! options: no clock, no tmux queries.

mod command;

pub use command::{CommandKind, Step, TmuxCommand};

use muxlay_config::{MuxlaySettings, Orientation, SessionLayout, Split, WindowLayout};

/// How a split's configured `percentage` is turned into a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Every split uses this percentage; configured values are ignored.
    Fixed(u8),
    /// Use the configured percentage, falling back to `default`.
    Honor { default: u8 },
}

impl SplitPolicy {
    pub fn percentage_for(&self, split: &Split) -> u8 {
        match *self {
            SplitPolicy::Fixed(percentage) => percentage,
            SplitPolicy::Honor { default } => split
                .percentage
                .filter(|p| p.is_finite())
                .map(|p| p.round().clamp(1.0, 99.0) as u8)
                .unwrap_or(default),
        }
    }
}

impl Default for SplitPolicy {
    fn default() -> Self {
        SplitPolicy::Honor {
            default: muxlay_config::DEFAULT_SPLIT_PERCENTAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequencerOptions {
    /// Index tmux gives the first pane of a window (`pane-base-index`).
    pub pane_base_index: u32,
    pub split_policy: SplitPolicy,
}

impl SequencerOptions {
    pub fn from_settings(settings: &MuxlaySettings) -> Self {
        let default = settings.split.default_percentage();
        let split_policy = if settings.split.honor_percentage() {
            SplitPolicy::Honor { default }
        } else {
            SplitPolicy::Fixed(default)
        };
        Self {
            pane_base_index: settings.tmux.pane_base_index(),
            split_policy,
        }
    }
}

/// Counters carried from one emitted command to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SequenceState {
    /// 1-based position of the window being built.
    window_number: u32,
    /// Index the next pane created in the current window will get.
    next_pane_index: u32,
}

/// Build the full command list for `layout`.
///
/// Assumes `layout` passed validation; a window without a name is addressed
/// by an empty name rather than causing a panic.
pub fn sequence(layout: &SessionLayout, options: &SequencerOptions) -> Vec<TmuxCommand> {
    let session = layout.name.as_str();
    let windows = layout.windows();
    let mut commands = Vec::with_capacity(2 + windows.len() + 2 * split_count(windows));

    let mut state = SequenceState {
        window_number: 0,
        next_pane_index: 0,
    };
    for window in windows {
        let (emitted, next) = sequence_window(session, window, state, options);
        commands.extend(emitted);
        state = next;
    }

    // Splits and later windows move focus; restore it to the first pane of
    // the first window. A lone unsplit window is already there.
    let focus_moved = windows.len() > 1 || split_count(windows) > 0;
    if let Some(first) = windows.first().filter(|_| focus_moved) {
        let name = window_name(first);
        commands.push(TmuxCommand::select_window(session, name));
        commands.push(TmuxCommand::select_pane(session, name, options.pane_base_index));
    }

    commands
}

fn split_count(windows: &[WindowLayout]) -> usize {
    windows.iter().map(|w| w.splits().count()).sum()
}

fn window_name(window: &WindowLayout) -> &str {
    window.name().unwrap_or_default()
}

/// Emit the creation command for one window plus its split chain.
fn sequence_window(
    session: &str,
    window: &WindowLayout,
    state: SequenceState,
    options: &SequencerOptions,
) -> (Vec<TmuxCommand>, SequenceState) {
    let window_number = state.window_number + 1;
    let name = window_name(window);
    let creation = if window_number == 1 {
        TmuxCommand::new_session(session, name, window.process())
    } else {
        TmuxCommand::new_window(session, window_number, name, window.process())
    };

    let mut commands = vec![creation];
    let mut state = SequenceState {
        window_number,
        next_pane_index: options.pane_base_index + 1,
    };

    // Each split cuts the newest pane, then focus moves onto the pane it
    // just created so the next split in the chain targets it.
    for split in window.splits() {
        let orientation = split.orientation.as_ref().unwrap_or(&Orientation::Vertical);
        let percentage = options.split_policy.percentage_for(split);
        commands.push(TmuxCommand::split_pane(session, name, orientation, percentage));
        commands.push(TmuxCommand::select_pane(session, name, state.next_pane_index));
        state.next_pane_index += 1;
    }

    (commands, state)
}
