use std::fmt;

use muxlay_config::Orientation;

/// Classification of an emitted command, used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateSession,
    AddWindow,
    SplitPane,
    SelectPane,
    SelectWindow,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommandKind::CreateSession => "create-session",
            CommandKind::AddWindow => "add-window",
            CommandKind::SplitPane => "split-pane",
            CommandKind::SelectPane => "select-pane",
            CommandKind::SelectWindow => "select-window",
        };
        f.write_str(s)
    }
}

/// The semantic step a command belongs to, reported when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateSession,
    AddWindow { number: u32 },
    SplitInWindow { window: String },
    SelectPane { window: String, index: u32 },
    SelectWindow { window: String },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateSession => f.write_str("create-session"),
            Step::AddWindow { number } => write!(f, "add-window-{number}"),
            Step::SplitInWindow { window } => write!(f, "split-in-window-{window}"),
            Step::SelectPane { .. } => f.write_str("select-pane"),
            Step::SelectWindow { .. } => f.write_str("select-window"),
        }
    }
}

/// One tmux invocation. `args` excludes the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxCommand {
    pub kind: CommandKind,
    pub step: Step,
    pub args: Vec<String>,
}

impl TmuxCommand {
    /// `new-session -d -s SESSION -n WINDOW [PROCESS]`
    pub fn new_session(session: &str, window: &str, process: Option<&str>) -> Self {
        let mut args = strings(&["new-session", "-d", "-s", session, "-n", window]);
        args.extend(process.map(str::to_string));
        Self {
            kind: CommandKind::CreateSession,
            step: Step::CreateSession,
            args,
        }
    }

    /// `new-window -t SESSION:NUMBER -n WINDOW [PROCESS]`
    pub fn new_window(session: &str, number: u32, window: &str, process: Option<&str>) -> Self {
        let target = format!("{session}:{number}");
        let mut args = strings(&["new-window", "-t", &target, "-n", window]);
        args.extend(process.map(str::to_string));
        Self {
            kind: CommandKind::AddWindow,
            step: Step::AddWindow { number },
            args,
        }
    }

    /// `split-window -t SESSION:WINDOW -v|-h -l PERCENT% -d`
    ///
    /// tmux names splits by where the new pane goes, the layout by the cut
    /// line: a vertical cut is tmux's `-h` (side by side).
    pub fn split_pane(
        session: &str,
        window: &str,
        orientation: &Orientation,
        percentage: u8,
    ) -> Self {
        let target = format!("{session}:{window}");
        let direction = match orientation {
            Orientation::Horizontal => "-v",
            Orientation::Vertical | Orientation::Unrecognized(_) => "-h",
        };
        let size = format!("{percentage}%");
        Self {
            kind: CommandKind::SplitPane,
            step: Step::SplitInWindow {
                window: window.to_string(),
            },
            args: strings(&["split-window", "-t", &target, direction, "-l", &size, "-d"]),
        }
    }

    /// `select-pane -t SESSION:WINDOW.INDEX`
    pub fn select_pane(session: &str, window: &str, index: u32) -> Self {
        let target = format!("{session}:{window}.{index}");
        Self {
            kind: CommandKind::SelectPane,
            step: Step::SelectPane {
                window: window.to_string(),
                index,
            },
            args: strings(&["select-pane", "-t", &target]),
        }
    }

    /// `select-window -t SESSION:WINDOW`
    pub fn select_window(session: &str, window: &str) -> Self {
        let target = format!("{session}:{window}");
        Self {
            kind: CommandKind::SelectWindow,
            step: Step::SelectWindow {
                window: window.to_string(),
            },
            args: strings(&["select-window", "-t", &target]),
        }
    }

    /// Render as a shell-style command line with `program` in front.
    pub fn render_with(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args.iter().map(|a| quote(a)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render with the default `tmux` program name.
    pub fn command_line(&self) -> String {
        self.render_with("tmux")
    }
}

impl fmt::Display for TmuxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Single-quote an argument if it would not survive a shell as one word.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.:=%/,+@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
