//! Recording runner with scripted results, for tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::{CommandOutput, Runner, RunnerError, SessionProbe};
use crate::sequencer::TmuxCommand;

enum Scripted {
    Exit { code: i32, stderr: String },
    SpawnError,
}

#[derive(Default)]
pub(crate) struct FakeRunner {
    existing: HashSet<String>,
    probe_fails: bool,
    probes: Cell<usize>,
    script: HashMap<usize, Scripted>,
    calls: RefCell<Vec<TmuxCommand>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_existing_session(mut self, name: &str) -> Self {
        self.existing.insert(name.to_string());
        self
    }

    pub(crate) fn with_probe_failure(mut self) -> Self {
        self.probe_fails = true;
        self
    }

    /// Make the `index`-th `run` call (0-based) exit with `code`.
    pub(crate) fn fail_at(mut self, index: usize, code: i32, stderr: &str) -> Self {
        self.script.insert(
            index,
            Scripted::Exit {
                code,
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make the `index`-th `run` call fail to spawn.
    pub(crate) fn spawn_error_at(mut self, index: usize) -> Self {
        self.script.insert(index, Scripted::SpawnError);
        self
    }

    pub(crate) fn calls(&self) -> Vec<TmuxCommand> {
        self.calls.borrow().clone()
    }

    pub(crate) fn probe_count(&self) -> usize {
        self.probes.get()
    }
}

impl SessionProbe for FakeRunner {
    fn session_exists(&self, name: &str) -> Result<bool, RunnerError> {
        self.probes.set(self.probes.get() + 1);
        if self.probe_fails {
            return Err(RunnerError::BinaryNotFound {
                binary: "tmux".to_string(),
            });
        }
        Ok(self.existing.contains(name))
    }
}

impl Runner for FakeRunner {
    fn run(&self, command: &TmuxCommand) -> Result<CommandOutput, RunnerError> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(command.clone());
        match self.script.get(&index) {
            None => Ok(CommandOutput::success()),
            Some(Scripted::Exit { code, stderr }) => Ok(CommandOutput::failure(*code, stderr)),
            Some(Scripted::SpawnError) => Err(RunnerError::SpawnFailed {
                command: command.command_line(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            }),
        }
    }
}
