use serde::{Deserialize, Serialize};

use crate::command::{Command, ScriptedCommands};
use crate::session::SavedSession;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every command fed to a run, in order. Replaying it from an empty menu, with `persisted`
/// as the save a load reads, reproduces the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandJournal {
    pub format_version: u16,
    pub build_id: String,
    /// The save on disk when recording started.
    #[serde(default)]
    pub persisted: Option<SavedSession>,
    pub commands: Vec<CommandRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub seq: u64,
    pub command: Command,
}

impl CommandJournal {
    pub fn new() -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: "dev".to_string(),
            persisted: None,
            commands: Vec::new(),
        }
    }

    pub fn with_persisted(mut self, persisted: Option<SavedSession>) -> Self {
        self.persisted = persisted;
        self
    }

    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut journal = Self::new();
        for command in commands {
            journal.append(command);
        }
        journal
    }

    pub fn append(&mut self, command: Command) -> u64 {
        let seq = self.commands.len() as u64;
        self.commands.push(CommandRecord { seq, command });
        seq
    }

    pub fn to_source(&self) -> ScriptedCommands {
        ScriptedCommands::new(self.commands.iter().map(|record| record.command))
    }
}

impl Default for CommandJournal {
    fn default() -> Self {
        Self::new()
    }
}
