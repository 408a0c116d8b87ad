//! The menu and play driver: turns a command stream into a session, the way both a live
//! run and a journal replay do.

use thiserror::Error;
use tracing::debug;

use crate::command::{Command, CommandSource};
use crate::config::WorldConfig;
use crate::journal::CommandJournal;
use crate::session::{CommandOutcome, SavedSession, Session, SessionError};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("no seed digits were entered")]
    Empty,
    #[error("seed `{text}` is not a signed 64-bit integer")]
    Malformed { text: String },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("load requested but there is no saved session")]
    NothingToLoad,
    #[error(transparent)]
    Session(#[from] SessionError),
}

pub fn parse_seed(text: &str) -> Result<i64, SeedError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SeedError::Empty);
    }
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SeedError::Malformed { text: trimmed.to_string() });
    }
    trimmed.parse().map_err(|_| SeedError::Malformed { text: trimmed.to_string() })
}

/// Seed characters collected between NewGame and ConfirmSeed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedEntry {
    text: String,
}

impl SeedEntry {
    pub fn push(&mut self, digit: char) {
        self.text.push(digit);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish(&self) -> Result<i64, SeedError> {
        parse_seed(&self.text)
    }
}

pub struct RunReport {
    /// `None` when the input never left the menu.
    pub session: Option<Session>,
    /// Set when the run stopped on QuitAndSave.
    pub saved: Option<SavedSession>,
    pub commands_read: usize,
}

impl RunReport {
    pub fn snapshot_hash(&self) -> Option<u64> {
        self.session.as_ref().map(Session::snapshot_hash)
    }
}

enum Phase {
    Menu,
    SeedEntry(SeedEntry),
    Playing(Session),
}

pub fn run(
    mut source: impl CommandSource,
    persisted: Option<&SavedSession>,
    config: &WorldConfig,
) -> Result<RunReport, RunError> {
    let mut phase = Phase::Menu;
    let mut commands_read = 0;

    while source.has_next() {
        let Some(command) = source.next() else {
            break;
        };
        commands_read += 1;
        phase = match (phase, command) {
            (Phase::Menu, Command::NewGame) => Phase::SeedEntry(SeedEntry::default()),
            (Phase::Menu, Command::LoadGame) => {
                let saved = persisted.ok_or(RunError::NothingToLoad)?;
                debug!(seed = saved.seed, "loading saved session");
                Phase::Playing(Session::restore(saved, config)?)
            }
            (Phase::SeedEntry(mut entry), Command::SeedDigit(digit)) => {
                entry.push(digit);
                Phase::SeedEntry(entry)
            }
            (Phase::SeedEntry(entry), Command::ConfirmSeed) => {
                Phase::Playing(Session::new(entry.finish()?, config)?)
            }
            (Phase::Playing(mut session), command) if command.is_play() => {
                if let CommandOutcome::Saved(saved) = session.apply(command)? {
                    debug!(commands_read, "run stopped on save");
                    let session = Some(session);
                    return Ok(RunReport { session, saved: Some(saved), commands_read });
                }
                Phase::Playing(session)
            }
            (phase, _) => phase,
        };
    }

    let session = match phase {
        Phase::Menu => None,
        Phase::SeedEntry(entry) => Some(Session::new(entry.finish()?, config)?),
        Phase::Playing(session) => Some(session),
    };
    debug!(commands_read, started = session.is_some(), "command source exhausted");
    Ok(RunReport { session, saved: None, commands_read })
}

/// Loads read the save the journal was recorded against, never the current one on disk.
pub fn replay_journal(
    journal: &CommandJournal,
    config: &WorldConfig,
) -> Result<RunReport, RunError> {
    run(journal.to_source(), journal.persisted.as_ref(), config)
}
