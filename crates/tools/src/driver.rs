//! Runs a whole command stream, which may quit and load several times. Each save
//! replaces the previous one, just like the save file on disk.

use seedworld::{CommandJournal, CommandSource, RunError, SavedSession, Session, WorldConfig, run};
use tracing::info;

pub struct PlayResult {
    /// The session left running (or ended) by the last run that started one.
    pub session: Option<Session>,
    /// The most recent save, either from this stream or the one passed in.
    pub saved: Option<SavedSession>,
    /// Saves made by this stream, in order.
    pub saves: Vec<SavedSession>,
}

pub fn play(
    mut source: impl CommandSource,
    persisted: Option<SavedSession>,
    config: &WorldConfig,
) -> Result<PlayResult, RunError> {
    let mut result = PlayResult { session: None, saved: persisted, saves: Vec::new() };

    loop {
        let report = run(&mut source, result.saved.as_ref(), config)?;
        if let Some(saved) = report.saved {
            info!(seed = saved.seed, avatar = ?saved.avatar, "session saved");
            result.saved = Some(saved);
            result.saves.push(saved);
        }
        if report.session.is_some() {
            result.session = report.session;
        }
        if !source.has_next() {
            return Ok(result);
        }
    }
}

/// Plays a recorded journal; loads read the save recorded in its header.
pub fn replay(journal: &CommandJournal, config: &WorldConfig) -> Result<PlayResult, RunError> {
    play(journal.to_source(), journal.persisted, config)
}
