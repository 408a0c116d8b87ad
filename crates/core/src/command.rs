//! Abstract command stream consumed by the run driver.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    NewGame,
    LoadGame,
    SeedDigit(char),
    ConfirmSeed,
    Move(Direction),
    EnterFeature,
    ToggleLock,
    QuitAndSave,
}

impl Command {
    /// Commands that act on a running session rather than the start menu.
    pub fn is_play(self) -> bool {
        matches!(self, Self::Move(_) | Self::EnterFeature | Self::ToggleLock | Self::QuitAndSave)
    }
}

/// A stream ends once `has_next` is false; consumers stop there without calling `next`.
/// A `None` from `next` also ends the stream.
pub trait CommandSource {
    fn has_next(&self) -> bool;
    fn next(&mut self) -> Option<Command>;
}

impl<S: CommandSource + ?Sized> CommandSource for &mut S {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Command> {
        (**self).next()
    }
}

/// In-memory command source, also used to replay journals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedCommands {
    pending: VecDeque<Command>,
}

impl ScriptedCommands {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self { pending: commands.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl CommandSource for ScriptedCommands {
    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn next(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }
}
