pub mod command;
pub mod config;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod session;
pub mod types;

pub use command::{Command, CommandSource, ScriptedCommands};
pub use config::{ConfigError, WorldConfig};
pub use journal::{CommandJournal, CommandRecord};
pub use mapgen::{GeneratedWorld, Grid, MapGenerator, generate};
pub use replay::{RunError, RunReport, SeedEntry, SeedError, parse_seed, replay_journal, run};
pub use session::{CommandOutcome, SavedSession, Session, SessionError};
pub use types::*;
