//! A play session: the generated world plus avatar, door and closet state, all driven
//! by one seeded random source.

mod closet;
mod hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::command::Command;
use crate::config::{ConfigError, WorldConfig};
use crate::mapgen::{Grid, MapGenerator, RandomSource, SessionRng};
use crate::types::{Direction, Pos, TileKind};

use closet::Closet;

/// The facts a reload needs on top of regenerating from the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub seed: i64,
    pub avatar: Pos,
    pub door: Pos,
    pub door_locked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved(Pos),
    Blocked,
    EnteredCloset,
    LeftCloset,
    DoorLocked(Pos),
    NoEffect,
    Saved(SavedSession),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("seed {seed} produced fewer than two floor tiles; nowhere to spawn")]
    NoFloor { seed: i64 },
    #[error("saved {what} at {pos:?} is not a floor tile of the world for seed {seed}")]
    InvalidSave { seed: i64, what: &'static str, pos: Pos },
    #[error("session already ended")]
    Ended,
    #[error("{0:?} is not a play command")]
    NotAPlayCommand(Command),
}

pub struct Session {
    seed: i64,
    rng: SessionRng,
    world: Grid,
    avatar: Pos,
    door: Pos,
    door_locked: bool,
    closet: Option<Closet>,
    ended: bool,
}

impl Session {
    pub fn new(seed: i64, config: &WorldConfig) -> Result<Self, SessionError> {
        let (rng, mut world, door, avatar) = Self::generate(seed, config)?;
        world.set(door, TileKind::LockedDoor);
        world.set(avatar, TileKind::Avatar);
        debug!(seed, ?avatar, ?door, "started new session");

        Ok(Self { seed, rng, world, avatar, door, door_locked: true, closet: None, ended: false })
    }

    /// Regenerates from the saved seed, consuming the same spawn draws as a new session,
    /// then applies the saved facts verbatim.
    pub fn restore(saved: &SavedSession, config: &WorldConfig) -> Result<Self, SessionError> {
        let seed = saved.seed;
        let (rng, mut world, _, _) = Self::generate(seed, config)?;
        for (what, pos) in [("door", saved.door), ("avatar", saved.avatar)] {
            if !world.is(pos, TileKind::Floor) {
                return Err(SessionError::InvalidSave { seed, what, pos });
            }
        }

        world.set(saved.door, door_tile(saved.door_locked));
        world.set(saved.avatar, TileKind::Avatar);
        debug!(seed, avatar = ?saved.avatar, door = ?saved.door, "restored session");

        Ok(Self {
            seed,
            rng,
            world,
            avatar: saved.avatar,
            door: saved.door,
            door_locked: saved.door_locked,
            closet: None,
            ended: false,
        })
    }

    fn generate(
        seed: i64,
        config: &WorldConfig,
    ) -> Result<(SessionRng, Grid, Pos, Pos), SessionError> {
        let generator = MapGenerator::new(config.clone())?;
        let mut rng = SessionRng::from_seed(seed);
        let world = generator.generate_with(&mut rng).grid;

        let mut floor = world.positions_of(TileKind::Floor);
        if floor.len() < 2 {
            return Err(SessionError::NoFloor { seed });
        }
        let door = floor.remove(rng.below(floor.len() as u32) as usize);
        let avatar = floor[rng.below(floor.len() as u32) as usize];
        Ok((rng, world, door, avatar))
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, SessionError> {
        if self.ended {
            return Err(SessionError::Ended);
        }
        let outcome = match command {
            Command::Move(direction) => self.move_avatar(direction),
            Command::EnterFeature => self.enter_feature(),
            Command::ToggleLock => self.lock_adjacent_door(),
            Command::QuitAndSave => {
                self.ended = true;
                CommandOutcome::Saved(self.save())
            }
            Command::NewGame | Command::LoadGame | Command::SeedDigit(_) | Command::ConfirmSeed => {
                return Err(SessionError::NotAPlayCommand(command));
            }
        };
        trace!(?command, ?outcome, draws = self.rng.draws(), "applied command");
        Ok(outcome)
    }

    fn move_avatar(&mut self, direction: Direction) -> CommandOutcome {
        let door_underfoot = door_tile(self.door_locked);
        let (grid, avatar, underlying) = match self.closet.as_mut() {
            Some(closet) => (&mut closet.grid, &mut closet.avatar, TileKind::Floor),
            None => {
                let underlying =
                    if self.avatar == self.door { door_underfoot } else { TileKind::Floor };
                (&mut self.world, &mut self.avatar, underlying)
            }
        };

        let destination = avatar.step(direction);
        if !grid.get(destination).is_some_and(TileKind::is_walkable) {
            return CommandOutcome::Blocked;
        }
        grid.set(*avatar, underlying);
        grid.set(destination, TileKind::Avatar);
        *avatar = destination;
        CommandOutcome::Moved(destination)
    }

    fn enter_feature(&mut self) -> CommandOutcome {
        if self.closet.take().is_some() {
            self.door_locked = false;
            if self.avatar != self.door {
                self.world.set(self.door, TileKind::UnlockedDoor);
            }
            debug!(door = ?self.door, "left closet; door unlocked");
            return CommandOutcome::LeftCloset;
        }

        let beside_locked_door = self
            .avatar
            .neighbors()
            .into_iter()
            .any(|neighbor| self.world.is(neighbor, TileKind::LockedDoor));
        if !beside_locked_door {
            return CommandOutcome::NoEffect;
        }
        match Closet::build(self.world.width(), self.world.height(), &mut self.rng) {
            Some(closet) => {
                debug!(spawn = ?closet.avatar, exit = ?closet.exit, "entered closet");
                self.closet = Some(closet);
                CommandOutcome::EnteredCloset
            }
            None => CommandOutcome::NoEffect,
        }
    }

    fn lock_adjacent_door(&mut self) -> CommandOutcome {
        if self.closet.is_some() {
            return CommandOutcome::NoEffect;
        }
        let Some(target) = self
            .avatar
            .neighbors()
            .into_iter()
            .find(|&neighbor| self.world.is(neighbor, TileKind::UnlockedDoor))
        else {
            return CommandOutcome::NoEffect;
        };
        self.world.set(target, TileKind::LockedDoor);
        self.door_locked = true;
        CommandOutcome::DoorLocked(target)
    }

    /// While inside the closet the saved avatar is the main-world position it left from.
    pub fn save(&self) -> SavedSession {
        SavedSession {
            seed: self.seed,
            avatar: self.avatar,
            door: self.door,
            door_locked: self.door_locked,
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The grid the avatar currently stands in.
    pub fn grid(&self) -> &Grid {
        self.closet.as_ref().map_or(&self.world, |closet| &closet.grid)
    }

    pub fn world(&self) -> &Grid {
        &self.world
    }

    /// Avatar position in the grid returned by [`Session::grid`].
    pub fn avatar(&self) -> Pos {
        self.closet.as_ref().map_or(self.avatar, |closet| closet.avatar)
    }

    pub fn door(&self) -> Pos {
        self.door
    }

    pub fn door_locked(&self) -> bool {
        self.door_locked
    }

    pub fn in_closet(&self) -> bool {
        self.closet.is_some()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn random_draws(&self) -> u64 {
        self.rng.draws()
    }
}

fn door_tile(locked: bool) -> TileKind {
    if locked { TileKind::LockedDoor } else { TileKind::UnlockedDoor }
}
