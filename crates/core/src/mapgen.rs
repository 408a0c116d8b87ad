//! Procedural world generation split into one submodule per pipeline stage.

pub mod chain;
pub mod corridors;
pub mod grid;
pub mod post;
pub mod random;
pub mod rooms;

mod generator;

pub use chain::ConnectivityChain;
pub use generator::{GeneratedWorld, MapGenerator};
pub use grid::Grid;
pub use random::{DrawRange, RandomSource, ScriptedRandom, SessionRng};
pub use rooms::{Occupancy, Room};

/// Generates the reference-sized world for `seed`.
pub fn generate(seed: i64) -> GeneratedWorld {
    MapGenerator::default().generate(seed)
}
