//! Generation pipeline: rooms, chain, corridors, post-processing.

use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::{ConfigError, WorldConfig};

use super::chain::{ConnectivityChain, build_chain};
use super::corridors::carve_corridor;
use super::grid::Grid;
use super::post::post_process;
use super::random::{RandomSource, SessionRng};
use super::rooms::{Occupancy, Room, place_rooms};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWorld {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub chain: ConnectivityChain,
}

impl GeneratedWorld {
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.grid.canonical_bytes())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapGenerator {
    config: WorldConfig,
}

impl MapGenerator {
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn generate(&self, seed: i64) -> GeneratedWorld {
        self.generate_with(&mut SessionRng::from_seed(seed))
    }

    /// Consumes draws from `rng` in the fixed generation order; the caller keeps the
    /// source for any later stochastic decision.
    pub fn generate_with(&self, rng: &mut impl RandomSource) -> GeneratedWorld {
        let config = &self.config;
        let mut grid = Grid::new(config.width, config.height);
        let mut occupancy = Occupancy::new();

        let rooms = place_rooms(&mut grid, &mut occupancy, rng, config);
        let chain = build_chain(&rooms, rng);
        for (from, to) in chain.links() {
            let (start, end) = (rooms[from].center(), rooms[to].center());
            carve_corridor(&mut grid, start, end, config.corridor_width);
        }
        post_process(&mut grid, config.background);

        debug!(rooms = rooms.len(), links = chain.link_count(), "generated world");
        GeneratedWorld { grid, rooms, chain }
    }
}
