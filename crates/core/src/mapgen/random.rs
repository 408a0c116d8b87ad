//! Injectable random source. A session owns exactly one of these; every stochastic
//! decision in generation and gameplay draws from it in a fixed order.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` draw range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRange {
    pub start: u32,
    pub end: u32,
}

impl DrawRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

pub trait RandomSource {
    /// Uniform draw in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    fn between(&mut self, range: DrawRange) -> u32 {
        debug_assert!(!range.is_empty());
        range.start + self.below(range.end - range.start)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

pub struct SessionRng {
    rng: ChaCha8Rng,
    draws: u64,
}

impl SessionRng {
    pub fn from_seed(seed: i64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed as u64), draws: 0 }
    }

    /// Number of draws consumed since seeding.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for SessionRng {
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.draws += 1;
        (self.rng.next_u64() % u64::from(bound)) as u32
    }
}

/// Replays a fixed list of raw values (reduced modulo the bound), cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        let raw = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        raw % bound
    }
}
