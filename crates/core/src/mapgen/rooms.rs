//! Rejection-sampled room placement over a shared occupancy set.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::WorldConfig;
use crate::types::{Pos, TileKind};

use super::grid::Grid;
use super::random::RandomSource;

/// Axis-aligned room. `anchor` is the top-left wall corner; extents include the walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub anchor: Pos,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn right(self) -> i32 {
        self.anchor.x + self.width - 1
    }

    pub fn bottom(self) -> i32 {
        self.anchor.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        self.anchor.shifted(self.width / 2, self.height / 2)
    }

    pub fn contains(self, pos: Pos) -> bool {
        (self.anchor.x..=self.right()).contains(&pos.x)
            && (self.anchor.y..=self.bottom()).contains(&pos.y)
    }

    /// Wall cells: top row, bottom row, then the left and right columns between them.
    pub fn perimeter(self) -> Vec<Pos> {
        let mut walls = Vec::with_capacity((2 * (self.width + self.height)) as usize);
        for x in self.anchor.x..=self.right() {
            walls.push(Pos { y: self.anchor.y, x });
        }
        for x in self.anchor.x..=self.right() {
            walls.push(Pos { y: self.bottom(), x });
        }
        for y in (self.anchor.y + 1)..self.bottom() {
            walls.push(Pos { y, x: self.anchor.x });
        }
        for y in (self.anchor.y + 1)..self.bottom() {
            walls.push(Pos { y, x: self.right() });
        }
        walls
    }

    pub fn interior(self) -> Vec<Pos> {
        ((self.anchor.y + 1)..self.bottom())
            .flat_map(|y| ((self.anchor.x + 1)..self.right()).map(move |x| Pos { y, x }))
            .collect()
    }

    /// Linear indices of the room expanded by `margin` on every side, clipped to the grid.
    pub fn footprint(self, margin: i32, grid: &Grid) -> Vec<usize> {
        ((self.anchor.y - margin)..=(self.bottom() + margin))
            .flat_map(|y| {
                ((self.anchor.x - margin)..=(self.right() + margin)).map(move |x| Pos { y, x })
            })
            .filter_map(|pos| grid.index_of(pos))
            .collect()
    }

    pub fn draw(self, grid: &mut Grid) {
        for pos in self.perimeter() {
            grid.set(pos, TileKind::Wall);
        }
        for pos in self.interior() {
            grid.set(pos, TileKind::Floor);
        }
    }
}

/// Union of every accepted footprint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: BTreeSet<usize>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_free(&self, footprint: &[usize]) -> bool {
        !footprint.iter().any(|index| self.cells.contains(index))
    }

    pub fn reserve(&mut self, footprint: &[usize]) {
        self.cells.extend(footprint.iter().copied());
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Draw order: attempt count once, then per attempt x, y, width, height.
pub fn place_rooms(
    grid: &mut Grid,
    occupancy: &mut Occupancy,
    rng: &mut impl RandomSource,
    config: &WorldConfig,
) -> Vec<Room> {
    let attempts = rng.between(config.attempts);
    let margin = config.footprint_margin as i32;

    let mut rooms = Vec::new();
    for _ in 0..attempts {
        let x = rng.between(config.anchor_x) as i32;
        let y = rng.between(config.anchor_y) as i32;
        let width = rng.between(config.room_size) as i32;
        let height = rng.between(config.room_size) as i32;
        let candidate = Room { anchor: Pos { y, x }, width, height };

        let footprint = candidate.footprint(margin, grid);
        if !occupancy.is_free(&footprint) {
            continue;
        }
        occupancy.reserve(&footprint);
        candidate.draw(grid);
        rooms.push(candidate);
    }

    debug!(attempts, accepted = rooms.len(), "placed rooms");
    rooms
}
